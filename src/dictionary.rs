//! 名称/同义词 -> 实体 id 的有序字典

use crate::entity::{City, CityId, Region, RegionId};
use crate::error::StoreError;
use crate::store::ReferenceStore;
use std::collections::HashMap;
use tracing::{debug, warn};

/// 字典条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<Id> {
    /// 登记时的原始文本
    pub text: String,
    /// 小写后的匹配文本，非空
    pub needle: String,
    pub id: Id,
}

/// 按登记顺序排列的 (文本, id) 列表
///
/// 同一文本重复登记时保留最先登记的映射，后续登记被忽略。
#[derive(Debug, Clone)]
pub struct NameIndex<Id> {
    entries: Vec<Entry<Id>>,
    /// 文本 -> entries 中的位置
    positions: HashMap<String, usize>,
    /// 因重复或空白未登记的次数
    skipped: usize,
}

impl<Id: Copy + PartialEq + std::fmt::Debug> NameIndex<Id> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
            skipped: 0,
        }
    }

    /// 登记一个文本，返回是否新增
    ///
    /// 空白文本不登记；已存在的文本不覆盖。
    pub fn register(&mut self, text: &str, id: Id) -> bool {
        if text.trim().is_empty() {
            self.skipped += 1;
            return false;
        }

        if let Some(&pos) = self.positions.get(text) {
            let existing = self.entries[pos].id;
            if existing != id {
                warn!(text, ?existing, ignored = ?id, "duplicate dictionary key, keeping first");
            }
            self.skipped += 1;
            return false;
        }

        self.positions.insert(text.to_string(), self.entries.len());
        self.entries.push(Entry {
            text: text.to_string(),
            needle: text.to_lowercase(),
            id,
        });
        true
    }

    /// 查找精确登记的文本
    pub fn get(&self, text: &str) -> Option<Id> {
        self.positions.get(text).map(|&pos| self.entries[pos].id)
    }

    /// 按登记顺序找到第一个出现在 `haystack` 中的条目
    ///
    /// `haystack` 应已小写。
    pub fn find_in(&self, haystack: &str) -> Option<&Entry<Id>> {
        self.entries
            .iter()
            .find(|entry| !entry.needle.is_empty() && haystack.contains(entry.needle.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry<Id>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 未登记的文本数（重复或空白）
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<Id: Copy + PartialEq + std::fmt::Debug> Default for NameIndex<Id> {
    fn default() -> Self {
        Self::new()
    }
}

/// 城市与地区两个字典组成的只读快照
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    cities: NameIndex<CityId>,
    regions: NameIndex<RegionId>,
}

impl Dictionary {
    /// 从参考数据存储加载
    pub fn load<S: ReferenceStore + ?Sized>(store: &S) -> Result<Self, StoreError> {
        let cities = store.list_cities()?;
        let regions = store.list_regions()?;
        Ok(Self::build(&cities, &regions))
    }

    /// 从已排序的记录构建
    ///
    /// 每个实体先登记名称，再按顺序登记同义词。
    pub fn build(cities: &[City], regions: &[Region]) -> Self {
        let mut city_index = NameIndex::new();
        for city in cities {
            for name in city.matchable_names() {
                city_index.register(name, city.id);
            }
        }

        let mut region_index = NameIndex::new();
        for region in regions {
            for name in region.matchable_names() {
                region_index.register(name, region.id);
            }
        }

        debug!(
            city_entries = city_index.len(),
            region_entries = region_index.len(),
            skipped = city_index.skipped() + region_index.skipped(),
            "dictionary built"
        );

        Self {
            cities: city_index,
            regions: region_index,
        }
    }

    pub fn cities(&self) -> &NameIndex<CityId> {
        &self.cities
    }

    pub fn regions(&self) -> &NameIndex<RegionId> {
        &self.regions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_register_and_get() {
        let mut index = NameIndex::new();
        assert!(index.register("Москва", 1));
        assert!(index.register("Moscow", 1));
        assert_eq!(index.get("Москва"), Some(1));
        assert_eq!(index.get("москва"), None);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_first_write_wins() {
        let mut index = NameIndex::new();
        assert!(index.register("Питер", 2));
        assert!(!index.register("Питер", 7));

        assert_eq!(index.get("Питер"), Some(2));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_skip_blank() {
        let mut index: NameIndex<u32> = NameIndex::new();
        assert!(!index.register("", 1));
        assert!(!index.register("   ", 1));
        assert!(index.is_empty());
        assert!(index.find_in("любой текст").is_none());
    }

    #[test]
    fn test_find_in_registration_order() {
        let mut index = NameIndex::new();
        index.register("Киров", 18);
        index.register("Кировск", 19);

        let hit = index.find_in("г кировск мурманской обл").unwrap();
        assert_eq!(hit.text, "Киров");
        assert_eq!(hit.id, 18);
    }

    #[test]
    fn test_find_in_case_insensitive() {
        let mut index = NameIndex::new();
        index.register("СОЧИ", 8);

        assert_eq!(index.find_in("отдых в сочи").map(|e| e.id), Some(8));
        assert!(index.find_in("отдых в ялте").is_none());
    }

    #[test]
    fn test_build_order() {
        let cities = vec![
            City::new(1, "Екатеринбург", 9).with_synonyms(["Екб", "Свердловск"]),
            City::new(2, "Казань", 8),
        ];
        let regions = vec![Region::new(8, "Татарстан").with_synonyms(["Татария"])];
        let dict = Dictionary::build(&cities, &regions);

        let texts: Vec<&str> = dict.cities().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["Екатеринбург", "Екб", "Свердловск", "Казань"]);

        let texts: Vec<&str> = dict.regions().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["Татарстан", "Татария"]);
    }

    #[test]
    fn test_build_collision_keeps_first_entity() {
        let cities = vec![
            City::new(1, "Александров", 1).with_synonyms(["Город"]),
            City::new(2, "Борисов", 1).with_synonyms(["Город"]),
        ];
        let dict = Dictionary::build(&cities, &[]);

        assert_eq!(dict.cities().get("Город"), Some(1));
        assert_eq!(dict.cities().len(), 3);
        assert_eq!(dict.cities().skipped(), 1);
    }

    #[test]
    fn test_build_counts_skipped() {
        let regions = vec![
            Region::new(4, "Адыгея").with_synonyms(["Адыгея", " "]),
            Region::new(8, "Татарстан").with_synonyms(["Татария"]),
        ];
        let dict = Dictionary::build(&[], &regions);

        assert_eq!(dict.regions().len(), 3);
        assert_eq!(dict.regions().skipped(), 2);
        assert_eq!(dict.cities().skipped(), 0);
    }

    #[test]
    fn test_load_from_store() {
        let store = MemoryStore::new(
            vec![City::new(2, "Ялта", 1), City::new(1, "Симферополь", 1)],
            vec![Region::new(1, "Крым").with_synonyms(["Республика Крым"])],
        )
        .unwrap();
        let dict = Dictionary::load(&store).unwrap();

        let texts: Vec<&str> = dict.cities().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["Симферополь", "Ялта"]);
        assert_eq!(dict.regions().len(), 2);
    }
}
