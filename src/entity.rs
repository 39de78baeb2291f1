//! 城市与地区数据结构

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 城市 id
pub type CityId = u32;

/// 地区 id
pub type RegionId = u32;

/// 地区（联邦主体）记录
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    pub id: RegionId,
    /// 规范名称，如 "Адыгея"
    pub name: String,
    /// 同义词，按提供顺序
    pub synonyms: Vec<String>,
    /// 邮政编码，如 "385000"
    pub postal_code: Option<String>,
    /// 联邦区，如 "Южный"
    pub federal_district: Option<String>,
    /// 带类型的地区名，如 "Респ Адыгея"
    pub region_with_type: Option<String>,
}

impl Region {
    /// 创建新的地区记录（无同义词，无附加字段）
    pub fn new(id: RegionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            synonyms: Vec::new(),
            postal_code: None,
            federal_district: None,
            region_with_type: None,
        }
    }

    pub fn with_synonyms<I, T>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.synonyms = synonyms.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    pub fn with_federal_district(mut self, federal_district: impl Into<String>) -> Self {
        self.federal_district = Some(federal_district.into());
        self
    }

    pub fn with_type(mut self, region_with_type: impl Into<String>) -> Self {
        self.region_with_type = Some(region_with_type.into());
        self
    }

    /// 可匹配的文本：先规范名称，再按顺序给出同义词
    pub fn matchable_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.synonyms.iter().map(String::as_str))
    }
}

/// 城市记录，`region_id` 指向所属地区
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct City {
    pub id: CityId,
    /// 规范名称，如 "Севастополь"
    pub name: String,
    /// 同义词，按提供顺序
    pub synonyms: Vec<String>,
    /// 邮政编码，如 "299000"
    pub postal_code: Option<String>,
    /// 带类型的城市名，如 "г Севастополь"
    pub city_with_type: Option<String>,
    /// 所属地区
    pub region_id: RegionId,
}

impl City {
    /// 创建新的城市记录（无同义词，无附加字段）
    pub fn new(id: CityId, name: impl Into<String>, region_id: RegionId) -> Self {
        Self {
            id,
            name: name.into(),
            synonyms: Vec::new(),
            postal_code: None,
            city_with_type: None,
            region_id,
        }
    }

    pub fn with_synonyms<I, T>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.synonyms = synonyms.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    pub fn with_type(mut self, city_with_type: impl Into<String>) -> Self {
        self.city_with_type = Some(city_with_type.into());
        self
    }

    /// 可匹配的文本：先规范名称，再按顺序给出同义词
    pub fn matchable_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.synonyms.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_builder() {
        let city = City::new(3, "Севастополь", 3)
            .with_postal_code("299000")
            .with_type("г Севастополь");

        assert_eq!(city.postal_code.as_deref(), Some("299000"));
        assert_eq!(city.city_with_type.as_deref(), Some("г Севастополь"));
        assert!(city.synonyms.is_empty());
    }

    #[test]
    fn test_matchable_names_order() {
        let region = Region::new(4, "Адыгея").with_synonyms(["Республика Адыгея", "Адыге"]);
        let names: Vec<&str> = region.matchable_names().collect();
        assert_eq!(names, vec!["Адыгея", "Республика Адыгея", "Адыге"]);

        let city = City::new(1, "Москва", 1);
        assert_eq!(city.matchable_names().collect::<Vec<_>>(), vec!["Москва"]);
    }
}
