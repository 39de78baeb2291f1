//! 参考数据存储：城市与地区记录的来源

use crate::entity::{City, CityId, Region, RegionId};
use crate::error::StoreError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// 内嵌的城市数据（编译时包含）
#[cfg(feature = "embedded-data")]
const CITIES_DATA: &str = include_str!("../data/cities.csv");

/// 内嵌的地区数据（编译时包含）
#[cfg(feature = "embedded-data")]
const REGIONS_DATA: &str = include_str!("../data/regions.csv");

/// 同一字段内同义词的分隔符
const SYNONYM_SEPARATOR: char = ';';

/// 城市/地区参考数据来源
///
/// `list_*` 返回按名称升序排列的快照。
pub trait ReferenceStore {
    /// 所有城市，按名称升序
    fn list_cities(&self) -> Result<Vec<City>, StoreError>;

    /// 所有地区，按名称升序
    fn list_regions(&self) -> Result<Vec<Region>, StoreError>;

    /// 按 id 查找城市
    fn city_by_id(&self, id: CityId) -> Result<Option<City>, StoreError>;

    /// 按 id 查找地区
    fn region_by_id(&self, id: RegionId) -> Result<Option<Region>, StoreError>;
}

impl<S: ReferenceStore + ?Sized> ReferenceStore for &S {
    fn list_cities(&self) -> Result<Vec<City>, StoreError> {
        (**self).list_cities()
    }

    fn list_regions(&self) -> Result<Vec<Region>, StoreError> {
        (**self).list_regions()
    }

    fn city_by_id(&self, id: CityId) -> Result<Option<City>, StoreError> {
        (**self).city_by_id(id)
    }

    fn region_by_id(&self, id: RegionId) -> Result<Option<Region>, StoreError> {
        (**self).region_by_id(id)
    }
}

/// 内存中的参考数据
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// 按名称升序
    cities: Vec<City>,
    /// 按名称升序
    regions: Vec<Region>,
    city_positions: HashMap<CityId, usize>,
    region_positions: HashMap<RegionId, usize>,
}

impl MemoryStore {
    /// 从记录构建，校验 id 唯一且每个城市的地区存在
    pub fn new(mut cities: Vec<City>, mut regions: Vec<Region>) -> Result<Self, StoreError> {
        cities.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        regions.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        let mut region_positions = HashMap::with_capacity(regions.len());
        for (pos, region) in regions.iter().enumerate() {
            if region_positions.insert(region.id, pos).is_some() {
                return Err(StoreError::DataLoad(format!(
                    "duplicate region id {}",
                    region.id
                )));
            }
        }

        let mut city_positions = HashMap::with_capacity(cities.len());
        for (pos, city) in cities.iter().enumerate() {
            if !region_positions.contains_key(&city.region_id) {
                return Err(StoreError::DanglingReference {
                    kind: "region",
                    id: city.region_id,
                });
            }
            if city_positions.insert(city.id, pos).is_some() {
                return Err(StoreError::DataLoad(format!("duplicate city id {}", city.id)));
            }
        }

        debug!(
            cities = cities.len(),
            regions = regions.len(),
            "reference store loaded"
        );

        Ok(Self {
            cities,
            regions,
            city_positions,
            region_positions,
        })
    }

    /// 从 CSV 文本构建
    ///
    /// 城市：`id,name,synonyms,postal_code,city_with_type,region_id`；
    /// 地区：`id,name,synonyms,postal_code,federal_district,region_with_type`。
    /// 首行为表头，同义词以 `;` 分隔。
    pub fn from_csv(cities_csv: &str, regions_csv: &str) -> Result<Self, StoreError> {
        let regions = parse_regions(regions_csv)?;
        let cities = parse_cities(cities_csv)?;
        Self::new(cities, regions)
    }

    /// 从目录中的 `cities.csv` 与 `regions.csv` 构建
    pub fn from_csv_dir(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref();
        let read = |name: &str| {
            let path = dir.join(name);
            fs::read_to_string(&path).map_err(|err| {
                StoreError::DataLoad(format!("{}: {}", path.display(), err))
            })
        };
        Self::from_csv(&read("cities.csv")?, &read("regions.csv")?)
    }

    /// 内置数据集
    #[cfg(feature = "embedded-data")]
    pub fn embedded() -> Self {
        Self::from_csv(CITIES_DATA, REGIONS_DATA).expect("embedded reference data is well-formed")
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }
}

impl ReferenceStore for MemoryStore {
    fn list_cities(&self) -> Result<Vec<City>, StoreError> {
        Ok(self.cities.clone())
    }

    fn list_regions(&self) -> Result<Vec<Region>, StoreError> {
        Ok(self.regions.clone())
    }

    fn city_by_id(&self, id: CityId) -> Result<Option<City>, StoreError> {
        Ok(self.city_positions.get(&id).map(|&pos| self.cities[pos].clone()))
    }

    fn region_by_id(&self, id: RegionId) -> Result<Option<Region>, StoreError> {
        Ok(self
            .region_positions
            .get(&id)
            .map(|&pos| self.regions[pos].clone()))
    }
}

/// 数据行（跳过表头与空行），附带 1 起始的行号
fn rows(
    data: &str,
    fields: usize,
) -> impl Iterator<Item = Result<(usize, Vec<&str>), StoreError>> + '_ {
    data.lines()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(move |(idx, line)| {
            let parts: Vec<&str> = line.split(',').map(str::trim).collect();
            if parts.len() != fields {
                return Err(StoreError::DataLoad(format!(
                    "line {}: expected {} fields, got {}",
                    idx + 1,
                    fields,
                    parts.len()
                )));
            }
            Ok((idx + 1, parts))
        })
}

fn parse_id(line: usize, field: &str) -> Result<u32, StoreError> {
    field
        .parse()
        .map_err(|_| StoreError::DataLoad(format!("line {}: invalid id {:?}", line, field)))
}

fn parse_name(line: usize, field: &str) -> Result<String, StoreError> {
    if field.is_empty() {
        return Err(StoreError::DataLoad(format!("line {}: empty name", line)));
    }
    Ok(field.to_string())
}

fn optional(field: &str) -> Option<String> {
    if field.is_empty() {
        None
    } else {
        Some(field.to_string())
    }
}

fn synonyms(field: &str) -> Vec<String> {
    field
        .split(SYNONYM_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_regions(data: &str) -> Result<Vec<Region>, StoreError> {
    rows(data, 6)
        .map(|row| -> Result<Region, StoreError> {
            let (line, parts) = row?;
            Ok(Region {
                id: parse_id(line, parts[0])?,
                name: parse_name(line, parts[1])?,
                synonyms: synonyms(parts[2]),
                postal_code: optional(parts[3]),
                federal_district: optional(parts[4]),
                region_with_type: optional(parts[5]),
            })
        })
        .collect()
}

fn parse_cities(data: &str) -> Result<Vec<City>, StoreError> {
    rows(data, 6)
        .map(|row| -> Result<City, StoreError> {
            let (line, parts) = row?;
            Ok(City {
                id: parse_id(line, parts[0])?,
                name: parse_name(line, parts[1])?,
                synonyms: synonyms(parts[2]),
                postal_code: optional(parts[3]),
                city_with_type: optional(parts[4]),
                region_id: parse_id(line, parts[5])?,
            })
        })
        .collect()
}
