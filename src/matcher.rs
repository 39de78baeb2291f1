//! 在清洗后的文本中查找城市或地区

use crate::dictionary::Dictionary;
use crate::entity::{City, Region};
use crate::error::StoreError;
use crate::store::ReferenceStore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

/// 一次匹配的结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "OutcomeParts")
)]
pub enum MatchOutcome {
    /// 未找到
    #[default]
    NotFound,
    /// 只匹配到地区
    RegionMatch(Region),
    /// 匹配到城市及其所属地区
    CityMatch(City, Region),
}

impl MatchOutcome {
    pub fn is_found(&self) -> bool {
        !matches!(self, MatchOutcome::NotFound)
    }

    pub fn city(&self) -> Option<&City> {
        match self {
            MatchOutcome::CityMatch(city, _) => Some(city),
            _ => None,
        }
    }

    pub fn region(&self) -> Option<&Region> {
        match self {
            MatchOutcome::CityMatch(_, region) | MatchOutcome::RegionMatch(region) => Some(region),
            MatchOutcome::NotFound => None,
        }
    }
}

/// 反序列化的中间形式，校验城市与地区的归属关系
#[cfg(feature = "serde")]
#[derive(Deserialize)]
enum OutcomeParts {
    NotFound,
    RegionMatch(Region),
    CityMatch(City, Region),
}

#[cfg(feature = "serde")]
impl TryFrom<OutcomeParts> for MatchOutcome {
    type Error = String;

    fn try_from(parts: OutcomeParts) -> Result<Self, Self::Error> {
        match parts {
            OutcomeParts::NotFound => Ok(MatchOutcome::NotFound),
            OutcomeParts::RegionMatch(region) => Ok(MatchOutcome::RegionMatch(region)),
            OutcomeParts::CityMatch(city, region) if city.region_id == region.id => {
                Ok(MatchOutcome::CityMatch(city, region))
            }
            OutcomeParts::CityMatch(city, region) => Err(format!(
                "city {} belongs to region {}, not {}",
                city.id, city.region_id, region.id
            )),
        }
    }
}

/// 在文本中查找城市或地区
///
/// 先按字典顺序扫描城市，命中第一个即停止，并附带该城市所属地区；
/// 没有城市命中时再扫描地区。匹配不区分大小写，按子串包含判断。
///
/// 字典 id 在存储中找不到记录时返回 [`StoreError::DanglingReference`]。
pub fn find_match<S: ReferenceStore + ?Sized>(
    normalized: &str,
    dictionary: &Dictionary,
    store: &S,
) -> Result<MatchOutcome, StoreError> {
    let text = normalized.to_lowercase();

    if let Some(entry) = dictionary.cities().find_in(&text) {
        trace!(key = %entry.text, id = entry.id, "city matched");
        let city = store
            .city_by_id(entry.id)?
            .ok_or(StoreError::DanglingReference {
                kind: "city",
                id: entry.id,
            })?;
        let region = store
            .region_by_id(city.region_id)?
            .ok_or(StoreError::DanglingReference {
                kind: "region",
                id: city.region_id,
            })?;
        return Ok(MatchOutcome::CityMatch(city, region));
    }

    if let Some(entry) = dictionary.regions().find_in(&text) {
        trace!(key = %entry.text, id = entry.id, "region matched");
        let region = store
            .region_by_id(entry.id)?
            .ok_or(StoreError::DanglingReference {
                kind: "region",
                id: entry.id,
            })?;
        return Ok(MatchOutcome::RegionMatch(region));
    }

    trace!("no city or region matched");
    Ok(MatchOutcome::NotFound)
}
