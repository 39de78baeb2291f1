//! 由匹配结果推导展示字段

use crate::entity::{City, Region};
use crate::matcher::MatchOutcome;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 推导字段
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoProperties {
    /// 邮政编码，如 "299700"
    pub postal_code: Option<String>,
    /// 联邦区，如 "Северо-Кавказский"
    pub federal_district: Option<String>,
    /// 带类型的地区名，如 "Респ Адыгея"
    pub region_with_type: Option<String>,
    /// 带类型的城市名，如 "г Севастополь"
    pub city_with_type: Option<String>,
}

/// 推导字段
///
/// | 结果 | postal_code | federal_district | region_with_type | city_with_type |
/// |---|---|---|---|---|
/// | 未找到 | - | - | - | - |
/// | 城市 + 地区 | 城市 | 地区 | 地区 | 城市 |
/// | 仅地区 | 地区 | 地区 | 地区 | - |
pub fn compose(outcome: &MatchOutcome) -> GeoProperties {
    match outcome {
        MatchOutcome::NotFound => GeoProperties::default(),
        MatchOutcome::CityMatch(city, region) => GeoProperties {
            postal_code: city.postal_code.clone(),
            federal_district: region.federal_district.clone(),
            region_with_type: region.region_with_type.clone(),
            city_with_type: city.city_with_type.clone(),
        },
        MatchOutcome::RegionMatch(region) => GeoProperties {
            postal_code: region.postal_code.clone(),
            federal_district: region.federal_district.clone(),
            region_with_type: region.region_with_type.clone(),
            city_with_type: None,
        },
    }
}

/// 一次解析的结果，生成后不可变
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "ResolutionParts")
)]
pub struct Resolution {
    normalized: String,
    outcome: MatchOutcome,
    properties: GeoProperties,
}

impl Resolution {
    /// 由清洗后的搜索文本和匹配结果构建
    pub fn new(normalized: impl Into<String>, outcome: MatchOutcome) -> Self {
        let properties = compose(&outcome);
        Self {
            normalized: normalized.into(),
            outcome,
            properties,
        }
    }

    /// 是否找到城市或地区
    pub fn found(&self) -> bool {
        self.outcome.is_found()
    }

    pub fn city(&self) -> Option<&City> {
        self.outcome.city()
    }

    pub fn region(&self) -> Option<&Region> {
        self.outcome.region()
    }

    pub fn postal_code(&self) -> Option<&str> {
        self.properties.postal_code.as_deref()
    }

    pub fn federal_district(&self) -> Option<&str> {
        self.properties.federal_district.as_deref()
    }

    pub fn region_with_type(&self) -> Option<&str> {
        self.properties.region_with_type.as_deref()
    }

    pub fn city_with_type(&self) -> Option<&str> {
        self.properties.city_with_type.as_deref()
    }

    /// 实际参与匹配的清洗后文本
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn outcome(&self) -> &MatchOutcome {
        &self.outcome
    }

    pub fn properties(&self) -> &GeoProperties {
        &self.properties
    }

    pub fn into_outcome(self) -> MatchOutcome {
        self.outcome
    }
}

/// 反序列化时只读取清洗文本和匹配结果，推导字段重新计算
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct ResolutionParts {
    normalized: String,
    outcome: MatchOutcome,
}

#[cfg(feature = "serde")]
impl From<ResolutionParts> for Resolution {
    fn from(parts: ResolutionParts) -> Self {
        Resolution::new(parts.normalized, parts.outcome)
    }
}
