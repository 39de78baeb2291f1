//! # RuGeo - 俄罗斯地址文本中的城市与地区识别
//!
//! 从任意包含地址的文本中找出城市或地区（联邦主体），并给出邮编、联邦区、
//! 带类型的地区名与城市名。
//!
//! ## 功能特性
//!
//! - 文本清洗：去除标点、标签、不换行空格，合并空白
//! - 支持城市与地区的同义词（如 "Питер" -> "Санкт-Петербург"）
//! - 城市优先：命中城市时地区取该城市所属地区
//! - 可替换的参考数据来源（[`ReferenceStore`]），内置小型数据集
//!
//! ## 快速开始
//!
//! ```rust
//! use rugeo::GeoResolver;
//!
//! let resolver = GeoResolver::default();
//!
//! // 城市
//! let result = resolver.resolve("проживаю в г Севастополь").unwrap();
//! assert!(result.found());
//! assert_eq!(result.postal_code(), Some("299000"));
//! assert_eq!(result.city_with_type(), Some("г Севастополь"));
//!
//! // 仅地区
//! let result = resolver.resolve("живу в Адыгее").unwrap();
//! assert_eq!(result.region_with_type(), Some("Респ Адыгея"));
//! assert_eq!(result.city_with_type(), None);
//!
//! // 未找到不是错误
//! let result = resolver.resolve("12345 !!!").unwrap();
//! assert!(!result.found());
//!
//! // 空字符串是错误
//! assert!(resolver.resolve("").is_err());
//! ```

mod compose;
mod dictionary;
mod entity;
mod error;
mod matcher;
mod normalize;
mod resolver;
mod store;

pub use compose::{compose, GeoProperties, Resolution};
pub use dictionary::{Dictionary, Entry, NameIndex};
pub use entity::{City, CityId, Region, RegionId};
pub use error::{ResolveError, StoreError};
pub use matcher::{find_match, MatchOutcome};
pub use normalize::normalize_text;
pub use resolver::GeoResolver;
pub use store::{MemoryStore, ReferenceStore};

/// 便捷函数：使用全局解析器（内置数据）解析文本
///
/// ```rust
/// let result = rugeo::resolve("Нижний Новгород, ул. Большая Покровская").unwrap();
/// assert_eq!(result.federal_district(), Some("Приволжский"));
/// ```
#[cfg(feature = "embedded-data")]
pub fn resolve(text: &str) -> Result<Resolution, ResolveError> {
    GeoResolver::global().resolve(text)
}
