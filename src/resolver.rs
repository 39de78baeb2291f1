//! 地址解析器核心实现

use crate::compose::Resolution;
use crate::dictionary::Dictionary;
use crate::error::{ResolveError, StoreError};
use crate::matcher::find_match;
use crate::normalize::normalize_text;
use crate::store::{MemoryStore, ReferenceStore};
#[cfg(feature = "embedded-data")]
use once_cell::sync::Lazy;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::debug;

/// 全局解析器实例（内置数据）
#[cfg(feature = "embedded-data")]
static GLOBAL_RESOLVER: Lazy<GeoResolver> = Lazy::new(|| GeoResolver::new(MemoryStore::embedded()));

/// 地址解析器
///
/// 字典在第一次解析时从存储加载，之后在实例生命周期内复用，不会自动重建。
pub struct GeoResolver<S = MemoryStore> {
    store: S,
    dictionary: OnceCell<Arc<Dictionary>>,
}

impl<S: ReferenceStore> GeoResolver<S> {
    /// 创建新的解析器实例，字典延迟加载
    pub fn new(store: S) -> Self {
        Self {
            store,
            dictionary: OnceCell::new(),
        }
    }

    /// 使用已构建的只读字典快照，可在多个实例间共享
    pub fn with_dictionary(store: S, dictionary: Arc<Dictionary>) -> Self {
        Self {
            store,
            dictionary: OnceCell::with_value(dictionary),
        }
    }

    /// 重新从存储构建字典，返回新的实例
    pub fn refresh(self) -> Result<Self, StoreError> {
        let dictionary = Dictionary::load(&self.store)?;
        Ok(Self::with_dictionary(self.store, Arc::new(dictionary)))
    }

    /// 获取字典，首次调用时加载
    pub fn dictionary(&self) -> Result<&Arc<Dictionary>, StoreError> {
        self.dictionary.get_or_try_init(|| {
            debug!("loading dictionary from reference store");
            Dictionary::load(&self.store).map(Arc::new)
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 在文本中查找城市或地区
    ///
    /// # 参数
    /// * `text` - 任意包含地址的文本，不能为空
    ///
    /// # 返回
    /// 解析结果；未找到不是错误，`found()` 为 `false`
    ///
    /// # 示例
    /// ```rust
    /// use rugeo::{GeoResolver, MemoryStore};
    ///
    /// let resolver = GeoResolver::new(MemoryStore::embedded());
    /// let result = resolver.resolve("проживаю в г. Севастополь").unwrap();
    /// assert!(result.found());
    /// assert_eq!(result.postal_code(), Some("299000"));
    /// assert_eq!(result.federal_district(), Some("Южный"));
    /// ```
    pub fn resolve(&self, text: &str) -> Result<Resolution, ResolveError> {
        if text.is_empty() {
            return Err(ResolveError::InvalidArgument(
                "empty search text".to_string(),
            ));
        }

        let dictionary = self.dictionary()?;
        let normalized = normalize_text(text);
        let outcome = find_match(&normalized, dictionary, &self.store)?;

        debug!(
            text = %normalized,
            found = outcome.is_found(),
            city = outcome.city().map(|c| c.name.as_str()),
            region = outcome.region().map(|r| r.name.as_str()),
            "resolved"
        );

        Ok(Resolution::new(normalized, outcome))
    }

    /// 检查文本中是否能找到城市或地区
    pub fn is_found(&self, text: &str) -> Result<bool, ResolveError> {
        self.resolve(text).map(|r| r.found())
    }

    /// 批量解析
    pub fn resolve_batch(&self, texts: &[&str]) -> Vec<Result<Resolution, ResolveError>> {
        texts.iter().map(|t| self.resolve(t)).collect()
    }
}

#[cfg(feature = "embedded-data")]
impl GeoResolver<MemoryStore> {
    /// 获取全局解析器实例
    pub fn global() -> &'static GeoResolver<MemoryStore> {
        &GLOBAL_RESOLVER
    }
}

#[cfg(feature = "embedded-data")]
impl Default for GeoResolver<MemoryStore> {
    fn default() -> Self {
        Self::new(MemoryStore::embedded())
    }
}
