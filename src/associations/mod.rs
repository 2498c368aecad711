//! 关联配置（associations）处理：解析、倒排、应用
//!
//! associations 是 {category → {pattern → value}} 的两级映射，value 为任意
//! JSON 树。应用时对 url 逐 pattern 匹配并按映射顺序深合并命中值。

mod apply;
mod flatten;
mod resolve;

pub use apply::{apply_associations, matches};
pub use flatten::flatten_associations;
pub use resolve::resolve_associations;

use serde_json::Value;

use crate::core::{assert_url_like, FlatAssociations};
use crate::error::UrlMetaResult;
use crate::pruner;

/// 预先扁平化的关联集合：一次构建，多次匹配
///
/// 目录遍历按文件调用 [`apply`](AssociationSet::apply)、按目录调用
/// [`child_may_match`](AssociationSet::child_may_match) 时，避免每次调用
/// 重复倒排原始映射。构建后不可变，跨线程共享无需加锁。
#[derive(Debug, Clone, Default)]
pub struct AssociationSet {
    flat: FlatAssociations,
}

impl AssociationSet {
    /// 从原始两级映射构建（内部做一次倒排）
    pub fn new(associations: &Value) -> UrlMetaResult<Self> {
        Ok(Self {
            flat: flatten_associations(associations)?,
        })
    }

    /// 先将相对 pattern 键解析到 base_url 下，再构建
    pub fn resolved(associations: &Value, base_url: &str) -> UrlMetaResult<Self> {
        let resolved = resolve_associations(associations, base_url)?;
        Self::new(&resolved)
    }

    /// 对 url 应用所有命中 pattern 的关联值，深合并为单个结果
    pub fn apply(&self, url: &str) -> UrlMetaResult<Value> {
        assert_url_like(url, "url")?;
        apply::apply_flat(url, &self.flat)
    }

    /// 判断目录 url 之下是否可能存在满足 predicate 的匹配
    pub fn child_may_match<P>(&self, url: &str, predicate: P) -> UrlMetaResult<bool>
    where
        P: Fn(&Value) -> bool,
    {
        pruner::assert_directory_url(url)?;
        pruner::child_may_match_flat(url, &self.flat, &predicate)
    }

    /// 倒排后的 pattern 集合（保持插入顺序）
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.flat.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.flat.is_empty()
    }
}
