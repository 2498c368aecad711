//! 关联配置应用：对 url 逐 pattern 匹配并深合并命中值
use serde_json::{Map, Value};

use super::flatten::flatten_associations;
use crate::core::{assert_url_like, is_truthy, FlatAssociations};
use crate::error::UrlMetaResult;
use crate::matcher::match_pattern;
use crate::merge::deep_merge;

/// 对 url 应用关联配置
///
/// 按倒排映射的插入顺序逐 pattern 匹配，命中值依次深合并进累加器；
/// 靠后的命中在同一键路径上覆盖靠前的。无任何命中时返回空对象。
pub fn apply_associations(url: &str, associations: &Value) -> UrlMetaResult<Value> {
    assert_url_like(url, "url")?;
    let flat = flatten_associations(associations)?;
    apply_flat(url, &flat)
}

/// 对已倒排的映射应用（供 AssociationSet 复用，跳过重复倒排）
pub(crate) fn apply_flat(url: &str, flat: &FlatAssociations) -> UrlMetaResult<Value> {
    let mut merged = Value::Object(Map::new());
    for (pattern, value) in flat {
        let result = match_pattern(pattern, url)?;
        if result.matched {
            deep_merge(&mut merged, value);
        }
    }
    Ok(merged)
}

/// 仅需布尔判定时的便捷封装
///
/// 将 patterns 包进单一合成类别后应用，返回该类别合并值的真值。
pub fn matches(url: &str, patterns: &Value) -> UrlMetaResult<bool> {
    let mut associations = Map::new();
    associations.insert("matches".to_string(), patterns.clone());
    let merged = apply_associations(url, &Value::Object(associations))?;
    Ok(merged.get("matches").map(is_truthy).unwrap_or(false))
}
