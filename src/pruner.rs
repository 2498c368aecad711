//! 目录级部分匹配剪枝
//!
//! 目录遍历器在列出目录内容之前调用 [`url_child_may_match`]：
//! 只要能断定该目录之下不可能出现满足 predicate 的匹配，整棵子树即可跳过，
//! 无需对子树里的每个文件逐一匹配。

use serde_json::{Map, Value};

use crate::associations::flatten_associations;
use crate::core::{assert_url_like, FlatAssociations};
use crate::error::{UrlMetaError, UrlMetaResult};
use crate::matcher::match_pattern;
use crate::merge::deep_merge;

/// 判断目录 url 之下是否可能存在满足 predicate 的匹配
///
/// url 必须以 "/" 结尾。两类命中分开处理：
/// 1. 完整命中目录本身的 pattern：全部深合并为一份 meta，predicate 判定一次，
///    其结果即为最终结果（完整命中优先于部分命中）
/// 2. 部分命中（目录 url 被吃尽而 pattern 还有剩余 token，说明更深的路径
///    仍可能补全匹配）：各 pattern 的原始值互不合并，任一候选满足 predicate
///    即返回 true
pub fn url_child_may_match<P>(url: &str, associations: &Value, predicate: P) -> UrlMetaResult<bool>
where
    P: Fn(&Value) -> bool,
{
    assert_directory_url(url)?;
    let flat = flatten_associations(associations)?;
    child_may_match_flat(url, &flat, &predicate)
}

/// 目录 url 形态校验：url-like 且以 "/" 结尾
pub(crate) fn assert_directory_url(url: &str) -> UrlMetaResult<()> {
    assert_url_like(url, "url")?;
    if !url.ends_with('/') {
        return Err(UrlMetaError::InvalidPatternOrUrl {
            what: "url",
            value: url.to_string(),
            reason: "目录 url 必须以 \"/\" 结尾",
        });
    }
    Ok(())
}

/// 对已倒排的映射剪枝（供 AssociationSet 复用，跳过重复倒排）
pub(crate) fn child_may_match_flat(
    url: &str,
    flat: &FlatAssociations,
    predicate: &dyn Fn(&Value) -> bool,
) -> UrlMetaResult<bool> {
    let mut full_match_meta: Option<Value> = None;
    let mut partial_candidates: Vec<&Value> = Vec::new();

    for (pattern, value) in flat {
        let result = match_pattern(pattern, url)?;
        if result.matched {
            let meta = full_match_meta.get_or_insert_with(|| Value::Object(Map::new()));
            deep_merge(meta, value);
        } else if result.url_index >= url.len() && result.pattern_index < pattern.len() {
            partial_candidates.push(value);
        }
    }

    if let Some(meta) = full_match_meta {
        return Ok(predicate(&meta));
    }
    Ok(partial_candidates.into_iter().any(predicate))
}
