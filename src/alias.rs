//! 别名改写：命中 pattern 的捕获分组按位回填模板
use indexmap::IndexMap;

use crate::core::assert_url_like;
use crate::error::{UrlMetaError, UrlMetaResult};
use crate::matcher::match_pattern;

/// 按别名映射改写 url
///
/// 按映射顺序找首个完整命中的 pattern（首个命中即胜出，后续不再尝试）；
/// 无命中时原样返回。模板以字面量 "*" 为占位符，
/// 第 i 个 "*" 回填第 i 个捕获分组；占位符多于分组数即报错。
pub fn apply_aliases(url: &str, aliases: &IndexMap<String, String>) -> UrlMetaResult<String> {
    assert_url_like(url, "url")?;

    for (pattern, template) in aliases {
        let result = match_pattern(pattern, url)?;
        if !result.matched {
            continue;
        }

        let parts: Vec<&str> = template.split('*').collect();
        let placeholders = parts.len() - 1;
        if placeholders > result.match_groups.len() {
            return Err(UrlMetaError::TemplatePlaceholderOutOfRange {
                placeholders,
                groups: result.match_groups.len(),
            });
        }

        let mut rewritten = String::with_capacity(template.len());
        for (index, part) in parts.iter().enumerate() {
            rewritten.push_str(part);
            if index < placeholders {
                rewritten.push_str(&result.match_groups[index]);
            }
        }
        return Ok(rewritten);
    }
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aliases(entries: &[(&str, &str)]) -> IndexMap<String, String> {
        entries
            .iter()
            .map(|(pattern, template)| (pattern.to_string(), template.to_string()))
            .collect()
    }

    #[test]
    fn test_rewrite_roundtrip() {
        let aliases = aliases(&[("https://a/old/*", "https://a/new/*")]);
        let rewritten = apply_aliases("https://a/old/thing.js", &aliases).unwrap();
        assert_eq!(rewritten, "https://a/new/thing.js");

        // 改写后的 url 不再命中任何别名：再改写一次是恒等操作
        assert_eq!(apply_aliases(&rewritten, &aliases).unwrap(), rewritten);
    }

    #[test]
    fn test_no_match_returns_url_unchanged() {
        let aliases = aliases(&[("https://a/old/*", "https://a/new/*")]);
        let url = "https://a/other/thing.js";
        assert_eq!(apply_aliases(url, &aliases).unwrap(), url);
    }

    #[test]
    fn test_first_match_wins() {
        // 测试场景：两个 pattern 都命中，映射顺序靠前者胜出
        let aliases = aliases(&[
            ("https://a/**", "https://first/"),
            ("https://a/old/*", "https://second/*"),
        ]);
        assert_eq!(
            apply_aliases("https://a/old/x.js", &aliases).unwrap(),
            "https://first/"
        );
    }

    #[test]
    fn test_multiple_groups_fill_positionally() {
        let aliases = aliases(&[("https://a/*/old/*", "https://b/*-*")]);
        assert_eq!(
            apply_aliases("https://a/pkg/old/entry.js", &aliases).unwrap(),
            "https://b/pkg-entry.js"
        );
    }

    #[test]
    fn test_template_with_fewer_placeholders_than_groups() {
        // 占位符少于分组数是允许的：多余分组弃用
        let aliases = aliases(&[("https://a/*/old/*", "https://b/*")]);
        assert_eq!(
            apply_aliases("https://a/pkg/old/entry.js", &aliases).unwrap(),
            "https://b/pkg"
        );
    }

    #[test]
    fn test_placeholder_out_of_range() {
        let aliases = aliases(&[("https://a/old/*", "https://b/*/*")]);
        let err = apply_aliases("https://a/old/x.js", &aliases).unwrap_err();
        assert_eq!(
            err,
            UrlMetaError::TemplatePlaceholderOutOfRange {
                placeholders: 2,
                groups: 1
            }
        );
    }

    #[test]
    fn test_template_without_placeholder() {
        let aliases = aliases(&[("https://a/legacy/**", "https://a/modern/index.js")]);
        assert_eq!(
            apply_aliases("https://a/legacy/anything/x.js", &aliases).unwrap(),
            "https://a/modern/index.js"
        );
    }
}
