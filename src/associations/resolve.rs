//! 关联配置 pattern 键解析：相对键 → base_url 下的绝对 URL
use serde_json::{Map, Value};
use url::Url;

use crate::core::{assert_url_like, has_scheme};
use crate::error::UrlMetaResult;

/// 将每个类别映射里的相对 pattern 键解析为绝对 URL
///
/// 1. 已带 scheme 的键原样保留（不做归一化改写）
/// 2. 其余键按标准 URL 解析规则拼到 base_url 下
/// 3. 解析失败的键原样保留，仅记 debug 日志
///
/// 非映射型类别值原样透传；此处不做任何匹配。
pub fn resolve_associations(associations: &Value, base_url: &str) -> UrlMetaResult<Value> {
    assert_url_like(base_url, "base_url")?;
    let base = Url::parse(base_url).ok();

    let Value::Object(categories) = associations else {
        return Ok(associations.clone());
    };

    let mut resolved = Map::new();
    for (category, value) in categories {
        match value {
            Value::Object(pattern_map) => {
                let mut resolved_map = Map::new();
                for (pattern, pattern_value) in pattern_map {
                    resolved_map.insert(resolve_key(pattern, base.as_ref()), pattern_value.clone());
                }
                resolved.insert(category.clone(), Value::Object(resolved_map));
            }
            other => {
                resolved.insert(category.clone(), other.clone());
            }
        }
    }
    Ok(Value::Object(resolved))
}

fn resolve_key(key: &str, base: Option<&Url>) -> String {
    if has_scheme(key) {
        return key.to_string();
    }
    let Some(base) = base else {
        return key.to_string();
    };
    match base.join(key) {
        Ok(joined) => joined.into(),
        Err(err) => {
            log::debug!("association key kept as-is: key={} error={}", key, err);
            key.to_string()
        }
    }
}
