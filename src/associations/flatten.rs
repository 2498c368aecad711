//! 关联配置倒排：{category → {pattern → value}} → {pattern → {category → value}}
use serde_json::{Map, Value};

use crate::core::{json_type_name, FlatAssociations};
use crate::error::{UrlMetaError, UrlMetaResult};

/// 按 pattern 倒排关联配置
///
/// 同一 pattern 出现在多个类别下时，各类别作为兄弟键并存；
/// 类别本身即为键，倒排层面不需要递归合并。
/// 非映射型类别值不携带 per-pattern 规则，倒排时忽略。
pub fn flatten_associations(associations: &Value) -> UrlMetaResult<FlatAssociations> {
    let Value::Object(categories) = associations else {
        return Err(UrlMetaError::InvalidAssociationShape {
            found: json_type_name(associations),
        });
    };

    let mut flat = FlatAssociations::new();
    for (category, value) in categories {
        let Value::Object(pattern_map) = value else {
            continue;
        };
        for (pattern, pattern_value) in pattern_map {
            match flat.get_mut(pattern) {
                Some(Value::Object(existing)) => {
                    existing.insert(category.clone(), pattern_value.clone());
                }
                _ => {
                    let mut per_pattern = Map::new();
                    per_pattern.insert(category.clone(), pattern_value.clone());
                    flat.insert(pattern.clone(), Value::Object(per_pattern));
                }
            }
        }
    }
    Ok(flat)
}
