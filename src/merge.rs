//! 通用深合并：对象按键递归，其余类型整体替换
use serde_json::Value;

/// 将 `from` 深合并进 `into`
/// 1. 两侧均为对象：逐键递归合并
/// 2. 其余任意组合（数组、标量、对象对非对象）：新值整体替换旧值
pub fn deep_merge(into: &mut Value, from: &Value) {
    if let (Value::Object(dst), Value::Object(src)) = (&mut *into, from) {
        for (key, value) in src {
            match dst.get_mut(key) {
                Some(slot) => deep_merge(slot, value),
                None => {
                    dst.insert(key.clone(), value.clone());
                }
            }
        }
        return;
    }
    *into = from.clone();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_objects_merge_by_key() {
        let mut into = json!({ "compile": { "babel": true } });
        deep_merge(&mut into, &json!({ "compile": { "minify": true } }));
        assert_eq!(into, json!({ "compile": { "babel": true, "minify": true } }));
    }

    #[test]
    fn test_later_value_wins_same_key() {
        let mut into = json!({ "compile": { "babel": true } });
        deep_merge(&mut into, &json!({ "compile": { "babel": false } }));
        assert_eq!(into, json!({ "compile": { "babel": false } }));
    }

    #[test]
    fn test_arrays_replaced_wholesale() {
        // 测试场景：数组不做逐元素合并，整体替换
        let mut into = json!({ "plugins": ["a", "b"] });
        deep_merge(&mut into, &json!({ "plugins": ["c"] }));
        assert_eq!(into, json!({ "plugins": ["c"] }));
    }

    #[test]
    fn test_object_replaced_by_scalar() {
        let mut into = json!({ "compile": { "babel": true } });
        deep_merge(&mut into, &json!({ "compile": false }));
        assert_eq!(into, json!({ "compile": false }));

        let mut into = json!({ "compile": false });
        deep_merge(&mut into, &json!({ "compile": { "babel": true } }));
        assert_eq!(into, json!({ "compile": { "babel": true } }));
    }
}
