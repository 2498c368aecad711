//! 核心公共结构体与输入校验，业务层统一标准结构
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{UrlMetaError, UrlMetaResult};

/// scheme 校验正则（至少两位字母 + ":"，单字母不算 scheme，避免误判盘符）
static SCHEME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]{2,}:").unwrap());

/// Windows 盘符路径形态校验正则（如 "C:\foo" 或 "C:/foo"）
static WINDOWS_DRIVE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]:[/\\]").unwrap());

/// 扁平化后的关联映射：pattern → {category → value}
/// serde_json 开启 preserve_order 特性，Map 保持插入顺序——
/// 迭代顺序承载匹配语义（别名首个命中胜出、合并后者覆盖前者）
pub type FlatAssociations = serde_json::Map<String, Value>;

/// 单次模式匹配结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// 是否完整匹配
    pub matched: bool,
    /// 匹配推进到的 pattern 字节下标（matched == true 时等于 pattern.len()）
    pub pattern_index: usize,
    /// 匹配推进到的 url 字节下标（matched == true 时等于 url.len()）
    pub url_index: usize,
    /// 按 pattern 中通配符出现顺序排列的捕获分组
    /// 匹配失败时保留推进最远的那次尝试的部分捕获，供诊断与目录剪枝使用
    pub match_groups: Vec<String>,
}

/// 校验 pattern/url 形态：必须带 scheme，且不能长得像 Windows 路径
pub(crate) fn assert_url_like(value: &str, what: &'static str) -> UrlMetaResult<()> {
    if WINDOWS_DRIVE_RE.is_match(value) {
        return Err(UrlMetaError::InvalidPatternOrUrl {
            what,
            value: value.to_string(),
            reason: "形似 Windows 盘符路径",
        });
    }
    if !SCHEME_RE.is_match(value) {
        return Err(UrlMetaError::InvalidPatternOrUrl {
            what,
            value: value.to_string(),
            reason: "缺少 scheme 前缀",
        });
    }
    Ok(())
}

/// 判断字符串是否已带 scheme（resolver 用：带 scheme 的键原样保留）
pub(crate) fn has_scheme(value: &str) -> bool {
    SCHEME_RE.is_match(value)
}

/// JSON 值类型名（错误信息用）
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// JS 语义的真值判断（null/false/0/"" 为假，数组与对象恒为真）
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
