//! 全局错误类型定义
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlMetaError {
    // 输入校验错误（匹配开始前即抛出，内部绝不吞掉）
    #[error("无效的 {what}：{value}（{reason}）")]
    InvalidPatternOrUrl {
        what: &'static str,
        value: String,
        reason: &'static str,
    },

    // associations 形态错误
    #[error("associations 必须是纯对象，实际为：{found}")]
    InvalidAssociationShape { found: &'static str },

    // 别名模板占位符越界（模板中 "*" 数量多于 pattern 产生的捕获分组）
    #[error("别名模板占位符越界：模板含 {placeholders} 个 \"*\"，匹配仅产生 {groups} 个分组")]
    TemplatePlaceholderOutOfRange { placeholders: usize, groups: usize },
}

// 全局Result类型
pub type UrlMetaResult<T> = Result<T, UrlMetaError>;
