//! urlmeta - gitignore 风格的 URL 模式匹配与 per-URL 关联配置解析引擎
//!
//! 纯同步、无 I/O、调用间无共享可变状态：每个入口都是参数的纯函数，
//! 可从任意线程并发调用。构建/开发服务器据此决定每个文件适用的编译选项、
//! 忽略标记与 specifier 别名。

// 模式匹配核心算法
pub mod matcher;
// 关联配置：解析 / 倒排 / 应用
pub mod associations;
// 目录级部分匹配剪枝
pub mod pruner;
// 别名改写
pub mod alias;
// 通用深合并
pub mod merge;
// 核心公共结构体与输入校验
pub mod core;
// 全局错误类型
pub mod error;

// 导出全局错误类型
pub use self::error::{UrlMetaError, UrlMetaResult};

// 导出核心结构体
pub use crate::core::{FlatAssociations, MatchResult};

// 导出模式匹配入口
pub use crate::matcher::match_pattern;

// 导出关联配置核心接口
pub use crate::associations::{
    apply_associations, flatten_associations, matches, resolve_associations, AssociationSet,
};

// 导出目录剪枝与别名改写
pub use crate::alias::apply_aliases;
pub use crate::merge::deep_merge;
pub use crate::pruner::url_child_may_match;
