//! gitignore 风格的 URL 模式匹配核心算法
//!
//! 对 pattern 与 url 做从左到右的逐段消耗：
//! 1. `*`  匹配一个及以上字符，不跨 "/"
//! 2. `**` 匹配零个及以上字符，可跨任意层 "/"；紧跟的 "/" 与其融合
//! 3. pattern 以 "/" 结尾时命中目录本身，余下部分整体作为隐式捕获
//!
//! 回溯收敛在 [`skip_until_match`] 内：按跳跃偏移递增逐一重试，
//! 任一候选成功立即返回（最短吸收前缀胜出），递归深度只随通配符个数增长。

use crate::core::{assert_url_like, MatchResult};
use crate::error::UrlMetaResult;

/// 模式匹配入口
///
/// pattern 与 url 均须为带 scheme 的绝对 URL 形态字符串，否则返回
/// [`InvalidPatternOrUrl`](crate::UrlMetaError::InvalidPatternOrUrl)。
/// 匹配失败不是错误：结果携带推进最远那次尝试的下标与部分捕获。
pub fn match_pattern(pattern: &str, url: &str) -> UrlMetaResult<MatchResult> {
    assert_url_like(pattern, "pattern")?;
    assert_url_like(url, "url")?;

    let matching = apply_matching(pattern, url);
    Ok(MatchResult {
        matched: matching.matched,
        pattern_index: matching.pattern_index,
        url_index: matching.url_index,
        match_groups: matching.groups,
    })
}

/// 内部匹配中间态，下标相对于传入的 pattern/url 切片
#[derive(Debug)]
struct Matching {
    matched: bool,
    pattern_index: usize,
    url_index: usize,
    groups: Vec<String>,
}

/// 跳跃搜索结果
#[derive(Debug)]
struct SkipOutcome {
    matched: bool,
    /// 相对剩余 pattern 的推进下标
    pattern_index: usize,
    /// 相对剩余 url 的推进下标（已含被吸收的前缀）
    url_index: usize,
    /// 通配符吸收的前缀字节数
    absorbed: usize,
    /// 内层匹配产生的捕获分组
    groups: Vec<String>,
}

/// 逐字符消耗主循环（不做输入校验，由入口保证）
fn apply_matching(pattern: &str, url: &str) -> Matching {
    // p/u 为字节下标，始终落在字符边界上
    let mut p = 0usize;
    let mut u = 0usize;
    let mut groups: Vec<String> = Vec::new();

    loop {
        let remaining_pattern = &pattern[p..];
        let remaining_url = &url[u..];

        // pattern 与 url 同时耗尽：完整匹配
        if remaining_pattern.is_empty() && remaining_url.is_empty() {
            return Matching { matched: true, pattern_index: p, url_index: u, groups };
        }
        // pattern 耗尽而 url 未尽：url 比 pattern 长，判负
        if remaining_pattern.is_empty() {
            return Matching { matched: false, pattern_index: p, url_index: u, groups };
        }
        // url 耗尽而 pattern 未尽
        if remaining_url.is_empty() {
            // 尾部 "**" 做零宽匹配
            if remaining_pattern == "**" {
                groups.push(String::new());
                return Matching { matched: true, pattern_index: pattern.len(), url_index: u, groups };
            }
            // 尾部 "*" 要求本段至少存在，记录空捕获后判负
            if remaining_pattern == "*" {
                groups.push(String::new());
            }
            return Matching { matched: false, pattern_index: p, url_index: u, groups };
        }
        // pattern 仅剩 "/"：命中目录本身，余下 url 整体作为隐式捕获
        if remaining_pattern == "/" {
            if remaining_url.starts_with('/') {
                groups.push(remaining_url[1..].to_string());
                return Matching {
                    matched: true,
                    pattern_index: pattern.len(),
                    url_index: url.len(),
                    groups,
                };
            }
            return Matching { matched: false, pattern_index: p, url_index: u, groups };
        }
        // pattern 仅剩 "**"：无条件吞掉余下 url
        if remaining_pattern == "**" {
            groups.push(remaining_url.to_string());
            return Matching {
                matched: true,
                pattern_index: pattern.len(),
                url_index: url.len(),
                groups,
            };
        }
        // "**" 开头：跨段跳跃搜索
        if remaining_pattern.starts_with("**") {
            p += 2;
            let mut can_skip = true;
            if pattern[p..].starts_with('/') {
                p += 1;
                // 剩余 url 已无 "/" 时，与 "**" 融合的 "/" 不再消耗 url：
                // globstar 只能做零宽匹配，回到逐字符路径
                //（"**/x" 因此也能匹配无前导目录的 "x"）
                if !remaining_url.contains('/') {
                    can_skip = false;
                }
            }
            // "**" 或 "**/" 收尾：吞掉余下 url
            if p == pattern.len() {
                groups.push(remaining_url.to_string());
                return Matching { matched: true, pattern_index: p, url_index: url.len(), groups };
            }
            if !can_skip {
                groups.push(String::new());
                continue;
            }
            let outcome = skip_until_match(&pattern[p..], remaining_url, true);
            groups.push(url[u..u + outcome.absorbed].to_string());
            groups.extend(outcome.groups);
            return Matching {
                matched: outcome.matched,
                pattern_index: p + outcome.pattern_index,
                url_index: u + outcome.url_index,
                groups,
            };
        }
        // "*" 开头：限段跳跃搜索
        if remaining_pattern.starts_with('*') {
            p += 1;
            // 尾部 "*"：只允许吃到本段结束，跨段即判负
            if p == pattern.len() {
                return match remaining_url.find('/') {
                    Some(slash) => {
                        groups.push(remaining_url[..slash].to_string());
                        Matching { matched: false, pattern_index: p, url_index: u + slash, groups }
                    }
                    None => {
                        groups.push(remaining_url.to_string());
                        Matching { matched: true, pattern_index: p, url_index: url.len(), groups }
                    }
                };
            }
            // "*" 至少要吃掉一个字符：下一字符已对上意味着零宽匹配，判负
            if pattern[p..].chars().next() == remaining_url.chars().next() {
                groups.push(String::new());
                return Matching { matched: false, pattern_index: p, url_index: u, groups };
            }
            let outcome = skip_until_match(&pattern[p..], remaining_url, false);
            groups.push(url[u..u + outcome.absorbed].to_string());
            groups.extend(outcome.groups);
            return Matching {
                matched: outcome.matched,
                pattern_index: p + outcome.pattern_index,
                url_index: u + outcome.url_index,
                groups,
            };
        }
        // 字面量逐字符比对
        let pattern_char = remaining_pattern.chars().next().unwrap_or_default();
        let url_char = remaining_url.chars().next().unwrap_or_default();
        if pattern_char == url_char {
            p += pattern_char.len_utf8();
            u += url_char.len_utf8();
            continue;
        }
        return Matching { matched: false, pattern_index: p, url_index: u, groups };
    }
}

/// 跳跃搜索：依次尝试 url[0..]、url[1..]…（含空后缀），
/// 找到通配符可吸收的最短前缀使余下 pattern 与余下 url 匹配
///
/// 禁止跨段时，遇 "/" 即中止重试；但 url 最后一个 "/" 之后的起点
/// 始终保底尝试一次，段边界不会被整体跳过。
/// 全部失败时保留推进最远的那次尝试（目录剪枝依赖其下标）。
fn skip_until_match(pattern: &str, url: &str, can_cross_slash: bool) -> SkipOutcome {
    // 保底尝试起点：url 最后一个 "/" 之后；没有 "/" 则为 0
    let last_resort = url.rfind('/').map(|i| i + 1).unwrap_or(0);

    let mut offset = 0usize;
    let mut is_last_attempt = false;

    let first = apply_matching(pattern, url);
    if first.matched {
        return SkipOutcome {
            matched: true,
            pattern_index: first.pattern_index,
            url_index: first.url_index,
            absorbed: 0,
            groups: first.groups,
        };
    }
    let mut best_start = 0usize;
    let mut best = first;

    loop {
        if is_last_attempt || offset >= url.len() {
            break;
        }
        if !can_cross_slash && url[offset..].starts_with('/') {
            // 跨段被禁止：跳到最后一个 "/" 之后做保底尝试，然后收手
            if last_resort <= offset {
                break;
            }
            offset = last_resort;
            is_last_attempt = true;
        } else {
            offset += url[offset..].chars().next().map(char::len_utf8).unwrap_or(1);
        }

        let attempt = apply_matching(pattern, &url[offset..]);
        if attempt.matched {
            return SkipOutcome {
                matched: true,
                pattern_index: attempt.pattern_index,
                url_index: offset + attempt.url_index,
                absorbed: offset,
                groups: attempt.groups,
            };
        }
        // 推进最远者胜出，平手保留更早的尝试
        if offset + attempt.url_index > best_start + best.url_index {
            best_start = offset;
            best = attempt;
        }
    }

    SkipOutcome {
        matched: false,
        pattern_index: best.pattern_index,
        url_index: best_start + best.url_index,
        absorbed: best_start,
        groups: best.groups,
    }
}
