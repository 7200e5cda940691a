//! `normalize`：把候选 label 与用户 query 规整为同一种比较 key。
//!
//! 步骤（顺序固定）：
//! - 去掉首尾空白
//! - 转小写
//! - NFD 分解后丢弃组合附加符（U+0300..=U+036F）
//!
//! label（attach 时一次）与 query（每次按键）走同一个函数，保证匹配对称。

use unicode_normalization::UnicodeNormalization;

/// 组合附加符区间（Combining Diacritical Marks）。
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// 生成比较 key。纯函数，对任意输入都有定义。
pub fn normalize(s: &str) -> String {
    let key: String = s
        .trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .collect();
    // 附加符紧挨空白时（" \u{301} a"），剥掉之后会重新露出首尾空白。
    let trimmed = key.trim();
    if trimmed.len() == key.len() {
        key
    } else {
        trimmed.to_owned()
    }
}

/// 宿主可能给不出文本（例如控件没有 value）：按空串处理。
pub fn normalize_opt(s: Option<&str>) -> String {
    normalize(s.unwrap_or(""))
}
