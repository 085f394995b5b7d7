//! 片段截断
//!
//! 两个方向的按词截断：保留结尾（高亮之前的上下文）与保留开头（高亮内容及其后的上下文）。
//! 被截断时在切口一侧插入省略标记。

use crate::utils::{char_len, take_chars, take_last_chars};
use tracing::trace;

/// 保留结尾，从开头截断；截断时在前面加省略标记
pub fn truncate_keeping_end(segment: &str, max_len: usize, omission: &str) -> String {
    let mut words: Vec<&str> = segment.split(' ').collect();
    words.reverse();

    let last_word = words.first().copied().unwrap_or_default();
    if char_len(last_word) > max_len {
        trace!(max_len, "cropping oversized trailing word");
        return format!("{}{}", omission, take_last_chars(last_word, max_len));
    }

    let mut kept = words_until_length(&words, max_len);
    let truncated = kept.len() < words.len();
    kept.reverse();

    let joined = kept.join(" ");
    if truncated {
        trace!(kept = kept.len(), total = words.len(), "segment truncated from start");
        format!("{}{}", omission, joined)
    } else {
        joined
    }
}

/// 保留开头，从结尾截断；截断时在后面加省略标记
pub fn truncate_keeping_start(segment: &str, max_len: usize, omission: &str) -> String {
    let words: Vec<&str> = segment.split(' ').collect();

    let first_word = words.first().copied().unwrap_or_default();
    if char_len(first_word) > max_len {
        trace!(max_len, "cropping oversized leading word");
        return format!("{}{}", take_chars(first_word, max_len), omission);
    }

    let kept = words_until_length(&words, max_len);
    let joined = kept.join(" ");
    if kept.len() < words.len() {
        trace!(kept = kept.len(), total = words.len(), "segment truncated from end");
        format!("{}{}", joined, omission)
    } else {
        joined
    }
}

/// 按顺序累积单词，直到下一个单词会超出 `max_len`
///
/// 每个单词计入 `长度 + 1`（分隔符），最后一个单词也不例外。
/// 第一个放不下的单词及其后所有单词都会被丢弃。
pub fn words_until_length<'a>(words: &[&'a str], max_len: usize) -> Vec<&'a str> {
    let mut output = Vec::new();
    let mut output_len = 0usize;

    for word in words {
        let word_len = char_len(word);
        if output_len + word_len + 1 > max_len {
            return output;
        }

        if output_len <= max_len {
            output.push(*word);
            output_len += word_len + 1;
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_until_length_counts_separator() {
        // "ab"(3) + "cd"(3) = 6，"ef" 会到 9
        let words = ["ab", "cd", "ef"];
        assert_eq!(words_until_length(&words, 8), vec!["ab", "cd"]);
        // 恰好等于上限时仍然放得下
        assert_eq!(words_until_length(&words, 6), vec!["ab", "cd"]);
        assert_eq!(words_until_length(&words, 5), vec!["ab"]);
    }

    #[test]
    fn test_words_until_length_stops_at_first_overflow() {
        // "long" 放不下后，后面的短词不会再被尝试
        let words = ["a", "long", "b"];
        assert_eq!(words_until_length(&words, 4), vec!["a"]);
    }

    #[test]
    fn test_words_until_length_empty_budget() {
        assert!(words_until_length(&["a"], 0).is_empty());
        // 空单词也占一个分隔符
        assert_eq!(words_until_length(&[""], 1), vec![""]);
    }

    #[test]
    fn test_keeping_end_fits() {
        assert_eq!(truncate_keeping_end("one two", 20, "..."), "one two");
    }

    #[test]
    fn test_keeping_end_truncates_start() {
        let out = truncate_keeping_end("one two three four", 11, "...");
        assert_eq!(out, "...three four");
    }

    #[test]
    fn test_keeping_end_crops_long_word() {
        let out = truncate_keeping_end("intro supercalifragilistic", 5, "~");
        assert_eq!(out, "~istic");
    }

    #[test]
    fn test_keeping_start_fits() {
        assert_eq!(truncate_keeping_start("one two", 20, "..."), "one two");
    }

    #[test]
    fn test_keeping_start_truncates_end() {
        let out = truncate_keeping_start("one two three four", 9, "...");
        assert_eq!(out, "one two...");
    }

    #[test]
    fn test_keeping_start_crops_long_word() {
        let out = truncate_keeping_start("highlighted words", 5, "...");
        assert_eq!(out, "highl...");
    }

    #[test]
    fn test_preserves_repeated_spaces() {
        assert_eq!(truncate_keeping_start("a  b", 10, "..."), "a  b");
        assert_eq!(truncate_keeping_end("a  b", 10, "..."), "a  b");
    }

    #[test]
    fn test_leading_space_segment() {
        // " after context" -> ["", "after", "context"]
        assert_eq!(truncate_keeping_start(" after context", 5, "..."), "...");
        assert_eq!(truncate_keeping_start(" after context", 7, "..."), " after...");
    }

    #[test]
    fn test_empty_segment() {
        assert_eq!(truncate_keeping_end("", 5, "..."), "");
        assert_eq!(truncate_keeping_start("", 5, "..."), "");
    }

    #[test]
    fn test_utf8_words() {
        let out = truncate_keeping_start("中文中文中文 x", 4, "…");
        assert_eq!(out, "中文中文…");
        let out = truncate_keeping_end("x 🙂🙂🙂🙂🙂", 2, "…");
        assert_eq!(out, "…🙂🙂");
    }
}
