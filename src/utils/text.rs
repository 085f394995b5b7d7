// Text Slicing Utilities
//
// 所有长度按 char 计算，切片不会落在多字节字符中间

/// 字符数（非字节数）
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// 保留前 `count` 个字符
pub fn take_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// 保留末尾 `count` 个字符
pub fn take_last_chars(text: &str, count: usize) -> &str {
    if count == 0 {
        return &text[text.len()..];
    }

    match text.char_indices().rev().nth(count - 1) {
        Some((idx, _)) => &text[idx..],
        None => text,
    }
}
