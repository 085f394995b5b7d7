//! 截断参数
//!
//! 字段名与 JSON 参数对象一致（camelCase），所有字段可省略。

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_LENGTH_AROUND: usize = 200;
pub const DEFAULT_MAX_TOTAL_LENGTH: usize = 500;
pub const DEFAULT_TAG: &str = "em";

/// 截断配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrimOptions {
    /// 每段非高亮上下文（以及高亮内容本身）保留的最大长度
    pub max_length_around: usize,
    /// 最终输出的硬上限
    pub max_total_length: usize,
    /// 用于构造 `<tag>` / `</tag>` 的元素名
    pub tag: String,
    /// 截断处插入的省略标记
    pub omission: String,
}

impl Default for TrimOptions {
    fn default() -> Self {
        Self {
            max_length_around: DEFAULT_MAX_LENGTH_AROUND,
            max_total_length: DEFAULT_MAX_TOTAL_LENGTH,
            tag: DEFAULT_TAG.to_string(),
            omission: String::new(),
        }
    }
}

impl TrimOptions {
    pub fn with_max_length_around(mut self, max_length_around: usize) -> Self {
        self.max_length_around = max_length_around;
        self
    }

    pub fn with_max_total_length(mut self, max_total_length: usize) -> Self {
        self.max_total_length = max_total_length;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_omission(mut self, omission: impl Into<String>) -> Self {
        self.omission = omission.into();
        self
    }

    pub fn open_marker(&self) -> String {
        format!("<{}>", self.tag)
    }

    pub fn close_marker(&self) -> String {
        format!("</{}>", self.tag)
    }
}

/// 完整的参数对象：文本 + 配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrimRequest {
    pub text: String,
    #[serde(flatten)]
    pub options: TrimOptions,
}

impl TrimRequest {
    pub fn new(text: impl Into<String>, options: TrimOptions) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }

    /// 按当前配置截断文本
    pub fn trim(&self) -> String {
        super::trim_text_around_tag(&self.text, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = TrimOptions::default();
        assert_eq!(options.max_length_around, 200);
        assert_eq!(options.max_total_length, 500);
        assert_eq!(options.tag, "em");
        assert_eq!(options.omission, "");
    }

    #[test]
    fn test_markers_follow_tag() {
        let options = TrimOptions::default().with_tag("mark");
        assert_eq!(options.open_marker(), "<mark>");
        assert_eq!(options.close_marker(), "</mark>");
    }

    #[test]
    fn test_deserialize_partial_params() {
        let request: TrimRequest =
            serde_json::from_str(r#"{"text": "hi", "maxLengthAround": 5, "omission": "..."}"#)
                .unwrap();
        assert_eq!(request.text, "hi");
        assert_eq!(request.options.max_length_around, 5);
        assert_eq!(request.options.max_total_length, 500);
        assert_eq!(request.options.tag, "em");
        assert_eq!(request.options.omission, "...");
    }

    #[test]
    fn test_deserialize_empty_object() {
        let request: TrimRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, TrimRequest::default());
    }

    #[test]
    fn test_serialize_camel_case() {
        let json = serde_json::to_value(TrimOptions::default()).unwrap();
        assert_eq!(json["maxLengthAround"], 200);
        assert_eq!(json["maxTotalLength"], 500);
    }

    #[test]
    fn test_request_trim() {
        let request = TrimRequest::new("short text", TrimOptions::default());
        assert_eq!(request.trim(), "short text");
    }
}
