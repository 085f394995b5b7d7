//! 高亮片段截断
//!
//! 把文本按高亮标记切成交替的“外/内”片段，每段按词截断，
//! 重新包上标记后再施加全局长度上限。

pub mod errors;
pub mod markers;
pub mod options;
pub mod truncate;

pub use errors::{Result, TrimError};
pub use markers::{Markers, SegmentKind};
pub use options::{TrimOptions, TrimRequest, DEFAULT_TAG};
pub use truncate::{truncate_keeping_end, truncate_keeping_start, words_until_length};

use crate::utils::{char_len, take_chars};
use std::borrow::Cow;
use tracing::{debug, warn};

/// 可复用的截断器（正则只编译一次）
#[derive(Debug, Clone)]
pub struct Trimmer {
    options: TrimOptions,
    markers: Cow<'static, Markers>,
}

impl Trimmer {
    pub fn new(options: TrimOptions) -> Result<Self> {
        let markers = if options.tag == DEFAULT_TAG {
            Cow::Borrowed(Markers::default_markers())
        } else {
            Cow::Owned(Markers::new(&options.tag)?)
        };

        Ok(Self { options, markers })
    }

    pub fn options(&self) -> &TrimOptions {
        &self.options
    }

    /// 截断高亮周围的文本
    ///
    /// 不会失败：任何输入都会得到确定的输出，标记不成对时也照常机械处理。
    pub fn trim(&self, text: &str) -> String {
        let max_around = self.options.max_length_around;
        let max_total = self.options.max_total_length;
        let omission = self.options.omission.as_str();

        if char_len(text) <= max_around {
            debug!(max_around, "text too small to trim");
            return text.to_string();
        }

        if !self.markers.contains_open(text) {
            debug!(marker = self.markers.open(), "no highlights, returning text unchanged");
            return text.to_string();
        }

        let segments = self.markers.split(text);
        let last = segments.len() - 1;

        let mut trimmed = String::with_capacity(text.len());
        for (i, segment) in segments.iter().enumerate() {
            if i == last {
                trimmed.push_str(&truncate_keeping_start(segment, max_around, omission));
                continue;
            }

            match SegmentKind::of(i) {
                SegmentKind::Outside => {
                    trimmed.push_str(&truncate_keeping_end(segment, max_around, omission));
                    trimmed.push_str(self.markers.open());
                }
                SegmentKind::Inside => {
                    trimmed.push_str(&truncate_keeping_start(segment, max_around, omission));
                    trimmed.push_str(self.markers.close());
                }
            }
        }

        if char_len(&trimmed) > max_total {
            debug!(max_total, "clamping trimmed text to total length");
            return format!("{}{}", take_chars(&trimmed, max_total).trim(), omission);
        }

        trimmed.trim().to_string()
    }
}

/// 一次性截断；标记无法构建时记录警告并原样返回
pub fn trim_text_around_tag(text: &str, options: &TrimOptions) -> String {
    match Trimmer::new(options.clone()) {
        Ok(trimmer) => trimmer.trim(text),
        Err(e) => {
            warn!("{}, returning text unchanged", e);
            text.to_string()
        }
    }
}
