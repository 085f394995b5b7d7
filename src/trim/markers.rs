//! 高亮标记
//!
//! 一对 `<tag>` / `</tag>`，以及按任一标记切分文本的正则。

use super::errors::{Result, TrimError};
use super::options::DEFAULT_TAG;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DEFAULT_MARKERS: Markers = Markers::new(DEFAULT_TAG).unwrap();
}

/// 片段在高亮内还是高亮外
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Outside,
    Inside,
}

impl SegmentKind {
    /// 标记开闭交替出现，偶数下标在外，奇数下标在内
    pub fn of(index: usize) -> Self {
        if index % 2 == 0 {
            SegmentKind::Outside
        } else {
            SegmentKind::Inside
        }
    }
}

#[derive(Debug, Clone)]
pub struct Markers {
    open: String,
    close: String,
    boundary: Regex,
}

impl Markers {
    pub fn new(tag: &str) -> Result<Self> {
        let boundary =
            Regex::new(&format!("</?{}>", regex::escape(tag))).map_err(|source| {
                TrimError::InvalidTag {
                    tag: tag.to_string(),
                    source,
                }
            })?;

        Ok(Self {
            open: format!("<{}>", tag),
            close: format!("</{}>", tag),
            boundary,
        })
    }

    /// 默认的 `<em>` / `</em>`
    pub fn default_markers() -> &'static Markers {
        &DEFAULT_MARKERS
    }

    pub fn open(&self) -> &str {
        &self.open
    }

    pub fn close(&self) -> &str {
        &self.close
    }

    pub fn contains_open(&self, text: &str) -> bool {
        text.contains(&self.open)
    }

    /// 按开/闭标记切分，标记本身被丢弃，首尾空片段保留
    pub fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.boundary.split(text).collect()
    }
}
