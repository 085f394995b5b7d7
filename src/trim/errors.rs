// Trim Errors

use thiserror::Error;

/// 构建高亮标记失败
#[derive(Debug, Error)]
pub enum TrimError {
    #[error("invalid highlight tag {tag:?}: {source}")]
    InvalidTag {
        tag: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, TrimError>;
