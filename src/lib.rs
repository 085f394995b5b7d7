// Highlight Trim - Library Root
//
// 截断高亮标记周围的文本，生成紧凑的搜索结果摘要

pub mod cli;
pub mod trim;
pub mod utils;

// 重新导出常用类型
pub use trim::{trim_text_around_tag, TrimError, TrimOptions, TrimRequest, Trimmer};
