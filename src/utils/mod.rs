//! 工具模块
//!
//! 提供按字符计数的文本切片函数

pub mod text;

// 重导出
pub use text::*;
