//! CLI 输入解析
//!
//! 把命令行参数、参数对象（JSON）和 stdin 合并成一个 `TrimRequest`。

use crate::trim::{TrimRequest, Trimmer};
use crate::utils::char_len;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// 命令行上显式给出的值，优先于参数对象
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub text: Option<String>,
    pub input: Option<PathBuf>,
    /// 参数对象来源：文件路径，或 `-` 表示 stdin
    pub params_json: Option<String>,
    pub max_length_around: Option<usize>,
    pub max_total_length: Option<usize>,
    pub tag: Option<String>,
    pub omission: Option<String>,
}

/// `--json` 输出
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrimOutput {
    pub text: String,
    pub truncated: bool,
}

impl CliOverrides {
    /// 文本来源优先级：位置参数 > --input > 参数对象 > stdin
    pub fn resolve<R: Read>(&self, mut stdin: R) -> Result<TrimRequest> {
        let mut request = match self.params_json.as_deref() {
            Some(source) => load_params(source, &mut stdin)?,
            None => TrimRequest::default(),
        };

        if let Some(text) = &self.text {
            request.text = text.clone();
        } else if let Some(path) = &self.input {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            request.text = strip_trailing_newline(content);
        } else if self.params_json.is_none() {
            let mut content = String::new();
            stdin
                .read_to_string(&mut content)
                .context("Failed to read text from stdin")?;
            request.text = strip_trailing_newline(content);
        }

        let options = &mut request.options;
        if let Some(max) = self.max_length_around {
            options.max_length_around = max;
        }
        if let Some(max) = self.max_total_length {
            options.max_total_length = max;
        }
        if let Some(tag) = &self.tag {
            options.tag = tag.clone();
        }
        if let Some(omission) = &self.omission {
            options.omission = omission.clone();
        }

        Ok(request)
    }
}

/// 执行截断，返回结果与是否发生了变化
pub fn run(request: &TrimRequest) -> Result<TrimOutput> {
    let trimmer = Trimmer::new(request.options.clone())?;
    let text = trimmer.trim(&request.text);
    let truncated = text != request.text;

    tracing::debug!(
        input_chars = char_len(&request.text),
        output_chars = char_len(&text),
        truncated,
        "trim finished"
    );

    Ok(TrimOutput { text, truncated })
}

fn load_params<R: Read>(source: &str, stdin: &mut R) -> Result<TrimRequest> {
    let content = if source == "-" {
        let mut content = String::new();
        stdin
            .read_to_string(&mut content)
            .context("Failed to read parameters from stdin")?;
        content
    } else {
        fs::read_to_string(source).with_context(|| format!("Failed to read {}", source))?
    };

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse parameters from {}", source))
}

fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
