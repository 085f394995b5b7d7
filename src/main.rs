use anyhow::Result;
use clap::Parser;
use colored::*;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

use highlight_trim::cli::{run, CliOverrides};

/// Highlight Trim CLI
///
/// 截断 `<em>` 等高亮标记周围的文本，保留高亮词与其附近的上下文
#[derive(Parser)]
#[command(name = "highlight-trim")]
#[command(author, version = env!("APP_VERSION"), about)]
#[command(
    long_about = "Trims the context around highlighted spans so search-result snippets stay compact.\n\
                  Text is taken from the TEXT argument, --input, the parameter object, or stdin."
)]
struct Cli {
    /// 要截断的文本（省略时从 --input、参数对象或 stdin 读取）
    text: Option<String>,

    /// 从文件读取文本
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// JSON 参数对象（文件路径，`-` 表示 stdin）
    #[arg(long, value_name = "FILE")]
    params_json: Option<String>,

    /// 高亮前后每段上下文的最大长度 [默认: 200]
    #[arg(short = 'a', long)]
    max_length_around: Option<usize>,

    /// 输出总长度上限 [默认: 500]
    #[arg(short = 't', long)]
    max_total_length: Option<usize>,

    /// 高亮元素名 [默认: em]
    #[arg(long)]
    tag: Option<String>,

    /// 截断处插入的省略标记 [默认: 空]
    #[arg(short, long, allow_hyphen_values = true)]
    omission: Option<String>,

    /// 以 JSON 输出结果
    #[arg(long)]
    json: bool,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            text: self.text.clone(),
            input: self.input.clone(),
            params_json: self.params_json.clone(),
            max_length_around: self.max_length_around,
            max_total_length: self.max_total_length,
            tag: self.tag.clone(),
            omission: self.omission.clone(),
        }
    }
}

fn init_logging(verbose: bool) {
    // RUST_LOG 优先，否则默认 warn（--verbose 时 debug）
    let default_level = if verbose { "debug" } else { "warn" };
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("{} {}", "⚠️  Failed to initialize logging:".yellow(), e);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let request = cli.overrides().resolve(io::stdin().lock())?;
    let output = run(&request)?;

    if cli.json {
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", output.text);
    }

    if cli.verbose && output.truncated {
        eprintln!(
            "{} {} → {} chars",
            "✂️  trimmed".cyan(),
            request.text.chars().count(),
            output.text.chars().count()
        );
    }

    Ok(())
}
