// src/main.rs

use clap::Parser;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use vcheck::diagnostics::{codes, DiagnosticBag};
use vcheck::{compile_with, TraceAll, TraceLines, TraceNone, TracePolicy};

/// 一个逐行检查教学用玩具语言（BEGIN/INTEGER/INPUT/LET/WRITE/END）的分析器
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// 需要分析的源文件路径。省略或为 `-` 时从标准输入读取
    input_file: Option<PathBuf>,

    /// 把报告写入文件，而不是标准输出
    #[arg(short, long)]
    output_file: Option<PathBuf>,

    /// 需要展开阶段视图的行号（从 1 开始），例如 `--trace 5,7,8`
    #[arg(long, value_delimiter = ',', conflicts_with_all = ["trace_all", "no_trace"])]
    trace: Vec<usize>,

    /// 展开每一个通过检查的行
    #[arg(long, conflicts_with = "no_trace")]
    trace_all: bool,

    /// 不展开任何行
    #[arg(long)]
    no_trace: bool,

    /// 在标准错误上为每个出错的行渲染带源码标注的诊断
    #[arg(short, long)]
    diagnostics: bool,

    /// 打印某个错误码的详细解释后退出，例如 `--explain E0103`
    #[arg(long, value_name = "CODE")]
    explain: Option<String>,

    /// 提高日志级别（可重复：-v 为 debug，-vv 为 trace）
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn trace_policy(&self) -> Box<dyn TracePolicy> {
        if self.trace_all {
            Box::new(TraceAll)
        } else if self.no_trace {
            Box::new(TraceNone)
        } else if !self.trace.is_empty() {
            Box::new(TraceLines::new(self.trace.iter().copied()))
        } else {
            Box::new(TraceLines::default())
        }
    }

    /// 用于诊断输出的文件名
    fn source_name(&self) -> String {
        match &self.input_file {
            Some(path) if path.as_os_str() != "-" => path.display().to_string(),
            _ => "<stdin>".to_string(),
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    // RUST_LOG 优先于 -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_source(input: Option<&PathBuf>) -> Result<String, Box<dyn std::error::Error>> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .map_err(|e| format!("Failed to read file '{}': {}", path.display(), e).into()),
        _ => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(|e| format!("Failed to read standard input: {}", e))?;
            Ok(source)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(code) = &cli.explain {
        let error_code = codes::lookup(code).ok_or_else(|| format!("Unknown error code '{}'", code))?;
        println!("{}: {}\n\n{}", error_code.code, error_code.message, error_code.explanation);
        return Ok(());
    }

    let source_code = read_source(cli.input_file.as_ref())?;
    debug!(bytes = source_code.len(), "loaded input source");

    let policy = cli.trace_policy();
    let report = compile_with(&source_code, &*policy);
    info!(lines = report.len(), errors = report.error_count(), "analysis finished");

    if cli.diagnostics {
        let bag = DiagnosticBag::from_report(&source_code, &report);
        let color = io::stderr().is_terminal();
        bag.write_to(&cli.source_name(), color, io::stderr().lock())?;
    }

    match &cli.output_file {
        Some(path) => {
            fs::write(path, format!("{}\n", report))?;
            println!("Report written to '{}'", path.display());
        }
        None => println!("{}", report),
    }

    Ok(())
}
