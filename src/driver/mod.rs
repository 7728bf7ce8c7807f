//! src/driver/mod.rs
//!
//! 逐行驱动整个分析流程，并把每一行的结果组装成最终报告。

mod policy;

#[cfg(test)]
mod test;

use std::fmt;
use tracing::{debug, info_span};
use crate::analyzer::{self, Declarations};
use crate::lexer;
use crate::reporter::LineError;
use crate::stages::StageTrace;
use crate::syntax;
pub use policy::{TraceAll, TraceLines, TraceNone, TracePolicy};

/// 单行的分析结果：要么是第一个被发现的错误，要么通过（可能附带阶段视图）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineReport {
    Failed(LineError),
    Passed { trace: Option<StageTrace> },
}

impl LineReport {
    pub fn error(&self) -> Option<&LineError> {
        match self {
            LineReport::Failed(error) => Some(error),
            LineReport::Passed { .. } => None,
        }
    }

    pub fn trace(&self) -> Option<&StageTrace> {
        match self {
            LineReport::Passed { trace } => trace.as_ref(),
            LineReport::Failed(_) => None,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, LineReport::Passed { .. })
    }
}

impl fmt::Display for LineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineReport::Failed(error) => write!(f, "{}", error),
            LineReport::Passed { trace: None } => write!(f, "No Error"),
            LineReport::Passed { trace: Some(trace) } => write!(f, "No Error\n{}", trace),
        }
    }
}

/// 报告中的一项。除了结果本身，还记住了该行的文本和它在源代码中的字节偏移，
/// 以便诊断渲染时能定位到原文。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEntry {
    /// 从 1 开始的行号
    pub number: usize,
    pub offset: usize,
    /// 去掉首尾空白后的行
    pub text: String,
    pub report: LineReport,
}

/// 一次完整编译的结果，每个输入行恰好对应一项。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileReport {
    entries: Vec<LineEntry>,
}

impl CompileReport {
    pub fn entries(&self) -> &[LineEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.entries.iter().filter(|entry| !entry.report.is_ok()).count()
    }
}

impl fmt::Display for CompileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, "\n\n")?;
            }
            write!(f, "Line {}: {}", entry.number, entry.report)?;
        }
        Ok(())
    }
}

/// 一次编译会话。声明集合只属于这一次会话，会话结束即被丢弃。
pub struct Session<'p> {
    declarations: Declarations,
    policy: &'p dyn TracePolicy,
}

impl<'p> Session<'p> {
    pub fn new(policy: &'p dyn TracePolicy) -> Self {
        Self {
            declarations: Declarations::new(),
            policy,
        }
    }

    pub fn declarations(&self) -> &Declarations {
        &self.declarations
    }

    /// 分析一行（已去掉首尾空白）。行必须按顺序提交，
    /// 因为后面行的语义检查依赖前面行的声明。
    pub fn analyze_line(&mut self, line_number: usize, line: &str) -> LineReport {
        if let Err(error) = self.run_checks(line) {
            debug!(line = line_number, code = error.code().code, %error, "line rejected");
            return LineReport::Failed(error);
        }

        let trace = self
            .policy
            .should_trace(line_number, line)
            .then(|| StageTrace::simulate(line));
        debug!(line = line_number, traced = trace.is_some(), "line accepted");

        LineReport::Passed { trace }
    }

    /// 词法 -> 语法 -> 语义，第一个失败的检查决定结果。
    fn run_checks(&mut self, line: &str) -> Result<(), LineError> {
        lexer::check(&lexer::lex(line))?;
        syntax::check(line)?;
        analyzer::check(line, &mut self.declarations)?;
        Ok(())
    }
}

/// 编译整段源代码。
///
/// 整段输入先去掉首尾空白，再按 `\n` 切分；每一行都会得到一项报告。
/// 每次调用都使用全新的会话，所以同样的输入总是得到同样的结果。
pub fn compile_with(source: &str, policy: &dyn TracePolicy) -> CompileReport {
    let trimmed = source.trim();
    let span = info_span!("compile", bytes = source.len());
    let _enter = span.enter();

    let mut session = Session::new(policy);
    let mut entries = Vec::new();
    let mut offset = source.len() - source.trim_start().len();

    for (index, raw) in trimmed.split('\n').enumerate() {
        let line = raw.trim();
        let leading = raw.len() - raw.trim_start().len();
        let number = index + 1;

        let report = session.analyze_line(number, line);
        entries.push(LineEntry {
            number,
            offset: offset + leading,
            text: line.to_string(),
            report,
        });

        offset += raw.len() + 1;
    }

    let report = CompileReport { entries };
    debug!(
        lines = report.len(),
        errors = report.error_count(),
        declared = session.declarations().len(),
        "compile finished"
    );
    report
}
