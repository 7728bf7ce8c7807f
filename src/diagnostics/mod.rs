pub mod codes;


use ariadne::{Color, Config, IndexType, Label as AriadneLabel, Report, ReportKind, Source};
use std::io;
use crate::driver::CompileReport;
use crate::lexer::Span;
use crate::reporter::LineError;
use codes::ErrorCode;

#[derive(Debug, Clone)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

// --- Diagnostic：一条可渲染的诊断信息 ---

#[derive(Debug, Clone)]
pub struct Diagnostic {
    code: &'static ErrorCode,
    // 带有动态信息（例如具体的 token）的消息
    message: String,
    labels: Vec<Label>,
    notes: Vec<String>,
}

impl Diagnostic {
    pub fn new(error_code: &'static ErrorCode, primary_label: Label) -> Self {
        Self {
            code: error_code,
            message: error_code.message.to_string(),
            labels: vec![primary_label],
            notes: Vec::new(),
        }
    }

    /// 把某一行的错误转换成诊断。`line_offset` 是该行在整个源代码中的字节偏移，
    /// 因为 LineError 里的 span 只相对于行首。
    pub fn from_line_error(line_number: usize, line_offset: usize, error: &LineError) -> Self {
        let span = error.span();
        let span = (line_offset + span.start)..(line_offset + span.end);

        Self::new(error.code(), Label::new(span, error.reason()))
            .with_dynamic_message(format!("line {}: {}", line_number, error))
            .with_note(error.code().explanation)
    }

    pub fn with_dynamic_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn code(&self) -> &str {
        self.code.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

// --- DiagnosticBag ---

#[derive(Debug, Default)]
pub struct DiagnosticBag {
    source: String,
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBag {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            diagnostics: Vec::new(),
        }
    }

    /// 收集一次编译中所有失败行的诊断。
    pub fn from_report(source: &str, report: &CompileReport) -> Self {
        let mut bag = Self::new(source);
        for entry in report.entries() {
            if let Some(error) = entry.report.error() {
                bag.report(Diagnostic::from_line_error(entry.number, entry.offset, error));
            }
        }
        bag
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    /// 把所有诊断渲染到 `out`。
    pub fn write_to<W: io::Write>(&self, file_name: &str, color: bool, mut out: W) -> io::Result<()> {
        for diag in &self.diagnostics {
            write_one(file_name, &self.source, diag, color, &mut out)?;
        }
        Ok(())
    }

    /// 渲染为不带颜色的字符串，主要用于测试和写入文件。
    pub fn render(&self, file_name: &str) -> io::Result<String> {
        let mut buf = Vec::new();
        self.write_to(file_name, false, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

// --- Printer 打印逻辑 ---

fn write_one<W: io::Write>(
    file_name: &str,
    source_code: &str,
    diag: &Diagnostic,
    color: bool,
    out: &mut W,
) -> io::Result<()> {
    let Some(primary_label_info) = diag.labels.first() else {
        return Ok(());
    };

    // Span 是字节偏移，而 ariadne 默认按字符计算
    let config = Config::default()
        .with_color(color)
        .with_index_type(IndexType::Byte);

    let mut report = Report::build(ReportKind::Error, (file_name, primary_label_info.span.clone()))
        .with_config(config)
        .with_message(&diag.message)
        .with_code(diag.code.code);

    for label_info in &diag.labels {
        report.add_label(
            AriadneLabel::new((file_name, label_info.span.clone()))
                .with_message(&label_info.message)
                .with_color(Color::Red),
        );
    }

    for note in &diag.notes {
        report = report.with_note(note);
    }

    report
        .finish()
        .write((file_name, Source::from(source_code)), out)
}
