pub mod reporter;
pub mod diagnostics;
pub mod lexer;
pub mod syntax;
pub mod analyzer;
pub mod stages;
pub mod driver;

pub use driver::{compile_with, CompileReport, LineReport, TraceAll, TraceLines, TraceNone, TracePolicy};

/// 分析一段源代码并返回格式化好的报告文本。
///
/// 使用默认的展开策略（第 5、7、8 行）。需要其他策略时使用 [`compile_with`]。
///
/// # Arguments
/// * `source` - 多行源代码。
///
/// # Returns
/// 每行一项 `Line <n>: <结果>`，项与项之间空一行。
pub fn compile(source: &str) -> String {
    compile_with(source, &TraceLines::default()).to_string()
}
