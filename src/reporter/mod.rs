//! 这个模块是整个分析器错误处理系统的核心。
//! 每个检查阶段都有自己的错误枚举，`LineError` 把它们统一起来。
//! 错误的 `Display` 文本就是报告里出现的原因字符串，必须保持逐字一致。

use thiserror::Error;
use crate::diagnostics::codes::{self, ErrorCode};
use crate::lexer::Span;

/// 一行代码的分析结果中，最先被发现的那个错误。
/// 优先级固定：词法 > 语法 > 语义。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// 词法分析阶段的错误
    #[error("Lexical Error: {0}")]
    Lexical(#[from] LexicalError),

    /// 语法分析阶段的错误
    #[error("Syntax Error: {0}")]
    Syntax(#[from] SyntaxError),

    /// 语义分析阶段的错误
    #[error("Semantic Error: {0}")]
    Semantic(#[from] SemanticError),
}

impl LineError {
    /// 错误所在的位置（相对于行首的字节范围）。
    pub fn span(&self) -> Span {
        match self {
            LineError::Lexical(e) => e.span(),
            LineError::Syntax(e) => e.span(),
            LineError::Semantic(e) => e.span(),
        }
    }

    pub fn code(&self) -> &'static ErrorCode {
        match self {
            LineError::Lexical(e) => e.code(),
            LineError::Syntax(e) => e.code(),
            LineError::Semantic(e) => e.code(),
        }
    }

    /// 不带阶段前缀的原因文本，例如 `Numbers are not allowed: '5'`。
    pub fn reason(&self) -> String {
        match self {
            LineError::Lexical(e) => e.to_string(),
            LineError::Syntax(e) => e.to_string(),
            LineError::Semantic(e) => e.to_string(),
        }
    }
}

/// 词法检查器可能产生的所有错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexicalError {
    #[error("Invalid symbol or operator combination: '{token}'")]
    InvalidSymbol { token: String, span: Span },

    #[error("Misspelled keyword: '{token}'")]
    MisspelledKeyword { token: String, span: Span },

    #[error("Numbers are not allowed: '{token}'")]
    NumberNotAllowed { token: String, span: Span },

    #[error("Unrecognized token: '{token}'")]
    UnrecognizedToken { token: String, span: Span },
}

impl LexicalError {
    pub fn span(&self) -> Span {
        match self {
            LexicalError::InvalidSymbol { span, .. }
            | LexicalError::MisspelledKeyword { span, .. }
            | LexicalError::NumberNotAllowed { span, .. }
            | LexicalError::UnrecognizedToken { span, .. } => span.clone(),
        }
    }

    pub fn code(&self) -> &'static ErrorCode {
        match self {
            LexicalError::InvalidSymbol { .. } => &codes::E0001_INVALID_SYMBOL,
            LexicalError::MisspelledKeyword { .. } => &codes::E0002_MISSPELLED_KEYWORD,
            LexicalError::NumberNotAllowed { .. } => &codes::E0003_NUMBER_NOT_ALLOWED,
            LexicalError::UnrecognizedToken { .. } => &codes::E0004_UNRECOGNIZED_TOKEN,
        }
    }
}

/// 语法检查器可能产生的所有错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("Line ends with semicolon, which is not allowed.")]
    TrailingSemicolon { span: Span },

    #[error("Multiple '=' symbols found, invalid assignment.")]
    MultipleAssignments {
        /// 第二个 `=` 的位置
        span: Span,
    },

    #[error("Invalid operator sequence: '{sequence}'")]
    InvalidOperatorSequence { sequence: String, span: Span },
}

impl SyntaxError {
    pub fn span(&self) -> Span {
        match self {
            SyntaxError::TrailingSemicolon { span }
            | SyntaxError::MultipleAssignments { span }
            | SyntaxError::InvalidOperatorSequence { span, .. } => span.clone(),
        }
    }

    pub fn code(&self) -> &'static ErrorCode {
        match self {
            SyntaxError::TrailingSemicolon { .. } => &codes::E0101_TRAILING_SEMICOLON,
            SyntaxError::MultipleAssignments { .. } => &codes::E0102_MULTIPLE_ASSIGNMENTS,
            SyntaxError::InvalidOperatorSequence { .. } => &codes::E0103_INVALID_OPERATOR_SEQUENCE,
        }
    }
}

/// 语义检查器可能产生的所有错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticError {
    #[error("Undeclared identifier in INPUT: '{name}'")]
    UndeclaredInInput { name: String, span: Span },

    #[error("Undeclared identifier: '{name}'")]
    Undeclared { name: String, span: Span },
}

impl SemanticError {
    pub fn span(&self) -> Span {
        match self {
            SemanticError::UndeclaredInInput { span, .. }
            | SemanticError::Undeclared { span, .. } => span.clone(),
        }
    }

    pub fn code(&self) -> &'static ErrorCode {
        match self {
            SemanticError::UndeclaredInInput { .. } => &codes::E0201_UNDECLARED_IN_INPUT,
            SemanticError::Undeclared { .. } => &codes::E0202_UNDECLARED_IDENTIFIER,
        }
    }
}
