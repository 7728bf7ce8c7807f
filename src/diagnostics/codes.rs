// src/diagnostics/codes.rs

/// Represents a specific error code with its associated information.
/// This struct serves as the single source of truth for all analyzer diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorCode {
    pub code: &'static str,
    pub message: &'static str,
    pub explanation: &'static str,
}

/*
E00xx: 词法分析 (Lexical Analysis) 错误。

E01xx: 语法分析 (Syntax) 错误。

E02xx: 语义分析 (Semantic Analysis) 错误。
*/
// --- E00xx: Lexical Analysis Errors ---

pub const E0001_INVALID_SYMBOL: ErrorCode = ErrorCode {
    code: "E0001",
    message: "Invalid symbol or operator combination",
    explanation: "The token is one of the symbols the language forbids outright (`%`, `$`, `&`, `<`, `>`, `;`) \
                  or one of the malformed operator pairs `*+`, `*/`, `+*`, `-/`, `**`."
};

pub const E0002_MISSPELLED_KEYWORD: ErrorCode = ErrorCode {
    code: "E0002",
    message: "Misspelled keyword",
    explanation: "The token is a known misspelling of a keyword, such as `WRITEE` for `WRITE`, `BEGN` for `BEGIN` \
                  or `ENDD` for `END`."
};

pub const E0003_NUMBER_NOT_ALLOWED: ErrorCode = ErrorCode {
    code: "E0003",
    message: "Numbers are not allowed",
    explanation: "The language has no numeric literals. Values enter a program only through `INPUT` \
                  and are combined through declared variables."
};

pub const E0004_UNRECOGNIZED_TOKEN: ErrorCode = ErrorCode {
    code: "E0004",
    message: "Unrecognized token",
    explanation: "The token is not a keyword, an identifier, an arithmetic operator (`+ - * /`) or the assignment \
                  marker `=`. Identifiers must contain at least one letter."
};

// --- E01xx: Syntax Errors ---

pub const E0101_TRAILING_SEMICOLON: ErrorCode = ErrorCode {
    code: "E0101",
    message: "Line ends with semicolon",
    explanation: "Statements are terminated by the end of the line. A trailing `;` is not part of the language."
};

pub const E0102_MULTIPLE_ASSIGNMENTS: ErrorCode = ErrorCode {
    code: "E0102",
    message: "Multiple '=' symbols",
    explanation: "A statement may contain at most one assignment. Chained assignments such as `A = B = C` \
                  are not supported."
};

pub const E0103_INVALID_OPERATOR_SEQUENCE: ErrorCode = ErrorCode {
    code: "E0103",
    message: "Invalid operator sequence",
    explanation: "Two or more arithmetic operators appear next to each other. Every operator must be \
                  surrounded by operands, as in `A + B * C`."
};

// --- E02xx: Semantic Analysis Errors ---

pub const E0201_UNDECLARED_IN_INPUT: ErrorCode = ErrorCode {
    code: "E0201",
    message: "Undeclared identifier in INPUT",
    explanation: "Every variable read by `INPUT` must first be declared with an `INTEGER` statement on an \
                  earlier line."
};

pub const E0202_UNDECLARED_IDENTIFIER: ErrorCode = ErrorCode {
    code: "E0202",
    message: "Undeclared identifier",
    explanation: "The variable is used in a statement but was never declared with `INTEGER` on an earlier line. \
                  Declarations are visible from the line after the `INTEGER` statement onwards."
};

/// 所有已知错误码，按编号排序。
pub const ALL: &[&ErrorCode] = &[
    &E0001_INVALID_SYMBOL,
    &E0002_MISSPELLED_KEYWORD,
    &E0003_NUMBER_NOT_ALLOWED,
    &E0004_UNRECOGNIZED_TOKEN,
    &E0101_TRAILING_SEMICOLON,
    &E0102_MULTIPLE_ASSIGNMENTS,
    &E0103_INVALID_OPERATOR_SEQUENCE,
    &E0201_UNDECLARED_IN_INPUT,
    &E0202_UNDECLARED_IDENTIFIER,
];

/// 按编号查找错误码，大小写不敏感（`e0101` 与 `E0101` 等价）。
pub fn lookup(code: &str) -> Option<&'static ErrorCode> {
    ALL.iter().copied().find(|c| c.code.eq_ignore_ascii_case(code))
}
