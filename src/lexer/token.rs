use logos::Logos;
use std::fmt::{Display, Formatter, Result};

/// 词素定义
///
/// 一行代码按空白切分，并在 `= + - * / ; ,` 的两侧切开。
/// 唯一的例外是黑名单里的双字符组合（`**`、`*/`、`*+`、`+*`、`-/`）：
/// 它们作为一个整体保留下来，这样词法检查器才能认出它们。
/// logos 取最长匹配，所以 `***` 会被切成 `**` 和 `*`。
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
// 跳过空白
#[logos(skip r"\s+")]
pub enum Token {
    // 赋值符号
    #[token("=")]
    Assign,

    // 分隔符，只起分割作用，不参与分类
    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    // 非法的运算符组合
    #[token("**", |lex| lex.slice().to_string())]
    #[token("*/", |lex| lex.slice().to_string())]
    #[token("*+", |lex| lex.slice().to_string())]
    #[token("+*", |lex| lex.slice().to_string())]
    #[token("-/", |lex| lex.slice().to_string())]
    MalformedOperator(String),

    // 单个算术运算符
    #[regex(r"[+\-*/]", |lex| lex.slice().to_string())]
    Operator(String),

    // 其余所有连续的非空白字符：关键字、标识符、数字以及各种杂项符号
    #[regex(r"[^\s=+\-*/;,]+", |lex| lex.slice().to_string())]
    Word(String),
}

impl Token {
    /// Token 在源代码中的原始文本。
    pub fn as_str(&self) -> &str {
        match self {
            Token::Assign => "=",
            Token::Comma => ",",
            Token::Semicolon => ";",
            Token::MalformedOperator(s) | Token::Operator(s) | Token::Word(s) => s,
        }
    }

    /// 逗号以外的 token 都是“有意义”的。
    pub fn is_significant(&self) -> bool {
        !matches!(self, Token::Comma)
    }
}

/// 一般语句在语义检查和阶段展示中使用的切分方式：
/// 只按空白和 `= + - * /` 切开，逗号和分号留在相邻的片段里（`A,` 是一个片段）。
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"\s+")]
pub enum Fragment {
    #[regex(r"[=+\-*/]")]
    Operator,

    #[regex(r"[^\s=+\-*/]+")]
    Word,
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.as_str())
    }
}

/// 语言中的关键字。
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Keyword {
    Begin,
    Integer,
    Input,
    Let,
    Write,
    End,
}

impl Keyword {
    /// 尝试将一个字符串切片转换为一个关键字。关键字区分大小写。
    pub fn lookup(s: &str) -> Option<Keyword> {
        match s {
            "BEGIN" => Some(Keyword::Begin),
            "INTEGER" => Some(Keyword::Integer),
            "INPUT" => Some(Keyword::Input),
            "LET" => Some(Keyword::Let),
            "WRITE" => Some(Keyword::Write),
            "END" => Some(Keyword::End),
            _ => None,
        }
    }

    pub fn is_keyword(s: &str) -> bool {
        Self::lookup(s).is_some()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Begin => "BEGIN",
            Keyword::Integer => "INTEGER",
            Keyword::Input => "INPUT",
            Keyword::Let => "LET",
            Keyword::Write => "WRITE",
            Keyword::End => "END",
        }
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.as_str())
    }
}
