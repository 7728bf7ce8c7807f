// 导入logos分词库
use logos::Logos;
// 导入错误处理模组
use crate::reporter::LexicalError;

mod token;
pub use token::{Fragment, Keyword, Token};


/// 行内的字节范围。
pub type Span = std::ops::Range<usize>;

/// 明确禁止的符号，以及畸形的双字符运算符组合。
const INVALID_SYMBOLS: &[&str] = &["%", "$", "&", "<", ">", ";", "*+", "*/", "+*", "-/", "**"];

/// 常见的关键字拼写错误。这是一个固定列表，不做编辑距离计算。
const MISSPELLED_KEYWORDS: &[&str] = &["WRITEE", "BEGN", "ENDD"];

/// 单个算术运算符。
const OPERATORS: &[&str] = &["+", "-", "*", "/"];

/// 对一行代码进行分词，返回 token 及其在行内的位置。
/// 分词永远不会失败，空行得到一个空向量。
pub fn lex(line: &str) -> Vec<(Token, Span)> {
    let mut tokens = Vec::new();

    for (result, span) in Token::lexer(line).spanned() {
        match result {
            Ok(token) => tokens.push((token, span)),
            // Word 的正则覆盖了所有非空白字符，这里只是兜底：
            // 把 logos 无法归类的片段按原样当作 Word 交给检查器。
            Err(()) => {
                let slice = line[span.clone()].to_string();
                tokens.push((Token::Word(slice), span));
            }
        }
    }

    tokens
}

/// 按一般语句的规则切分：只在空白和 `= + - * /` 处切开。
/// 与 `lex` 不同，逗号不会被单独切出来。
pub fn fragments(line: &str) -> Vec<(Fragment, Span)> {
    Fragment::lexer(line)
        .spanned()
        .map(|(result, span)| (result.unwrap_or(Fragment::Word), span))
        .collect()
}

/// `fragments` 的文本形式。
pub fn fragment_texts(line: &str) -> Vec<String> {
    fragments(line)
        .into_iter()
        .map(|(_, span)| line[span].to_string())
        .collect()
}

/// 词法检查：按顺序检查每个 token，第一个违反规则的 token 决定整行的错误。
pub fn check(tokens: &[(Token, Span)]) -> Result<(), LexicalError> {
    for (token, span) in tokens {
        if !token.is_significant() {
            continue;
        }
        classify(token.as_str(), span)?;
    }
    Ok(())
}

/// 对单个 token 依次套用各条规则，第一条命中的规则获胜。
fn classify(text: &str, span: &Span) -> Result<(), LexicalError> {
    if INVALID_SYMBOLS.contains(&text) {
        return Err(LexicalError::InvalidSymbol { token: text.to_string(), span: span.clone() });
    }

    if MISSPELLED_KEYWORDS.contains(&text) {
        return Err(LexicalError::MisspelledKeyword { token: text.to_string(), span: span.clone() });
    }

    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LexicalError::NumberNotAllowed { token: text.to_string(), span: span.clone() });
    }

    let has_letter = text.chars().any(|c| c.is_ascii_alphabetic());
    if !Keyword::is_keyword(text) && !has_letter && !OPERATORS.contains(&text) && text != "=" {
        return Err(LexicalError::UnrecognizedToken { token: text.to_string(), span: span.clone() });
    }

    Ok(())
}
