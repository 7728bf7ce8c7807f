// In src/analyzer/mod.rs

mod symbols;

#[cfg(test)]
mod test;

use tracing::trace;
use crate::lexer::{self, Fragment, Keyword, Span};
use crate::reporter::SemanticError;
pub use symbols::Declarations;

/// 语义检查。根据行首关键字分成三种情况：
///
/// - `INTEGER a, b`：把每个名字加入声明集合，永远成功；
/// - `INPUT a, b`：每个名字都必须已经声明过；
/// - 其余语句：所有单字母标识符都必须已经声明过。
///
/// 多字母标识符在第三种情况下不做检查。
pub fn check(line: &str, declarations: &mut Declarations) -> Result<(), SemanticError> {
    if let Some(rest) = line.strip_prefix(Keyword::Integer.as_str()) {
        for (name, _) in comma_list(rest, Keyword::Integer.as_str().len()) {
            if !name.is_empty() && declarations.declare(name) {
                trace!(name, "declared");
            }
        }
        return Ok(());
    }

    if let Some(rest) = line.strip_prefix(Keyword::Input.as_str()) {
        for (name, span) in comma_list(rest, Keyword::Input.as_str().len()) {
            if !declarations.is_declared(name) {
                return Err(SemanticError::UndeclaredInInput { name: name.to_string(), span });
            }
        }
        return Ok(());
    }

    check_statement(line, declarations)
}

/// 一般语句（赋值、WRITE 等）。
/// 只在空白和运算符处切分，所以 `A,` 这样带逗号的片段不是单字母，不做检查。
fn check_statement(line: &str, declarations: &Declarations) -> Result<(), SemanticError> {
    for (fragment, span) in lexer::fragments(line) {
        if fragment != Fragment::Word {
            continue;
        }

        let name = &line[span.clone()];
        if is_single_letter(name) && !Keyword::is_keyword(name) && !declarations.is_declared(name) {
            return Err(SemanticError::Undeclared { name: name.to_string(), span });
        }
    }
    Ok(())
}

fn is_single_letter(s: &str) -> bool {
    let mut chars = s.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_alphabetic())
}

/// 把关键字之后的部分按逗号切开，返回去掉首尾空白的名字及其在整行中的位置。
/// `base` 是 `rest` 在整行中的起始偏移。空片段也会被返回。
fn comma_list(rest: &str, base: usize) -> impl Iterator<Item = (&str, Span)> {
    let mut offset = base;
    rest.split(',').map(move |piece| {
        let leading = piece.len() - piece.trim_start().len();
        let name = piece.trim();
        let start = offset + leading;
        offset += piece.len() + 1;
        (name, start..start + name.len())
    })
}
