//! src/syntax/mod.rs
//!
//! 语法检查阶段。它只看原始文本，不依赖分词结果：
//! 行尾分号、多个赋值号、相邻的运算符序列。


use chumsky::prelude::*;
use crate::lexer::Span;
use crate::reporter::SyntaxError;

/// 扫描时关心的两类标记。
#[derive(Debug, Clone, PartialEq)]
enum Mark {
    /// 一个 `=`
    Assign(SimpleSpan),
    /// 由两个或更多 `+ - * /` 组成的最长连续序列
    OperatorRun(SimpleSpan),
}

/// 构建字符级扫描器：逐字符前进，记录所有 `=` 以及所有长度 >= 2 的运算符序列。
/// 其他字符一律跳过，所以这个解析器对任何输入都会成功。
fn scanner<'src>() -> impl Parser<'src, &'src str, Vec<Mark>> {
    let assign = just('=').map_with(|_, e| Some(Mark::Assign(e.span())));

    // `repeated()` 是贪婪的，所以得到的是最长序列；单个运算符会在这里失败并回溯到 `other`
    let operator_run = one_of("+-*/")
        .repeated()
        .at_least(2)
        .map_with(|_, e| Some(Mark::OperatorRun(e.span())));

    let other = any().to(None::<Mark>);

    choice((assign, operator_run, other))
        .repeated()
        .collect::<Vec<Option<Mark>>>()
        .map(|marks| marks.into_iter().flatten().collect())
}

fn to_range(span: SimpleSpan) -> Span {
    span.start..span.end
}

/// 语法检查：依次检查三条规则，第一条命中的规则获胜。
pub fn check(line: &str) -> Result<(), SyntaxError> {
    let line = line.trim();

    if line.ends_with(';') {
        let end = line.len();
        return Err(SyntaxError::TrailingSemicolon { span: (end - 1)..end });
    }

    let marks = scanner().parse(line).into_output().unwrap_or_default();

    let mut assigns = marks.iter().filter_map(|mark| match mark {
        Mark::Assign(span) => Some(*span),
        _ => None,
    });
    if let (Some(_), Some(second)) = (assigns.next(), assigns.next()) {
        return Err(SyntaxError::MultipleAssignments { span: to_range(second) });
    }

    let first_run = marks.iter().find_map(|mark| match mark {
        Mark::OperatorRun(span) => Some(*span),
        _ => None,
    });
    if let Some(span) = first_run {
        let span = to_range(span);
        return Err(SyntaxError::InvalidOperatorSequence {
            sequence: line[span.clone()].to_string(),
            span,
        });
    }

    Ok(())
}
