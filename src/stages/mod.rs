//! 演示用的“编译阶段”模拟。
//!
//! 这里没有真正的代码生成或优化：每个阶段都只是对上一阶段文本的固定改写，
//! 用来给学习者展示一行代码在概念上如何经过编译器的各个阶段。


use std::fmt;
use crate::lexer::{self, Keyword};

/// 一行代码的七个阶段视图。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageTrace {
    /// Stage 1: 按一般语句规则切分的片段（逗号留在片段里）
    pub tokens: Vec<String>,
    /// Stage 4: 中间表示
    pub intermediate: String,
    /// Stage 5: “生成”的代码
    pub generated: String,
    /// Stage 6: “优化”后的代码
    pub optimized: String,
    /// Stage 7: 原始行中每个字符的 8 位二进制编码
    pub binary: String,
}

impl StageTrace {
    /// 对一行已经通过全部检查的代码生成阶段视图。这个过程不会失败。
    pub fn simulate(line: &str) -> Self {
        let tokens = lexer::fragment_texts(line);
        let intermediate = intermediate_form(line);
        let generated = generate(&intermediate);
        let optimized = optimize(&generated);
        let binary = encode_binary(line);

        Self { tokens, intermediate, generated, optimized, binary }
    }
}

/// 去掉第一个 `LET`、去掉所有空白，再把第一个 `=` 换成 ` := `。
pub fn intermediate_form(line: &str) -> String {
    let without_let = line.replacen(Keyword::Let.as_str(), "", 1);
    let compact: String = without_let.chars().filter(|c| !c.is_whitespace()).collect();
    compact.replacen('=', " := ", 1)
}

/// 每个字母都变成 `LOAD <字母>`，然后第一个 `:=` 变成 `STORE`。
pub fn generate(intermediate: &str) -> String {
    let mut loaded = String::with_capacity(intermediate.len() * 4);
    for c in intermediate.chars() {
        if c.is_ascii_alphabetic() {
            loaded.push_str("LOAD ");
        }
        loaded.push(c);
    }
    loaded.replacen(":=", "STORE", 1)
}

/// 只改写第一个 `LOAD` 和第一个 `STORE`。
pub fn optimize(generated: &str) -> String {
    generated.replacen("LOAD", "MOV", 1).replacen("STORE", "STOR", 1)
}

/// 每个字符一组：取它的第一个 UTF-16 码元，至少 8 位，用空格连接。
pub fn encode_binary(line: &str) -> String {
    line.chars()
        .map(|c| {
            let mut units = [0u16; 2];
            format!("{:08b}", c.encode_utf16(&mut units)[0])
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for StageTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  [Stage 1] Lexical Analysis: Tokens -> [{}]", self.tokens.join(", "))?;
        writeln!(f, "  [Stage 2] Syntax Analysis: PASSED")?;
        writeln!(f, "  [Stage 3] Semantic Analysis: PASSED")?;
        writeln!(f, "  [Stage 4] Intermediate Code Representation (ICR): {}", self.intermediate)?;
        writeln!(f, "  [Stage 5] Code Generation (CG): {}", self.generated)?;
        writeln!(f, "  [Stage 6] Code Optimization (CO): {}", self.optimized)?;
        write!(f, "  [Stage 7] Target Machine Code (TMC in Binary): {}", self.binary)
    }
}
