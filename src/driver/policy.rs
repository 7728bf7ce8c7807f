use std::collections::BTreeSet;

/// 决定哪些通过检查的行需要展开完整的阶段视图。
pub trait TracePolicy {
    fn should_trace(&self, line_number: usize, line: &str) -> bool;
}

/// 按行号（从 1 开始）选择。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceLines(BTreeSet<usize>);

impl TraceLines {
    pub fn new(lines: impl IntoIterator<Item = usize>) -> Self {
        Self(lines.into_iter().collect())
    }

    /// 示例程序中有代表性的三个赋值行：第 5、7、8 行。
    pub fn representative() -> Self {
        Self::new([5, 7, 8])
    }

    pub fn lines(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

impl Default for TraceLines {
    fn default() -> Self {
        Self::representative()
    }
}

impl TracePolicy for TraceLines {
    fn should_trace(&self, line_number: usize, _line: &str) -> bool {
        self.0.contains(&line_number)
    }
}

/// 展开每一个通过检查的行。
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceAll;

impl TracePolicy for TraceAll {
    fn should_trace(&self, _line_number: usize, _line: &str) -> bool {
        true
    }
}

/// 从不展开。
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceNone;

impl TracePolicy for TraceNone {
    fn should_trace(&self, _line_number: usize, _line: &str) -> bool {
        false
    }
}

impl<F> TracePolicy for F
where
    F: Fn(usize, &str) -> bool,
{
    fn should_trace(&self, line_number: usize, line: &str) -> bool {
        self(line_number, line)
    }
}
