// src/analyzer/symbols.rs

use std::collections::HashSet;

/// 声明集合：记录所有经由 `INTEGER` 语句声明过的变量名。
///
/// 这个语言只有一个全局作用域，所以不需要作用域栈，一个集合就够了。
/// 每次编译都应该使用一个新的实例（或者先调用 `reset`）。
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Declarations {
    names: HashSet<String>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    /// 声明一个变量。重复声明不是错误，返回值表示这个名字是否是第一次出现。
    pub fn declare(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// 清空所有声明，回到编译开始时的状态。
    pub fn reset(&mut self) {
        self.names.clear();
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
