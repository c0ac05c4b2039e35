//! 编译错误：所有 `to_sql` / `interpolate` 调用都以 `RawError` 失败，不做部分编译。

use crate::flavor::Flavor;
use std::fmt;

/// 占位符引用的绑定键：位置（从 0 开始）或名称。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BindingKey {
    Positional(usize),
    Named(String),
}

impl fmt::Display for BindingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positional(i) => write!(f, "#{i}"),
            Self::Named(name) => write!(f, ":{name}"),
        }
    }
}

/// 绑定集合的风格。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingStyle {
    Positional,
    Named,
}

impl fmt::Display for BindingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Positional => "positional",
            Self::Named => "named",
        })
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum RawError {
    #[error("raw missing binding for placeholder {0}")]
    MissingBinding(BindingKey),
    #[error("raw placeholder `{marker}` cannot be used with {style} bindings")]
    MixedBindingStyle { marker: String, style: BindingStyle },
    #[error("raw identifier placeholder {key} expects a string, found {found}")]
    InvalidIdentifierValue { key: BindingKey, found: &'static str },
    #[error("raw {kind} values cannot be rendered as {flavor} literals")]
    UnsupportedValue { flavor: Flavor, kind: &'static str },
}
