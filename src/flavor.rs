//! SQL Flavor（方言）：决定标识符引号、字面量写法与原生占位符风格。

use crate::dialect::Dialect;
use crate::scanner::StringEscapes;
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, MutexGuard};

/// 内置方言枚举；每个成员都实现了 [`Formatter`](crate::formatter::Formatter)。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flavor {
    #[default]
    MySQL,
    PostgreSQL,
    SQLite,
    SQLServer,
    CQL,
    ClickHouse,
    Presto,
    Oracle,
    Informix,
    Doris,
}

static DEFAULT_FLAVOR: AtomicU8 = AtomicU8::new(Flavor::MySQL as u8);
static DEFAULT_FLAVOR_LOCK: Mutex<()> = Mutex::new(());

impl Flavor {
    fn from_u8(v: u8) -> Self {
        match v {
            0 => Self::MySQL,
            1 => Self::PostgreSQL,
            2 => Self::SQLite,
            3 => Self::SQLServer,
            4 => Self::CQL,
            5 => Self::ClickHouse,
            6 => Self::Presto,
            7 => Self::Oracle,
            8 => Self::Informix,
            9 => Self::Doris,
            _ => Self::MySQL,
        }
    }

    fn to_u8(self) -> u8 {
        self as u8
    }

    /// 标识符引号字符。
    pub fn identifier_quote(self) -> char {
        match self {
            Self::MySQL | Self::ClickHouse | Self::Doris => '`',
            _ => '"',
        }
    }

    /// 单引号字符串内反斜杠的含义，与 [`crate::formatter::Formatter::format_literal`] 的转义一致。
    pub fn string_escapes(self) -> StringEscapes {
        match self {
            Self::MySQL | Self::ClickHouse | Self::Doris => StringEscapes::Backslash,
            Self::PostgreSQL => StringEscapes::EscapePrefixed,
            _ => StringEscapes::Standard,
        }
    }

    /// 驱动的原生占位符风格。
    pub fn native_dialect(self) -> Dialect {
        match self {
            Self::PostgreSQL => Dialect::DollarNumbered,
            Self::SQLServer => Dialect::AtPNumbered,
            Self::Oracle => Dialect::ColonNumbered,
            _ => Dialect::QuestionMark,
        }
    }
}

/// 获取当前全局默认 Flavor；新建的 fragment 会读取它。
pub fn default_flavor() -> Flavor {
    Flavor::from_u8(DEFAULT_FLAVOR.load(Ordering::Relaxed))
}

/// 设置全局默认 Flavor，返回旧值。
pub fn set_default_flavor(flavor: Flavor) -> Flavor {
    let old = DEFAULT_FLAVOR.swap(flavor.to_u8(), Ordering::Relaxed);
    Flavor::from_u8(old)
}

/// 修改全局默认 Flavor 的 RAII guard（会持有一个全局锁，避免并行测试互相干扰）。
pub struct DefaultFlavorGuard {
    _lock: MutexGuard<'static, ()>,
    old: Flavor,
}

impl Drop for DefaultFlavorGuard {
    fn drop(&mut self) {
        set_default_flavor(self.old);
    }
}

/// 在一个作用域内临时设置 DefaultFlavor，并保证退出作用域后自动恢复。
pub fn set_default_flavor_scoped(flavor: Flavor) -> DefaultFlavorGuard {
    let lock = DEFAULT_FLAVOR_LOCK
        .lock()
        .unwrap_or_else(|e| e.into_inner());
    let old = set_default_flavor(flavor);
    DefaultFlavorGuard { _lock: lock, old }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MySQL => "MySQL",
            Self::PostgreSQL => "PostgreSQL",
            Self::SQLite => "SQLite",
            Self::SQLServer => "SQLServer",
            Self::CQL => "CQL",
            Self::ClickHouse => "ClickHouse",
            Self::Presto => "Presto",
            Self::Oracle => "Oracle",
            Self::Informix => "Informix",
            Self::Doris => "Doris",
        };
        f.write_str(s)
    }
}
