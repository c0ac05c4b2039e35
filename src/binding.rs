//! 绑定值：标量、列表，或可嵌套的 fragment。

use crate::error::{BindingStyle, RawError};
use crate::formatter::Formatter;
use crate::resolver::{RenderMode, Resolved};
use crate::scanner::Key;
use crate::value::{SqlDateTime, SqlValue};
use dyn_clone::DynClone;
use std::collections::HashMap;
use std::fmt;

/// 可以作为绑定值嵌入另一个 fragment 的 SQL 片段。
///
/// 嵌入后只会被只读地解析；解析使用外层传入的 `formatter` 与 `mode`，
/// 因此嵌套片段的引号与外层一致。
pub trait Fragment: DynClone + fmt::Debug + Send + Sync {
    fn resolve(&self, formatter: &dyn Formatter, mode: RenderMode) -> Result<Resolved, RawError>;
}

dyn_clone::clone_trait_object!(Fragment);

/// 单个绑定值。
#[derive(Clone)]
pub enum Binding {
    Value(SqlValue),
    /// 值占位符处展开为逗号分隔的序列；标识符占位符处展开为逗号分隔的标识符。
    List(Vec<Binding>),
    Fragment(Box<dyn Fragment>),
}

impl Binding {
    /// 绑定值的种类名，用于错误信息。
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Value(v) => v.kind(),
            Self::List(_) => "list",
            Self::Fragment(_) => "fragment",
        }
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Fragment(frag) => f.debug_tuple("Fragment").field(frag).finish(),
        }
    }
}

impl PartialEq for Binding {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            _ => false,
        }
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Binding {
                fn from(v: $ty) -> Self {
                    Self::Value(v.into())
                }
            }
        )*
    };
}

impl_from_scalar!(
    SqlValue,
    SqlDateTime,
    (),
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    f32,
    f64,
    String,
    &'static str,
    Vec<u8>,
    time::OffsetDateTime,
);

impl<T: Into<SqlValue>> From<Option<T>> for Binding {
    fn from(v: Option<T>) -> Self {
        Self::Value(SqlValue::from_option(v))
    }
}

impl From<Box<dyn Fragment>> for Binding {
    fn from(v: Box<dyn Fragment>) -> Self {
        Self::Fragment(v)
    }
}

/// 把任意 fragment 包装成绑定值。
pub fn fragment(f: impl Fragment + 'static) -> Binding {
    Binding::Fragment(Box::new(f))
}

/// 把一组值包装成列表绑定。
pub fn list(items: impl IntoIterator<Item = impl Into<Binding>>) -> Binding {
    Binding::List(items.into_iter().map(Into::into).collect())
}

/// 一个模板的全部绑定：位置序列或名称映射，二者互斥。
#[derive(Debug, Clone, PartialEq)]
pub enum Bindings {
    Positional(Vec<Binding>),
    Named(HashMap<String, Binding>),
}

impl Default for Bindings {
    fn default() -> Self {
        Self::Positional(Vec::new())
    }
}

impl Bindings {
    pub fn positional(items: impl IntoIterator<Item = impl Into<Binding>>) -> Self {
        Self::Positional(items.into_iter().map(Into::into).collect())
    }

    pub fn named(pairs: impl IntoIterator<Item = (impl Into<String>, impl Into<Binding>)>) -> Self {
        Self::Named(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn style(&self) -> BindingStyle {
        match self {
            Self::Positional(_) => BindingStyle::Positional,
            Self::Named(_) => BindingStyle::Named,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Positional(v) => v.len(),
            Self::Named(m) => m.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 按占位符键查找绑定。命名键每次出现都独立查找，不会被消耗。
    pub(crate) fn lookup(&self, key: &Key<'_>) -> Option<&Binding> {
        match (self, key) {
            (Self::Positional(v), Key::Index(i)) => v.get(*i),
            (Self::Named(m), Key::Name(n)) => m.get(*n),
            _ => None,
        }
    }
}

impl From<Vec<Binding>> for Bindings {
    fn from(v: Vec<Binding>) -> Self {
        Self::Positional(v)
    }
}

impl From<HashMap<String, Binding>> for Bindings {
    fn from(m: HashMap<String, Binding>) -> Self {
        Self::Named(m)
    }
}
