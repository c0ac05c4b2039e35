//! halo-raw-sql：原生 SQL 模板编译器。
//!
//! 把含占位符的 SQL 片段与绑定编译为完全内联的 SQL 字符串（[`Raw::interpolate`]），
//! 或参数化的 [`CompiledQuery`]（[`Raw::to_sql`]），再按驱动风格转换为 [`NativeQuery`]。

pub mod binding;
pub mod compiled;
#[cfg(test)]
mod compiled_tests;
pub mod dialect;
pub mod error;
pub mod flavor;
pub mod formatter;
pub mod macros;
pub mod options;
pub mod raw;
pub mod resolver;
pub mod scanner;
#[cfg(test)]
mod scanner_tests;
mod string_builder;
pub mod value;

pub use crate::binding::{Binding, Bindings, Fragment, fragment, list};
pub use crate::compiled::{CompiledQuery, Method, NativeQuery};
pub use crate::dialect::Dialect;
pub use crate::error::{BindingKey, BindingStyle, RawError};
pub use crate::flavor::{
    DefaultFlavorGuard, Flavor, default_flavor, set_default_flavor, set_default_flavor_scoped,
};
pub use crate::formatter::Formatter;
pub use crate::options::QueryOptions;
pub use crate::raw::{Raw, raw, raw_named, raw_with};
pub use crate::resolver::{RenderMode, Resolved};
pub use crate::scanner::{Key, StringEscapes, Token, scan};
pub use crate::value::{SqlDateTime, SqlValue};
