//! CompiledQuery：参数化编译的不可变产物，以及到驱动原生占位符的转换。

use crate::binding::{Binding, Fragment};
use crate::dialect::Dialect;
use crate::error::{BindingKey, RawError};
use crate::formatter::Formatter;
use crate::options::QueryOptions;
use crate::resolver::{RenderMode, Resolved};
use crate::scanner::{QuoteTracker, StringEscapes};
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;
use std::convert::Infallible;
use std::fmt;

/// 产出该查询的编译方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    #[default]
    Raw,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Raw => "raw",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 参数化编译结果。
///
/// `sql` 中剩余的 `?` 标记数量恒等于 `bindings.len()`；标识符永远已经内联。
/// 被转义的问号以 `\?` 形式保留，[`CompiledQuery::to_native`] 时还原。
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    pub sql: String,
    pub bindings: Vec<SqlValue>,
    pub options: QueryOptions,
    pub method: Method,
    pub dialect: Dialect,
    /// 编译时的字符串转义规则，重新扫描 `sql` 时用来跳过字符串字面量。
    pub string_escapes: StringEscapes,
}

/// 驱动可直接执行的查询。
#[derive(Debug, Clone, PartialEq)]
pub struct NativeQuery {
    pub sql: String,
    pub bindings: Vec<SqlValue>,
}

impl CompiledQuery {
    /// 按编译时 Formatter 的占位符风格生成原生查询。
    pub fn to_native(&self) -> NativeQuery {
        self.to_native_with(self.dialect)
    }

    /// 按指定占位符风格重新编号标记。纯投影，可重复调用。
    pub fn to_native_with(&self, dialect: Dialect) -> NativeQuery {
        let sql = match rewrite_markers(&self.sql, self.string_escapes, |idx, out| {
            dialect.write_placeholder(idx + 1, out);
            Ok::<(), Infallible>(())
        }) {
            Ok(sql) => sql,
            Err(never) => match never {},
        };
        tracing::trace!(
            ?dialect,
            bindings = self.bindings.len(),
            "converted compiled query to native placeholders"
        );
        NativeQuery {
            sql,
            bindings: self.bindings.clone(),
        }
    }
}

/// 作为嵌套片段：参数化时原样拼接文本与参数，内联时把参数写成字面量。
impl Fragment for CompiledQuery {
    fn resolve(&self, formatter: &dyn Formatter, mode: RenderMode) -> Result<Resolved, RawError> {
        match mode {
            RenderMode::Parameterized => Ok(Resolved {
                sql: self.sql.clone(),
                bindings: self.bindings.clone(),
            }),
            RenderMode::Inline => {
                let sql = rewrite_markers(&self.sql, self.string_escapes, |idx, out| {
                    let value = self
                        .bindings
                        .get(idx)
                        .ok_or(RawError::MissingBinding(BindingKey::Positional(idx)))?;
                    out.push_str(&formatter.format_literal(value)?);
                    Ok::<(), RawError>(())
                })?;
                Ok(Resolved {
                    sql,
                    bindings: Vec::new(),
                })
            }
        }
    }
}

impl From<CompiledQuery> for Binding {
    fn from(q: CompiledQuery) -> Self {
        Self::Fragment(Box::new(q))
    }
}

/// 遍历参数化文本：引号外的每个 `?` 交给 `on_marker`（参数下标从 0 开始），`\?` 还原为 `?`。
fn rewrite_markers<E>(
    sql: &str,
    escapes: StringEscapes,
    mut on_marker: impl FnMut(usize, &mut String) -> Result<(), E>,
) -> Result<String, E> {
    let bytes = sql.as_bytes();
    let mut out = StringBuilder::with_capacity(sql.len());
    let mut quotes = QuoteTracker::new(escapes);
    let mut literal_start = 0usize;
    let mut index = 0usize;
    let mut i = 0usize;

    while i < bytes.len() {
        if quotes.advance(bytes[i]) {
            i += 1;
            continue;
        }
        match bytes[i] {
            b'\\' if bytes.get(i + 1) == Some(&b'?') => {
                out.write_str(&sql[literal_start..i]);
                out.write_char('?');
                i += 2;
                literal_start = i;
            }
            b'?' => {
                out.write_str(&sql[literal_start..i]);
                on_marker(index, out.as_mut_string())?;
                index += 1;
                i += 1;
                literal_start = i;
            }
            _ => i += 1,
        }
    }

    out.write_str(&sql[literal_start..]);
    Ok(out.into_string())
}
