//! 绑定解析：把 token 序列与绑定合成为最终 SQL 文本与参数序列。
//!
//! 内联与参数化两种渲染共用同一个解析器，只在值占位符的落地方式上分叉，
//! 因此两种输出的引用规则与参数顺序始终一致。

use crate::binding::{Binding, Bindings};
use crate::error::RawError;
use crate::formatter::Formatter;
use crate::scanner::{Key, Token, scan};
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;

/// 值占位符的渲染方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// 通过 Formatter 把值写成字面量，不产生参数。
    Inline,
    /// 写入 `?` 标记并把值追加到参数序列。
    Parameterized,
}

/// 一次解析的结果。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolved {
    pub sql: String,
    pub bindings: Vec<SqlValue>,
}

/// 解析一个模板。纯函数：每次调用都重新扫描，并分配新的输出。
pub fn resolve(
    text: &str,
    bindings: &Bindings,
    formatter: &dyn Formatter,
    mode: RenderMode,
) -> Result<Resolved, RawError> {
    let mut ctx = ResolveContext {
        buf: StringBuilder::with_capacity(text.len()),
        bindings: Vec::new(),
        formatter,
        mode,
    };

    for token in scan(text, formatter.string_escapes()) {
        match token {
            Token::Literal(s) => ctx.buf.write_str(s),
            Token::Escaped(c) => ctx.write_escaped(c),
            Token::Value(key) | Token::Identifier(key) if is_plain_colon_text(bindings, &key) => {
                ctx.buf.write_str(&token.marker().unwrap_or_default());
            }
            Token::Value(key) => {
                let binding = lookup(bindings, &token, &key)?;
                ctx.write_value(binding)?;
            }
            Token::Identifier(key) => {
                let binding = lookup(bindings, &token, &key)?;
                ctx.write_identifier(&key, binding)?;
            }
        }
    }

    Ok(Resolved {
        sql: ctx.buf.into_string(),
        bindings: ctx.bindings,
    })
}

/// 位置绑定下不构成命名标记的冒号文本原样输出：片段没有任何绑定，
/// 或名字以数字开头（`arr[1:2]`）。
fn is_plain_colon_text(bindings: &Bindings, key: &Key<'_>) -> bool {
    match (bindings, key) {
        (Bindings::Positional(items), Key::Name(name)) => {
            items.is_empty() || name.starts_with(|c: char| c.is_ascii_digit())
        }
        _ => false,
    }
}

fn lookup<'b>(
    bindings: &'b Bindings,
    token: &Token<'_>,
    key: &Key<'_>,
) -> Result<&'b Binding, RawError> {
    if key.style() != bindings.style() {
        return Err(RawError::MixedBindingStyle {
            marker: token.marker().unwrap_or_default(),
            style: bindings.style(),
        });
    }
    bindings
        .lookup(key)
        .ok_or_else(|| RawError::MissingBinding(key.to_binding_key()))
}

struct ResolveContext<'f> {
    buf: StringBuilder,
    bindings: Vec<SqlValue>,
    formatter: &'f dyn Formatter,
    mode: RenderMode,
}

impl ResolveContext<'_> {
    fn write_escaped(&mut self, c: char) {
        // 参数化输出里保留 `\?`，留给原生转换时区分真正的标记
        if c == '?' && self.mode == RenderMode::Parameterized {
            self.buf.write_char('\\');
        }
        self.buf.write_char(c);
    }

    fn write_value(&mut self, binding: &Binding) -> Result<(), RawError> {
        match binding {
            Binding::Value(v) => match self.mode {
                RenderMode::Inline => {
                    let literal = self.formatter.format_literal(v)?;
                    self.buf.write_str(&literal);
                }
                RenderMode::Parameterized => {
                    self.buf.write_char('?');
                    self.bindings.push(v.clone());
                }
            },
            Binding::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.buf.write_str(", ");
                    }
                    self.write_value(item)?;
                }
            }
            Binding::Fragment(f) => {
                let nested = f.resolve(self.formatter, self.mode)?;
                self.buf.write_str(&nested.sql);
                self.bindings.extend(nested.bindings);
            }
        }
        Ok(())
    }

    fn write_identifier(&mut self, key: &Key<'_>, binding: &Binding) -> Result<(), RawError> {
        match binding {
            Binding::Value(SqlValue::String(path)) => {
                let wrapped = self.formatter.wrap_identifier(path);
                self.buf.write_str(&wrapped);
            }
            Binding::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.buf.write_str(", ");
                    }
                    match item {
                        Binding::Value(SqlValue::String(path)) => {
                            let wrapped = self.formatter.wrap_identifier(path);
                            self.buf.write_str(&wrapped);
                        }
                        other => return Err(invalid_identifier(key, other)),
                    }
                }
            }
            other => return Err(invalid_identifier(key, other)),
        }
        Ok(())
    }
}

fn invalid_identifier(key: &Key<'_>, binding: &Binding) -> RawError {
    RawError::InvalidIdentifierValue {
        key: key.to_binding_key(),
        found: binding.kind(),
    }
}
