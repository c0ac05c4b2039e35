//! Formatter：方言能力接口（标识符引用、字面量转义），以及 [`Flavor`] 的内置实现。
//!
//! 编译器只通过这里的 trait 接触方言差异，不硬编码任何引号字符。

use crate::dialect::Dialect;
use crate::error::RawError;
use crate::flavor::Flavor;
use crate::scanner::StringEscapes;
use crate::value::{SqlDateTime, SqlValue};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// 注入给编译器的方言能力。
pub trait Formatter {
    /// 用方言的引号包裹一个不含 `.` 的标识符片段。
    fn quote_identifier(&self, segment: &str) -> String;

    /// 把标量渲染成 SQL 字面量。
    fn format_literal(&self, value: &SqlValue) -> Result<String, RawError>;

    /// `CompiledQuery::to_native` 使用的占位符风格。
    fn dialect(&self) -> Dialect {
        Dialect::QuestionMark
    }

    /// 模板中单引号字符串的反斜杠规则，扫描占位符时据此跳过字符串。
    fn string_escapes(&self) -> StringEscapes {
        StringEscapes::Standard
    }

    /// 包裹一个标识符路径：`a.b` 的每段独立引用；支持 `col as alias`，`*` 段保持原样。
    fn wrap_identifier(&self, path: &str) -> String {
        let path = path.trim();
        if let Some((name, alias)) = split_alias(path) {
            return format!(
                "{} as {}",
                self.wrap_identifier(name),
                self.wrap_identifier(alias)
            );
        }

        let mut out = String::with_capacity(path.len() + 4);
        for (i, segment) in path.split('.').enumerate() {
            if i > 0 {
                out.push('.');
            }
            if segment == "*" {
                out.push('*');
            } else {
                out.push_str(&self.quote_identifier(segment));
            }
        }
        out
    }
}

impl<F: Formatter + ?Sized> Formatter for &F {
    fn quote_identifier(&self, segment: &str) -> String {
        (**self).quote_identifier(segment)
    }

    fn format_literal(&self, value: &SqlValue) -> Result<String, RawError> {
        (**self).format_literal(value)
    }

    fn dialect(&self) -> Dialect {
        (**self).dialect()
    }

    fn string_escapes(&self) -> StringEscapes {
        (**self).string_escapes()
    }

    fn wrap_identifier(&self, path: &str) -> String {
        (**self).wrap_identifier(path)
    }
}

fn split_alias(path: &str) -> Option<(&str, &str)> {
    // ASCII 小写化不改变字节偏移
    let lower = path.to_ascii_lowercase();
    let pos = lower.find(" as ")?;
    Some((path[..pos].trim(), path[pos + 4..].trim()))
}

impl Formatter for Flavor {
    fn quote_identifier(&self, segment: &str) -> String {
        let q = self.identifier_quote();
        let mut out = String::with_capacity(segment.len() + 2);
        out.push(q);
        for ch in segment.chars() {
            if ch == q {
                out.push(q);
            }
            out.push(ch);
        }
        out.push(q);
        out
    }

    fn format_literal(&self, value: &SqlValue) -> Result<String, RawError> {
        let mut out = String::new();
        encode_sql_value(&mut out, value, *self)?;
        Ok(out)
    }

    fn dialect(&self) -> Dialect {
        self.native_dialect()
    }

    fn string_escapes(&self) -> StringEscapes {
        Flavor::string_escapes(*self)
    }
}

fn encode_sql_value(out: &mut String, v: &SqlValue, flavor: Flavor) -> Result<(), RawError> {
    match v {
        SqlValue::Null => out.push_str("NULL"),
        SqlValue::Bool(b) => match flavor {
            Flavor::Oracle | Flavor::SQLServer => out.push_str(if *b { "1" } else { "0" }),
            _ => out.push_str(if *b { "TRUE" } else { "FALSE" }),
        },
        SqlValue::I64(n) => out.push_str(&n.to_string()),
        SqlValue::U64(n) => out.push_str(&n.to_string()),
        SqlValue::F64(n) if n.is_finite() => out.push_str(&n.to_string()),
        SqlValue::F64(_) => {
            return Err(RawError::UnsupportedValue {
                flavor,
                kind: "float",
            });
        }
        SqlValue::String(s) => quote_string(out, s.as_ref(), flavor),
        SqlValue::Bytes(b) => encode_bytes(out, b, flavor)?,
        SqlValue::DateTime(dt) => encode_datetime(out, dt, flavor)?,
    }
    Ok(())
}

fn encode_bytes(out: &mut String, data: &[u8], flavor: Flavor) -> Result<(), RawError> {
    match flavor {
        Flavor::PostgreSQL => {
            out.push_str("E'\\\\x");
            push_hex(out, data);
            out.push_str("'::bytea");
        }
        Flavor::MySQL | Flavor::SQLite => {
            out.push_str("X'");
            push_hex(out, data);
            out.push('\'');
        }
        Flavor::SQLServer | Flavor::CQL => {
            out.push_str("0x");
            push_hex(out, data);
        }
        Flavor::ClickHouse => {
            out.push_str("unhex('");
            push_hex(out, data);
            out.push_str("')");
        }
        Flavor::Presto => {
            out.push_str("from_hex('");
            push_hex(out, data);
            out.push_str("')");
        }
        Flavor::Oracle => {
            out.push_str("hextoraw('");
            push_hex(out, data);
            out.push_str("')");
        }
        Flavor::Informix | Flavor::Doris => {
            return Err(RawError::UnsupportedValue {
                flavor,
                kind: "bytes",
            });
        }
    }

    Ok(())
}

fn push_hex(out: &mut String, data: &[u8]) {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    for &b in data {
        out.push(HEX[((b >> 4) & 0xF) as usize] as char);
        out.push(HEX[(b & 0xF) as usize] as char);
    }
}

fn quote_string(out: &mut String, s: &str, flavor: Flavor) {
    match flavor {
        Flavor::PostgreSQL => out.push('E'),
        Flavor::SQLServer => out.push('N'),
        _ => {}
    }

    out.push('\'');
    // PostgreSQL 输出的是 `E'..'`，同样按反斜杠转义；其余标准方言把 `'` 写成 `''`
    if flavor.string_escapes() != StringEscapes::Standard {
        for ch in s.chars() {
            match ch {
                '\u{0000}' => out.push_str("\\0"),
                '\u{0008}' => out.push_str("\\b"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                '\u{001a}' => out.push_str("\\Z"),
                '\'' => out.push_str("\\'"),
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                _ => out.push(ch),
            }
        }
    } else {
        for ch in s.chars() {
            if ch == '\'' {
                out.push('\'');
            }
            out.push(ch);
        }
    }
    out.push('\'');
}

const DATETIME_MICROS: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:6]");
const DATETIME_MILLIS: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]");
const OFFSET_COLON: &[BorrowedFormatItem<'static>] =
    format_description!("[offset_hour sign:mandatory]:[offset_minute]");
const OFFSET_COMPACT: &[BorrowedFormatItem<'static>] =
    format_description!("[offset_hour sign:mandatory][offset_minute]");

fn encode_datetime(out: &mut String, v: &SqlDateTime, flavor: Flavor) -> Result<(), RawError> {
    // Unix epoch 且无时区缩写视为零值
    if v.dt.unix_timestamp() == 0 && v.dt.nanosecond() == 0 && v.tz_abbr.is_none() {
        out.push_str("'0000-00-00'");
        return Ok(());
    }

    // 四舍五入到微秒：+500ns
    let dt = v.dt + time::Duration::nanoseconds(500);
    let unsupported = |_: time::error::Format| RawError::UnsupportedValue {
        flavor,
        kind: "datetime",
    };

    match flavor {
        Flavor::MySQL | Flavor::ClickHouse | Flavor::Informix | Flavor::Doris => {
            out.push('\'');
            out.push_str(&dt.format(DATETIME_MICROS).map_err(unsupported)?);
            out.push('\'');
        }
        Flavor::PostgreSQL => {
            out.push('\'');
            out.push_str(&dt.format(DATETIME_MICROS).map_err(unsupported)?);
            out.push(' ');
            match &v.tz_abbr {
                Some(abbr) => out.push_str(abbr),
                None => out.push_str(&dt.format(OFFSET_COLON).map_err(unsupported)?),
            }
            out.push('\'');
        }
        Flavor::SQLite | Flavor::Presto => {
            out.push('\'');
            out.push_str(&dt.format(DATETIME_MILLIS).map_err(unsupported)?);
            out.push('\'');
        }
        Flavor::SQLServer => {
            out.push('\'');
            out.push_str(&dt.format(DATETIME_MICROS).map_err(unsupported)?);
            out.push(' ');
            out.push_str(&dt.format(OFFSET_COLON).map_err(unsupported)?);
            out.push('\'');
        }
        Flavor::CQL => {
            out.push('\'');
            out.push_str(&dt.format(DATETIME_MICROS).map_err(unsupported)?);
            out.push_str(&dt.format(OFFSET_COMPACT).map_err(unsupported)?);
            out.push('\'');
        }
        Flavor::Oracle => {
            out.push_str("to_timestamp('");
            out.push_str(&dt.format(DATETIME_MICROS).map_err(unsupported)?);
            out.push_str("', 'YYYY-MM-DD HH24:MI:SS.FF')");
        }
    }

    Ok(())
}
