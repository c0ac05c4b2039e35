//! 占位符扫描：把模板文本切分为字面量与占位符 token。
//!
//! 支持的标记（长匹配优先）：
//!
//! | 标记      | 含义           |
//! |-----------|----------------|
//! | `??`      | 位置标识符     |
//! | `?`       | 位置值         |
//! | `:name:`  | 命名标识符     |
//! | `:name`   | 命名值         |
//!
//! 单引号字符串、双引号/反引号标识符内的内容原样保留（字符串内反斜杠是否转义由
//! [`StringEscapes`] 决定）；`\?`、`\:` 输出字面字符；
//! `::`（PostgreSQL 类型转换）永远不会被当成命名标记。整个扫描是单趟线性的。

use crate::error::{BindingKey, BindingStyle};

/// 占位符引用的绑定键。位置键在扫描时按出现顺序编号。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    Index(usize),
    Name(&'a str),
}

impl Key<'_> {
    pub fn style(&self) -> BindingStyle {
        match self {
            Self::Index(_) => BindingStyle::Positional,
            Self::Name(_) => BindingStyle::Named,
        }
    }

    pub fn to_binding_key(&self) -> BindingKey {
        match self {
            Self::Index(i) => BindingKey::Positional(*i),
            Self::Name(n) => BindingKey::Named((*n).to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// 原样输出的文本。
    Literal(&'a str),
    /// `\?` 或 `\:`：被转义的标记字符。
    Escaped(char),
    Value(Key<'a>),
    Identifier(Key<'a>),
}

impl Token<'_> {
    /// 占位符在模板中的写法；非占位符返回 `None`。
    pub fn marker(&self) -> Option<String> {
        match self {
            Self::Value(Key::Index(_)) => Some("?".to_string()),
            Self::Identifier(Key::Index(_)) => Some("??".to_string()),
            Self::Value(Key::Name(n)) => Some(format!(":{n}")),
            Self::Identifier(Key::Name(n)) => Some(format!(":{n}:")),
            Self::Literal(_) | Self::Escaped(_) => None,
        }
    }
}

/// 单引号字符串内反斜杠的含义。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StringEscapes {
    /// 标准 SQL：反斜杠是普通字符，`'` 只能写成 `''`。
    #[default]
    Standard,
    /// 所有单引号字符串都支持 `\` 转义（MySQL 系）。
    Backslash,
    /// 只有 `E'..'` 字符串支持 `\` 转义（PostgreSQL）。
    EscapePrefixed,
}

/// 追踪引号状态：单引号字符串、双引号与反引号标识符。
///
/// 成对的 `''` / `""` 会自然地先关闭再重新打开，无需特殊处理。
#[derive(Debug, Default, Clone)]
pub(crate) struct QuoteTracker {
    escapes: StringEscapes,
    quote: Option<u8>,
    backslash: bool,
    escaping: bool,
    prev: Option<u8>,
    e_prefix: bool,
}

impl QuoteTracker {
    pub(crate) fn new(escapes: StringEscapes) -> Self {
        Self {
            escapes,
            ..Self::default()
        }
    }

    /// 喂入一个字节，返回它是否属于引号区域（包括引号本身）。
    pub(crate) fn advance(&mut self, b: u8) -> bool {
        if self.escaping {
            self.escaping = false;
            return true;
        }
        match self.quote {
            Some(q) => {
                if b == b'\\' && self.backslash {
                    self.escaping = true;
                } else if b == q {
                    self.quote = None;
                    self.prev = Some(b);
                    self.e_prefix = false;
                }
                true
            }
            None => match b {
                b'\'' | b'"' | b'`' => {
                    self.quote = Some(b);
                    self.backslash = b == b'\''
                        && match self.escapes {
                            StringEscapes::Standard => false,
                            StringEscapes::Backslash => true,
                            StringEscapes::EscapePrefixed => self.e_prefix,
                        };
                    true
                }
                _ => {
                    // `E'` 前缀必须是独立的 E，`date'..'` 之类不算
                    self.e_prefix =
                        matches!(b, b'E' | b'e') && !self.prev.is_some_and(is_name_byte);
                    self.prev = Some(b);
                    false
                }
            },
        }
    }
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn flush<'a>(tokens: &mut Vec<Token<'a>>, text: &'a str, start: usize, end: usize) {
    if end > start {
        tokens.push(Token::Literal(&text[start..end]));
    }
}

/// 扫描模板文本，`escapes` 决定单引号字符串内反斜杠的含义。扫描本身从不失败。
pub fn scan(text: &str, escapes: StringEscapes) -> Vec<Token<'_>> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut quotes = QuoteTracker::new(escapes);
    let mut literal_start = 0usize;
    let mut next_index = 0usize;
    let mut i = 0usize;

    while i < bytes.len() {
        let b = bytes[i];
        if quotes.advance(b) {
            i += 1;
            continue;
        }

        match b {
            b'\\' if matches!(bytes.get(i + 1), Some(b'?') | Some(b':')) => {
                flush(&mut tokens, text, literal_start, i);
                tokens.push(Token::Escaped(bytes[i + 1] as char));
                i += 2;
                literal_start = i;
            }
            b'?' => {
                flush(&mut tokens, text, literal_start, i);
                let key = Key::Index(next_index);
                next_index += 1;
                if bytes.get(i + 1) == Some(&b'?') {
                    tokens.push(Token::Identifier(key));
                    i += 2;
                } else {
                    tokens.push(Token::Value(key));
                    i += 1;
                }
                literal_start = i;
            }
            b':' => {
                if bytes.get(i + 1) == Some(&b':') {
                    // 类型转换 `::`，连同后续冒号一起跳过
                    while i < bytes.len() && bytes[i] == b':' {
                        i += 1;
                    }
                    continue;
                }

                let name_start = i + 1;
                let mut name_end = name_start;
                while name_end < bytes.len() && is_name_byte(bytes[name_end]) {
                    name_end += 1;
                }
                if name_end == name_start {
                    i += 1;
                    continue;
                }

                let mut colons = 0usize;
                while name_end + colons < bytes.len() && bytes[name_end + colons] == b':' {
                    colons += 1;
                }

                flush(&mut tokens, text, literal_start, i);
                let key = Key::Name(&text[name_start..name_end]);
                // `:name::type` 是值加类型转换；`:name:` 与 `:name:::type` 是标识符
                if colons == 2 {
                    tokens.push(Token::Value(key));
                    i = name_end;
                } else if colons > 0 {
                    tokens.push(Token::Identifier(key));
                    i = name_end + 1;
                } else {
                    tokens.push(Token::Value(key));
                    i = name_end;
                }
                literal_start = i;
            }
            _ => i += 1,
        }
    }

    flush(&mut tokens, text, literal_start, bytes.len());
    tokens
}
