//! 驱动原生占位符风格。

/// SQL 占位符风格。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// 使用 `?` 作为占位符（常见于 MySQL/SQLite）。
    #[default]
    QuestionMark,
    /// 使用 `$1, $2, ...` 作为占位符（常见于 PostgreSQL）。
    DollarNumbered,
    /// 使用 `@p1, @p2, ...` 作为占位符（SQLServer）。
    AtPNumbered,
    /// 使用 `:1, :2, ...` 作为占位符（Oracle）。
    ColonNumbered,
}

impl Dialect {
    pub(crate) fn write_placeholder(self, index_1_based: usize, out: &mut String) {
        match self {
            Self::QuestionMark => out.push('?'),
            Self::DollarNumbered => {
                out.push('$');
                out.push_str(&index_1_based.to_string());
            }
            Self::AtPNumbered => {
                out.push_str("@p");
                out.push_str(&index_1_based.to_string());
            }
            Self::ColonNumbered => {
                out.push(':');
                out.push_str(&index_1_based.to_string());
            }
        }
    }
}
