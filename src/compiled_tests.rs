#[cfg(test)]
mod tests {
    use crate::binding::Binding;
    use crate::compiled::{CompiledQuery, Method, NativeQuery};
    use crate::dialect::Dialect;
    use crate::error::{BindingKey, RawError};
    use crate::flavor::Flavor;
    use crate::options::QueryOptions;
    use crate::raw::raw_with;
    use crate::scanner::StringEscapes;
    use crate::value::SqlValue;
    use pretty_assertions::assert_eq;

    fn compiled(sql: &str, bindings: Vec<SqlValue>) -> CompiledQuery {
        CompiledQuery {
            sql: sql.to_string(),
            bindings,
            options: QueryOptions::new(),
            method: Method::Raw,
            dialect: Dialect::QuestionMark,
            string_escapes: StringEscapes::Standard,
        }
    }

    #[test]
    fn to_native_renumbers_per_dialect() {
        let q = compiled(
            "select * from t where a = ? and b = ?",
            vec![SqlValue::I64(1), SqlValue::I64(2)],
        );
        let cases = vec![
            (Dialect::QuestionMark, "select * from t where a = ? and b = ?"),
            (Dialect::DollarNumbered, "select * from t where a = $1 and b = $2"),
            (Dialect::AtPNumbered, "select * from t where a = @p1 and b = @p2"),
            (Dialect::ColonNumbered, "select * from t where a = :1 and b = :2"),
        ];
        for (dialect, expected) in cases {
            assert_eq!(
                q.to_native_with(dialect),
                NativeQuery {
                    sql: expected.to_string(),
                    bindings: vec![SqlValue::I64(1), SqlValue::I64(2)],
                }
            );
        }
    }

    #[test]
    fn to_native_skips_quoted_text_and_unescapes() {
        let q = compiled(
            r#"select 'a?b', "c?", data \? 'k' from t where id = ?"#,
            vec![SqlValue::I64(9)],
        );
        assert_eq!(
            q.to_native_with(Dialect::DollarNumbered).sql,
            r#"select 'a?b', "c?", data ? 'k' from t where id = $1"#
        );
    }

    #[test]
    fn to_native_honors_compiled_string_escapes() {
        let mut q = compiled(r"select 'C:\' as p, ?", vec![SqlValue::I64(1)]);
        assert_eq!(
            q.to_native_with(Dialect::DollarNumbered).sql,
            r"select 'C:\' as p, $1"
        );

        q.sql = r"select 'it\'s ?', ?".to_string();
        q.string_escapes = StringEscapes::Backslash;
        assert_eq!(
            q.to_native_with(Dialect::DollarNumbered).sql,
            r"select 'it\'s ?', $1"
        );
    }

    #[test]
    fn to_native_is_idempotent() {
        let q = compiled("select ?", vec![SqlValue::from("x")]);
        assert_eq!(q.to_native(), q.to_native());
        assert_eq!(q.sql, "select ?");
    }

    #[test]
    fn compiled_query_nests_as_fragment() {
        let inner = raw_with("select id from u where age > ?", [18_i64])
            .to_sql_with(&Flavor::SQLite)
            .unwrap();
        let outer = raw_with(
            "select * from t where owner in (?) and kind = ?",
            vec![Binding::from(inner), Binding::from("admin")],
        );

        let q = outer.to_sql_with(&Flavor::PostgreSQL).unwrap();
        assert_eq!(
            q.to_native().sql,
            "select * from t where owner in (select id from u where age > $1) and kind = $2"
        );
        assert_eq!(q.bindings, vec![SqlValue::I64(18), SqlValue::from("admin")]);

        assert_eq!(
            outer.interpolate_with(&Flavor::SQLite).unwrap(),
            "select * from t where owner in (select id from u where age > 18) and kind = 'admin'"
        );
    }

    #[test]
    fn inline_compiled_fragment_with_missing_binding_fails() {
        let broken = compiled("select ?, ?", vec![SqlValue::I64(1)]);
        let outer = raw_with("?", vec![Binding::from(broken)]);
        assert_eq!(
            outer.interpolate_with(&Flavor::SQLite),
            Err(RawError::MissingBinding(BindingKey::Positional(1)))
        );
    }

    #[test]
    fn method_displays_as_raw() {
        assert_eq!(Method::Raw.to_string(), "raw");
    }
}
