#[cfg(test)]
mod tests {
    use crate::scanner::{Key, StringEscapes, Token, scan};
    use pretty_assertions::assert_eq;

    fn standard(text: &str) -> Vec<Token<'_>> {
        scan(text, StringEscapes::Standard)
    }

    #[test]
    fn positional_markers_longest_match_first() {
        let tokens = standard("select * from ?? where id = ? and ?? = ??");
        assert_eq!(
            tokens,
            vec![
                Token::Literal("select * from "),
                Token::Identifier(Key::Index(0)),
                Token::Literal(" where id = "),
                Token::Value(Key::Index(1)),
                Token::Literal(" and "),
                Token::Identifier(Key::Index(2)),
                Token::Literal(" = "),
                Token::Identifier(Key::Index(3)),
            ]
        );
    }

    #[test]
    fn named_identifier_before_named_value() {
        let tokens = standard(":userIdCol: = :userId");
        assert_eq!(
            tokens,
            vec![
                Token::Identifier(Key::Name("userIdCol")),
                Token::Literal(" = "),
                Token::Value(Key::Name("userId")),
            ]
        );
    }

    #[test]
    fn whole_template_is_one_marker() {
        assert_eq!(standard(":userId"), vec![Token::Value(Key::Name("userId"))]);
        assert_eq!(standard("?"), vec![Token::Value(Key::Index(0))]);
    }

    #[test]
    fn quoted_text_passes_through() {
        let sql = r#"select 'a ? :b', "c??" from t where x = ?"#;
        assert_eq!(
            standard(sql),
            vec![
                Token::Literal(r#"select 'a ? :b', "c??" from t where x = "#),
                Token::Value(Key::Index(0)),
            ]
        );
    }

    #[test]
    fn doubled_and_backslash_quotes_stay_inside_literal() {
        let sql = r"select 'it''s ?', 'a\'?' , ?";
        assert_eq!(
            scan(sql, StringEscapes::Backslash),
            vec![
                Token::Literal(r"select 'it''s ?', 'a\'?' , "),
                Token::Value(Key::Index(0)),
            ]
        );
    }

    #[test]
    fn backtick_identifiers_are_skipped() {
        assert_eq!(
            standard("select `a?` from t"),
            vec![Token::Literal("select `a?` from t")]
        );
    }

    #[test]
    fn escapes_emit_literal_marker_chars() {
        assert_eq!(
            standard(r"data \? 'k' and a = ?"),
            vec![
                Token::Literal("data "),
                Token::Escaped('?'),
                Token::Literal(" 'k' and a = "),
                Token::Value(Key::Index(0)),
            ]
        );
        assert_eq!(
            standard(r"\:name"),
            vec![Token::Escaped(':'), Token::Literal("name")]
        );
    }

    #[test]
    fn postgres_casts_are_not_markers() {
        assert_eq!(
            standard("select x::text, :id::int, :col:::text"),
            vec![
                Token::Literal("select x::text, "),
                Token::Value(Key::Name("id")),
                Token::Literal("::int, "),
                Token::Identifier(Key::Name("col")),
                Token::Literal("::text"),
            ]
        );
    }

    #[test]
    fn bare_colon_is_literal() {
        assert_eq!(standard("a : b"), vec![Token::Literal("a : b")]);
    }

    #[test]
    fn name_chars_are_letters_digits_underscore() {
        assert_eq!(
            standard(":user_id2-1"),
            vec![
                Token::Value(Key::Name("user_id2")),
                Token::Literal("-1"),
            ]
        );
    }

    #[test]
    fn non_ascii_text_is_preserved() {
        assert_eq!(
            standard("select '名字?' as 名, ?"),
            vec![
                Token::Literal("select '名字?' as 名, "),
                Token::Value(Key::Index(0)),
            ]
        );
    }

    #[test]
    fn markers_render_back() {
        let markers: Vec<String> = standard("?? ? :a: :b")
            .iter()
            .filter_map(|t| t.marker())
            .collect();
        assert_eq!(markers, vec!["??", "?", ":a:", ":b"]);
    }

    #[test]
    fn empty_template_has_no_tokens() {
        assert_eq!(standard(""), Vec::<Token<'_>>::new());
    }

    #[test]
    fn standard_strings_end_at_trailing_backslash() {
        let sql = r"select 'C:\' as p, ?";
        assert_eq!(
            standard(sql),
            vec![
                Token::Literal(r"select 'C:\' as p, "),
                Token::Value(Key::Index(0)),
            ]
        );
        // 反斜杠转义的方言里同一段文本仍在字符串内
        assert_eq!(
            scan(sql, StringEscapes::Backslash),
            vec![Token::Literal(sql)]
        );
    }

    #[test]
    fn only_e_prefixed_strings_take_backslash_escapes() {
        let sql = r"select E'a\'?', 'C:\', type'x\', ?";
        assert_eq!(
            scan(sql, StringEscapes::EscapePrefixed),
            vec![
                Token::Literal(r"select E'a\'?', 'C:\', type'x\', "),
                Token::Value(Key::Index(0)),
            ]
        );
    }
}
