//! 宏集合：允许用不定长、异构的参数直接构造 fragment，无需手动创建 `Vec<Binding>`。
//!
//! ```
//! use halo_raw::{Flavor, raw, raw_named};
//!
//! let mut q = raw!("select * from ?? where id = ? and ?", "users", 1, raw("1 = 1"));
//! q.set_flavor(Flavor::SQLite);
//! assert_eq!(q.interpolate().unwrap(), r#"select * from "users" where id = 1 and 1 = 1"#);
//!
//! let mut q = raw_named!("select :col: from t where id = :id", col => "name", id => 7);
//! q.set_flavor(Flavor::SQLite);
//! assert_eq!(q.interpolate().unwrap(), r#"select "name" from t where id = 7"#);
//! ```

/// 位置绑定：`raw!(sql, a, b, ...)`。
#[macro_export]
macro_rules! raw {
    ($sql:expr $(,)?) => {
        $crate::Raw::new($sql)
    };
    ($sql:expr, $($value:expr),+ $(,)?) => {
        $crate::Raw::set(
            $sql,
            $crate::Bindings::Positional(vec![$($crate::Binding::from($value)),+]),
        )
    };
}

/// 命名绑定：`raw_named!(sql, name => value, ...)`。
#[macro_export]
macro_rules! raw_named {
    ($sql:expr, $($name:ident => $value:expr),+ $(,)?) => {{
        let mut named = ::std::collections::HashMap::<::std::string::String, $crate::Binding>::new();
        $(
            named.insert(stringify!($name).to_string(), $crate::Binding::from($value));
        )+
        $crate::Raw::set($sql, $crate::Bindings::Named(named))
    }};
}
