//! Raw：原生 SQL 模板片段（模板文本 + 绑定 + 选项）。
//!
//! 编译不会修改片段本身：`to_sql` / `interpolate` 每次都从相同输入重新推导输出，
//! 因此同一个片段可以在多个线程上并发编译。`options` / `set_flavor` 是仅有的写操作，
//! 同一实例上的并发写需要调用方自行同步。

use crate::binding::{Binding, Bindings, Fragment};
use crate::compiled::{CompiledQuery, Method};
use crate::error::RawError;
use crate::flavor::{Flavor, default_flavor};
use crate::formatter::Formatter;
use crate::options::QueryOptions;
use crate::resolver::{RenderMode, Resolved, resolve};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Raw {
    sql: String,
    bindings: Bindings,
    options: QueryOptions,
    flavor: Flavor,
}

impl Raw {
    /// 无绑定的片段，使用当前默认 flavor。
    pub fn new(sql: impl Into<String>) -> Self {
        Self::set(sql, Bindings::default())
    }

    pub fn set(sql: impl Into<String>, bindings: impl Into<Bindings>) -> Self {
        Self {
            sql: sql.into(),
            bindings: bindings.into(),
            options: QueryOptions::new(),
            flavor: default_flavor(),
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// 设置该片段的 flavor，返回旧值。
    pub fn set_flavor(&mut self, flavor: Flavor) -> Flavor {
        std::mem::replace(&mut self.flavor, flavor)
    }

    /// 合并驱动选项（同名键后写覆盖）。
    pub fn options(
        &mut self,
        pairs: impl IntoIterator<Item = (impl Into<String>, impl Into<Value>)>,
    ) -> &mut Self {
        self.options.merge(pairs);
        self
    }

    pub fn option(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.options.insert(key, value);
        self
    }

    pub fn query_options(&self) -> &QueryOptions {
        &self.options
    }

    /// 参数化编译：值占位符变成 `?` 标记，参数按出现顺序收集。
    pub fn to_sql(&self) -> Result<CompiledQuery, RawError> {
        self.to_sql_with(&self.flavor)
    }

    pub fn to_sql_with(&self, formatter: &dyn Formatter) -> Result<CompiledQuery, RawError> {
        let Resolved { sql, bindings } =
            resolve(&self.sql, &self.bindings, formatter, RenderMode::Parameterized)?;
        tracing::trace!(
            dialect = ?formatter.dialect(),
            bindings = bindings.len(),
            "compiled raw fragment"
        );
        Ok(CompiledQuery {
            sql,
            bindings,
            options: self.options.clone(),
            method: Method::Raw,
            dialect: formatter.dialect(),
            string_escapes: formatter.string_escapes(),
        })
    }

    /// 内联编译：所有值都写成字面量，得到可直接执行的 SQL 字符串。
    ///
    /// 插值永远不如参数化安全，只应在驱动不支持参数时使用。
    pub fn interpolate(&self) -> Result<String, RawError> {
        self.interpolate_with(&self.flavor)
    }

    pub fn interpolate_with(&self, formatter: &dyn Formatter) -> Result<String, RawError> {
        let resolved = resolve(&self.sql, &self.bindings, formatter, RenderMode::Inline)?;
        tracing::trace!(sql = %resolved.sql, "interpolated raw fragment");
        Ok(resolved.sql)
    }
}

impl Fragment for Raw {
    fn resolve(&self, formatter: &dyn Formatter, mode: RenderMode) -> Result<Resolved, RawError> {
        resolve(&self.sql, &self.bindings, formatter, mode)
    }
}

impl From<Raw> for Binding {
    fn from(r: Raw) -> Self {
        Self::Fragment(Box::new(r))
    }
}

/// 无绑定的原生片段。
pub fn raw(sql: impl Into<String>) -> Raw {
    Raw::new(sql)
}

/// 使用位置绑定（`?` / `??`）的原生片段。
pub fn raw_with(
    sql: impl Into<String>,
    bindings: impl IntoIterator<Item = impl Into<Binding>>,
) -> Raw {
    Raw::set(sql, Bindings::positional(bindings))
}

/// 使用命名绑定（`:name` / `:name:`）的原生片段。
pub fn raw_named(
    sql: impl Into<String>,
    pairs: impl IntoIterator<Item = (impl Into<String>, impl Into<Binding>)>,
) -> Raw {
    Raw::set(sql, Bindings::named(pairs))
}
