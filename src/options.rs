//! 附加在 fragment 上的驱动执行提示。

use serde_json::{Map, Value};

/// 选项映射。多次合并时同名键后写覆盖先写；对 SQL 文本与参数没有影响。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    entries: Map<String, Value>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge(&mut self, pairs: impl IntoIterator<Item = (impl Into<String>, impl Into<Value>)>) {
        for (k, v) in pairs {
            self.entries.insert(k.into(), v.into());
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }
}

impl From<Map<String, Value>> for QueryOptions {
    fn from(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}

impl From<QueryOptions> for Value {
    fn from(o: QueryOptions) -> Self {
        Value::Object(o.entries)
    }
}
