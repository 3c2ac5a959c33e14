//! Three-state field for partial updates
//!
//! JSON bodies distinguish an omitted key from an explicit `null`. `Option<T>`
//! collapses both into `None`, so update requests use [`Patch`] instead and
//! must mark each field with `#[serde(default)]`.

use serde::{Deserialize, Deserializer};

use crate::errors::{GameHubError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// 字段未出现在请求体中
    Missing,
    /// 字段显式为 `null`
    Null,
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Missing
    }
}

impl<T> Patch<T> {
    /// 用于不可为空的字段：`Null` 返回校验错误
    pub fn into_required(self, field: &str) -> Result<Option<T>> {
        match self {
            Patch::Missing => Ok(None),
            Patch::Null => Err(GameHubError::validation(format!(
                "{}: field may not be null",
                field
            ))),
            Patch::Value(v) => Ok(Some(v)),
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    // 只有键存在时才会调用；缺失的键由 `#[serde(default)]` 处理
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(|value| match value {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        })
    }
}
