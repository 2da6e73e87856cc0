#![forbid(unsafe_code)]

//! Searchable records supplied by the host.

/// One searchable entity: a unique key and a display label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// Unique identifier.
    pub key: String,
    /// Display label; this is what queries match against.
    pub value: String,
}

impl Record {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Record {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}
