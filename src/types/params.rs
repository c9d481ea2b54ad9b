//! Flat request parameter sets.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::HuobiError;

/// A flat set of request parameters with values in their string form.
///
/// This is the shape the signer works on. Any `Serialize` value that
/// serializes to a JSON object of scalars, or of lists of scalars, can be
/// converted with [`Params::from_serialize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    inner: BTreeMap<String, String>,
}

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten a serializable value into a parameter set.
    ///
    /// Strings are kept as-is, numbers keep their textual form and booleans
    /// become `true`/`false`. `null` fields are skipped, so `Option` fields
    /// that are `None` simply do not appear. Unit (`()`) means no parameters.
    /// A list of scalars becomes its comma-joined form (`["1","2"]` signs as
    /// `1,2`), which is how list parameters such as `order-ids` are read by
    /// the exchange. Objects, and lists holding lists or objects, are rejected.
    pub fn from_serialize<P>(params: &P) -> Result<Self, HuobiError>
    where
        P: Serialize + ?Sized,
    {
        Self::from_value(&serde_json::to_value(params)?)
    }

    /// Flatten an already serialized JSON value. See [`Params::from_serialize`].
    pub fn from_value(value: &Value) -> Result<Self, HuobiError> {
        match value {
            Value::Null => Ok(Self::new()),
            Value::Object(map) => {
                let mut out = Self::new();
                for (key, value) in map {
                    let value = match value {
                        Value::Null => continue,
                        Value::Array(items) => {
                            let items = items
                                .iter()
                                .map(|item| match item {
                                    Value::Null => Some(String::new()),
                                    other => scalar_to_string(other),
                                })
                                .collect::<Option<Vec<_>>>()
                                .ok_or_else(|| {
                                    HuobiError::InvalidParams(format!(
                                        "parameter `{key}` must be a list of scalar values"
                                    ))
                                })?;
                            items.join(",")
                        }
                        other => scalar_to_string(other).ok_or_else(|| {
                            HuobiError::InvalidParams(format!(
                                "parameter `{key}` must be a scalar value or a list"
                            ))
                        })?,
                    };
                    out.insert(key.as_str(), value);
                }
                Ok(out)
            }
            other => Err(HuobiError::InvalidParams(format!(
                "expected a map of parameters, got `{other}`"
            ))),
        }
    }

    /// Insert a parameter, returning the previous value for that key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.inner.insert(key.into(), value.into())
    }

    /// Look up a parameter value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    /// Check whether a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Iterate over `(key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl Serialize for Params {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.inner.serialize(serializer)
    }
}
