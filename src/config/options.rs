// (C) Copyright IBM Corp. 2024.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::{DeserializationError, Error, Result};
use crate::network::ApiService;

/// A single entry of [`RawOptions`].
#[derive(Debug, Clone)]
pub enum OptionValue {
    /// A handle to an API client.
    Client(Arc<dyn ApiService>),
    /// Plain data, as read from a configuration file.
    Value(serde_json::Value),
}

impl OptionValue {
    /// Name of the type of this value, as shown in configuration errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            OptionValue::Client(_) => "ApiService",
            OptionValue::Value(value) => json_type_name(value),
        }
    }

    /// Representation of this value, as shown in configuration errors.
    pub fn describe(&self) -> String {
        match self {
            OptionValue::Client(client) => format!("{client:?}"),
            OptionValue::Value(value) => value.to_string(),
        }
    }
}

impl From<serde_json::Value> for OptionValue {
    fn from(value: serde_json::Value) -> Self {
        OptionValue::Value(value)
    }
}

impl From<Arc<dyn ApiService>> for OptionValue {
    fn from(client: Arc<dyn ApiService>) -> Self {
        OptionValue::Client(client)
    }
}

pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(n) if n.is_f64() => "float",
        serde_json::Value::Number(_) => "int",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "list",
        serde_json::Value::Object(_) => "array",
    }
}

/// The loosely typed options a storage is configured with.
///
/// Nothing is checked when options are added: validation happens at once when
/// the options are handed to a [`StorageFactory`](crate::StorageFactory).
#[derive(Debug, Clone, Default)]
pub struct RawOptions {
    entries: HashMap<String, OptionValue>,
}

impl RawOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the options from a JSON object. The client has to be added
    /// separately with [`RawOptions::with_client`].
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)
            .map_err(|e| {
                Error::DeserializationError(DeserializationError {
                    string: "Error deserializing storage options".to_string(),
                    source: e.into(),
                })
            })?;
        Ok(entries.into())
    }

    pub fn with_client(self, client: Arc<dyn ApiService>) -> Self {
        self.with("client", OptionValue::Client(client))
    }

    pub fn with(mut self, name: &str, value: impl Into<OptionValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<OptionValue>) {
        self.entries.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.entries.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<OptionValue> {
        self.entries.remove(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for RawOptions {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        Self {
            entries: map
                .into_iter()
                .map(|(name, value)| (name, OptionValue::Value(value)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(null), "null")]
    #[case(json!(true), "bool")]
    #[case(json!(813), "int")]
    #[case(json!(-8), "int")]
    #[case(json!(1.5), "float")]
    #[case(json!("bar"), "string")]
    #[case(json!([1, 2]), "list")]
    #[case(json!({"a": 1}), "array")]
    fn test_type_names(#[case] value: serde_json::Value, #[case] expected: &str) {
        assert_eq!(OptionValue::from(value).type_name(), expected);
    }

    #[test]
    fn test_from_json() {
        let options = RawOptions::from_json(
            r#"{"collection": {"operationId": "getFeatureCollection"}, "item": {"operationId": "getFeatureItem"}}"#,
        )
        .unwrap();
        assert!(options.get("client").is_none());
        assert!(matches!(
            options.get("collection"),
            Some(OptionValue::Value(value)) if value["operationId"] == "getFeatureCollection"
        ));
    }

    #[test]
    fn test_from_json_not_an_object() {
        let result = RawOptions::from_json("[1, 2]");
        assert!(matches!(result, Err(Error::DeserializationError(_))));
    }
}
