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

use std::collections::{HashMap, HashSet};

use reqwest::Method;
use url::Url;

use super::{NetworkError, NetworkResult, Params};

/// An HTTP endpoint reachable through an operation id.
///
/// `path` is relative to the service base url and may contain `{name}`
/// placeholders that are filled from the call parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub method: Method,
    pub path: String,
}

impl Operation {
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
        }
    }

    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    fn placeholders(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut rest = self.path.as_str();
        while let Some(start) = rest.find('{') {
            let Some(end) = rest[start..].find('}') else {
                break;
            };
            names.push(&rest[start + 1..start + end]);
            rest = &rest[start + end + 1..];
        }
        names
    }

    /// Builds the full url for this operation.
    ///
    /// Parameters matching a placeholder go into the path, the others are
    /// appended to the query string.
    pub(crate) fn url(&self, base_url: &str, params: &Params) -> NetworkResult<Url> {
        let segments = self
            .path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| fill_placeholders(segment, params))
            .collect::<NetworkResult<Vec<String>>>()?;

        let mut url =
            Url::parse(base_url).map_err(|_| NetworkError::UrlParseError(base_url.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| NetworkError::UrlParseError(base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);

        let in_path: HashSet<&str> = self.placeholders().into_iter().collect();
        let query: Vec<(String, String)> = params
            .iter()
            .filter(|(name, _)| !in_path.contains(name.as_str()))
            .flat_map(|(name, value)| query_pairs(name, value))
            .collect();
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }
}

fn fill_placeholders(segment: &str, params: &Params) -> NetworkResult<String> {
    let mut filled = String::new();
    let mut rest = segment;
    while let Some(start) = rest.find('{') {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let name = &rest[start + 1..start + end];
        let value = params
            .get(name)
            .and_then(scalar_to_string)
            .ok_or_else(|| NetworkError::MissingPathParameter(name.to_string()))?;
        filled.push_str(&rest[..start]);
        filled.push_str(&value);
        rest = &rest[start + end + 1..];
    }
    filled.push_str(rest);
    Ok(filled)
}

fn scalar_to_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn query_pairs(name: &str, value: &serde_json::Value) -> Vec<(String, String)> {
    match value {
        serde_json::Value::Null => vec![],
        serde_json::Value::Array(values) => values
            .iter()
            .filter_map(scalar_to_string)
            .map(|v| (format!("{name}[]"), v))
            .collect(),
        serde_json::Value::Object(map) => map
            .iter()
            .flat_map(|(key, v)| query_pairs(&format!("{name}[{key}]"), v))
            .collect(),
        scalar => scalar_to_string(scalar)
            .map(|v| vec![(name.to_string(), v)])
            .unwrap_or_default(),
    }
}

/// Resolves operation ids to the HTTP endpoint they stand for.
#[derive(Debug, Clone, Default)]
pub struct OperationRegistry {
    operations: HashMap<String, Operation>,
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_operation(mut self, operation_id: &str, operation: Operation) -> Self {
        self.register(operation_id, operation);
        self
    }

    pub fn register(&mut self, operation_id: &str, operation: Operation) {
        self.operations.insert(operation_id.to_string(), operation);
    }

    pub fn get(&self, operation_id: &str) -> NetworkResult<&Operation> {
        self.operations
            .get(operation_id)
            .ok_or_else(|| NetworkError::UnknownOperation(operation_id.to_string()))
    }
}
