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

use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::header::HeaderMap;
use serde::Deserialize;

use super::{
    ApiService, NetworkError, NetworkResult, OperationRegistry, Pagination, Params, Response,
    TokenProvider,
};

const USER_AGENT: &str = concat!("featureflag-apiservice/", env!("CARGO_PKG_VERSION"));

pub(crate) enum ServiceAddressProtocol {
    Http,
    Https,
}

impl std::fmt::Display for ServiceAddressProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceAddressProtocol::Http => write!(f, "http://"),
            ServiceAddressProtocol::Https => write!(f, "https://"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServiceAddress {
    host: String,
    port: Option<u16>,
    endpoint: Option<String>,
    use_ssl: bool,
}

impl ServiceAddress {
    pub fn new(host: String, port: Option<u16>, endpoint: Option<String>) -> Self {
        Self {
            host,
            port,
            endpoint,
            use_ssl: true,
        }
    }

    /// Plain http, for local services and tests.
    pub fn new_without_ssl(host: String, port: Option<u16>, endpoint: Option<String>) -> Self {
        Self {
            host,
            port,
            endpoint,
            use_ssl: false,
        }
    }

    pub fn base_url(&self) -> String {
        let protocol = if self.use_ssl {
            ServiceAddressProtocol::Https
        } else {
            ServiceAddressProtocol::Http
        };

        let port = if let Some(port) = self.port {
            format!(":{port}")
        } else {
            "".to_string()
        };

        let endpoint = if let Some(endpoint) = &self.endpoint {
            format!("/{endpoint}")
        } else {
            "".to_string()
        };

        format!("{protocol}{}{port}{endpoint}", self.host)
    }
}

/// An [`ApiService`] talking JSON over HTTP.
///
/// Operation ids are resolved through an [`OperationRegistry`]. Successful
/// responses are classified by the shape of their body:
///
/// * a JSON array is a collection, paginated through the `X-Current-Page`,
///   `X-Items-Per-Page`, `X-Total-Items` and `X-Total-Pages` headers;
/// * an object made only of a `data` array and an optional `pagination`
///   object is a collection. Missing pagination fields are derived from the
///   others, or taken from the headers;
/// * an object made only of a `data` object is that resource;
/// * any other object, including one with a `data` key next to other keys,
///   is a single resource.
#[derive(Debug)]
pub struct ApiServiceHttp {
    service_address: ServiceAddress,
    operations: OperationRegistry,
    token_provider: Option<Box<dyn TokenProvider>>,
    client: Client,
}

impl ApiServiceHttp {
    /// Creates a client for the service at `service_address`.
    ///
    /// # Arguments
    ///
    /// * `service_address` - The address of the server to connect to.
    /// * `operations` - The operations this client is able to call.
    pub fn new(service_address: ServiceAddress, operations: OperationRegistry) -> Self {
        Self {
            service_address,
            operations,
            token_provider: None,
            client: Client::new(),
        }
    }

    /// Sends a bearer token obtained from `token_provider` with every request.
    pub fn with_token_provider(mut self, token_provider: Box<dyn TokenProvider>) -> Self {
        self.token_provider = Some(token_provider);
        self
    }

    fn send(&self, operation_id: &str, params: &Params) -> NetworkResult<Response> {
        let operation = self.operations.get(operation_id)?;
        let url = operation.url(&self.service_address.base_url(), params)?;
        debug!("Calling operation '{operation_id}': {} {url}", operation.method);

        let mut request = self
            .client
            .request(operation.method.clone(), url)
            .header("Accept", "application/json")
            .header("User-Agent", USER_AGENT);
        if let Some(token_provider) = &self.token_provider {
            request = request.bearer_auth(token_provider.get_access_token()?);
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::UnexpectedStatus(status));
        }

        let pagination = header_pagination(response.headers());
        let body = response.text()?;
        let body: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| NetworkError::ProtocolError(format!("invalid JSON body: {e}")))?;
        decode_body(body, pagination)
    }
}

impl ApiService for ApiServiceHttp {
    fn call(&self, operation_id: &str, params: &Params) -> Response {
        match self.send(operation_id, params) {
            Ok(response) => response,
            Err(e) => {
                warn!("Operation '{operation_id}' failed: {e}");
                Response::Error(e.to_string())
            }
        }
    }
}

/// Pagination as reported in a `pagination` object or in headers. Every
/// field may be missing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PartialPagination {
    current_page: Option<u64>,
    items_per_page: Option<u64>,
    #[serde(alias = "itemsTotal")]
    total_items: Option<u64>,
    total_pages: Option<u64>,
}

impl PartialPagination {
    /// Falls back to `itemsTotal / itemsPerPage` when the total number of
    /// pages is not reported.
    fn resolve(self) -> Option<Pagination> {
        let current_page = self.current_page.unwrap_or(1);
        match (self.total_pages, self.items_per_page, self.total_items) {
            (Some(total_pages), items_per_page, total_items) => Some(Pagination::new(
                current_page,
                items_per_page.unwrap_or_default(),
                total_items.unwrap_or_default(),
                total_pages,
            )),
            (None, Some(items_per_page), Some(total_items)) => Some(
                Pagination::from_total_items(current_page, items_per_page, total_items),
            ),
            _ => None,
        }
    }
}

fn header_pagination(headers: &HeaderMap) -> Option<Pagination> {
    let read = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok())
    };

    PartialPagination {
        current_page: read("X-Current-Page"),
        items_per_page: read("X-Items-Per-Page"),
        total_items: read("X-Total-Items"),
        total_pages: read("X-Total-Pages"),
    }
    .resolve()
}

/// Only `data` and `pagination` may appear in a collection envelope. Any
/// other key makes the whole object a resource.
fn is_envelope(map: &serde_json::Map<String, serde_json::Value>) -> bool {
    map.contains_key("data") && map.keys().all(|key| key == "data" || key == "pagination")
}

fn decode_body(
    body: serde_json::Value,
    header_pagination: Option<Pagination>,
) -> NetworkResult<Response> {
    match body {
        serde_json::Value::Array(items) => Ok(Response::Collection {
            items,
            pagination: header_pagination,
        }),
        serde_json::Value::Object(map) if !is_envelope(&map) => {
            Ok(Response::Resource(serde_json::Value::Object(map)))
        }
        serde_json::Value::Object(mut map) => match map.remove("data") {
            Some(serde_json::Value::Array(items)) => {
                let pagination = match map.remove("pagination") {
                    Some(serde_json::Value::Null) | None => header_pagination,
                    Some(pagination) => {
                        let pagination: PartialPagination = serde_json::from_value(pagination)
                            .map_err(|e| {
                                NetworkError::ProtocolError(format!("invalid pagination: {e}"))
                            })?;
                        pagination.resolve().or(header_pagination)
                    }
                };
                Ok(Response::Collection { items, pagination })
            }
            Some(resource @ serde_json::Value::Object(_)) => Ok(Response::Resource(resource)),
            Some(other) => {
                map.insert("data".to_string(), other);
                Ok(Response::Resource(serde_json::Value::Object(map)))
            }
            None => Ok(Response::Resource(serde_json::Value::Object(map))),
        },
        other => Err(NetworkError::ProtocolError(format!(
            "expected a JSON object or array, got '{other}'"
        ))),
    }
}
