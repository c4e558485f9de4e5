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

//! Read-only feature flag storage backed by a remote API.
//!
//! The remote API is reached through an [`ApiService`], which invokes
//! operations identified by an operation id. A storage only needs two of them:
//! one listing the features (possibly over several pages) and one fetching a
//! single feature by key.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use featureflag_apiservice::{
//!     ApiServiceHttp, FeatureStorageFactory, Operation, OperationRegistry, RawOptions,
//!     ServiceAddress, Storage, StorageFactory,
//! };
//! use serde_json::json;
//!
//! # fn main() -> featureflag_apiservice::Result<()> {
//! let operations = OperationRegistry::new()
//!     .with_operation("getFeatureCollection", Operation::get("/features"))
//!     .with_operation("getFeatureItem", Operation::get("/features/{uuid}"));
//! let client = ApiServiceHttp::new(
//!     ServiceAddress::new("flags.example.org".to_string(), None, Some("api".to_string())),
//!     operations,
//! );
//!
//! let options = RawOptions::new()
//!     .with_client(Arc::new(client))
//!     .with("collection", json!({"operationId": "getFeatureCollection"}))
//!     .with(
//!         "item",
//!         json!({"operationId": "getFeatureItem", "mapper": {"identifier": "uuid"}}),
//!     );
//!
//! let storage = FeatureStorageFactory::default().create_storage("default", options)?;
//! if let Some(feature) = storage.get("new-checkout") {
//!     println!("{} enabled: {}", feature.key(), feature.is_enabled());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
mod errors;
mod factory;
mod models;
mod network;
mod serialization;
mod storage;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use config::{ConnectionDescriptor, OptionValue, RawOptions};
pub use errors::{
    ConfigurationError, ConfigurationErrorKind, DeserializationError, DeserializationErrorKind,
    Error, Result,
};
pub use factory::{ApiServiceStorageFactory, FeatureStorageFactory, StorageFactory};
pub use models::Feature;
pub use network::{
    ApiService, ApiServiceHttp, NetworkError, NetworkResult, Operation, OperationRegistry,
    Pagination, Params, Response, ServiceAddress, StaticTokenProvider, TokenProvider,
};
pub use serialization::{Denormalizer, SerdeDenormalizer};
pub use storage::{ApiServiceStorage, Storage};
