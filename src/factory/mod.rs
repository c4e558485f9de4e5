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

use std::sync::Arc;

use crate::config::{validate_options, RawOptions};
use crate::errors::Result;
use crate::models::Feature;
use crate::serialization::{Denormalizer, SerdeDenormalizer};
use crate::storage::{ApiServiceStorage, Storage};

/// Creates storages from the options found in the host configuration.
pub trait StorageFactory {
    type Feature;

    /// Validates `options` and creates the storage named `storage_name`.
    ///
    /// Fails with [`Error::ConfigurationError`](crate::Error::ConfigurationError)
    /// when the options are invalid. No storage is created in that case.
    fn create_storage(
        &self,
        storage_name: &str,
        options: RawOptions,
    ) -> Result<Box<dyn Storage<Feature = Self::Feature>>>;
}

/// Creates [`ApiServiceStorage`]s sharing the same [`Denormalizer`].
///
/// Expected options:
///
/// * `client` - The [`ApiService`](crate::ApiService) used to call the remote API.
/// * `collection[operationId]` - Operation listing the features.
/// * `collection[mapper][page]` - Name of the page parameter, `page` by default.
/// * `collection[params]` - Parameters added to every listing request.
/// * `item[operationId]` - Operation fetching a single feature.
/// * `item[mapper][identifier]` - Name of the parameter carrying the feature key.
/// * `item[params]` - Parameters added to every single feature request.
#[derive(Debug)]
pub struct ApiServiceStorageFactory<D: Denormalizer> {
    denormalizer: Arc<D>,
}

impl<D: Denormalizer> ApiServiceStorageFactory<D> {
    pub fn new(denormalizer: D) -> Self {
        Self {
            denormalizer: Arc::new(denormalizer),
        }
    }
}

/// Factory of storages returning the default [`Feature`] model.
pub type FeatureStorageFactory = ApiServiceStorageFactory<SerdeDenormalizer<Feature>>;

impl Default for FeatureStorageFactory {
    fn default() -> Self {
        Self::new(SerdeDenormalizer::new())
    }
}

impl<D> StorageFactory for ApiServiceStorageFactory<D>
where
    D: Denormalizer + 'static,
    D::Output: 'static,
{
    type Feature = D::Output;

    fn create_storage(
        &self,
        storage_name: &str,
        options: RawOptions,
    ) -> Result<Box<dyn Storage<Feature = D::Output>>> {
        let (client, descriptor) = validate_options(storage_name, options)?;
        Ok(Box::new(ApiServiceStorage::new(
            self.denormalizer.clone(),
            client,
            descriptor,
        )))
    }
}
