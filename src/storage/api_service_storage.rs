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

use log::{debug, warn};

use super::Storage;
use crate::config::ConnectionDescriptor;
use crate::network::{ApiService, Response};
use crate::serialization::Denormalizer;

/// A [`Storage`] reading features from a remote API.
///
/// The whole collection is read page by page, starting at page 1, until the
/// last page reported by the server. Any failure while listing discards the
/// pages already read.
#[derive(Debug)]
pub struct ApiServiceStorage<D: Denormalizer> {
    denormalizer: Arc<D>,
    client: Arc<dyn ApiService>,
    options: ConnectionDescriptor,
}

impl<D: Denormalizer> ApiServiceStorage<D> {
    pub fn new(
        denormalizer: Arc<D>,
        client: Arc<dyn ApiService>,
        options: ConnectionDescriptor,
    ) -> Self {
        Self {
            denormalizer,
            client,
            options,
        }
    }

    pub fn options(&self) -> &ConnectionDescriptor {
        &self.options
    }
}

impl<D: Denormalizer> Storage for ApiServiceStorage<D> {
    type Feature = D::Output;

    fn all(&self) -> Vec<D::Output> {
        let collection = self.options.collection();
        let mut page = 1;
        let mut features = Vec::new();

        loop {
            debug!(
                "Fetching page {page} of operation '{}'",
                collection.operation_id()
            );
            let response = self
                .client
                .call(collection.operation_id(), &collection.params_for_page(page));

            let (items, pagination) = match response {
                Response::Collection { items, pagination } => (items, pagination),
                Response::Resource(_) => {
                    warn!(
                        "Operation '{}' returned a single resource for page {page}, discarding all features",
                        collection.operation_id()
                    );
                    return Vec::new();
                }
                Response::Error(e) => {
                    warn!(
                        "Operation '{}' failed for page {page}, discarding all features: {e}",
                        collection.operation_id()
                    );
                    return Vec::new();
                }
            };

            for item in &items {
                match self.denormalizer.denormalize(item) {
                    Ok(feature) => features.push(feature),
                    Err(e) => {
                        warn!("Cannot read feature from page {page}, discarding all features: {e}");
                        return Vec::new();
                    }
                }
            }

            page += 1;
            let total_pages = pagination.map_or(1, |pagination| pagination.total_pages);
            if page > total_pages {
                break;
            }
        }

        features
    }

    fn get(&self, key: &str) -> Option<D::Output> {
        let item = self.options.item();
        let response = self
            .client
            .call(item.operation_id(), &item.params_for_key(key));

        match response {
            Response::Resource(data) => self
                .denormalizer
                .denormalize(&data)
                .map_err(|e| warn!("Cannot read feature '{key}': {e}"))
                .ok(),
            Response::Collection { .. } => {
                warn!(
                    "Operation '{}' returned a collection for feature '{key}'",
                    item.operation_id()
                );
                None
            }
            Response::Error(e) => {
                warn!("Feature '{key}' not available: {e}");
                None
            }
        }
    }
}
