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

use crate::network::Params;

pub const DEFAULT_PAGE_PARAMETER: &str = "page";

/// Validated options of a storage. Built by
/// [`validate_options`](crate::config::validate_options), never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionDescriptor {
    pub(crate) collection: CollectionOptions,
    pub(crate) item: ItemOptions,
}

impl ConnectionDescriptor {
    pub fn collection(&self) -> &CollectionOptions {
        &self.collection
    }

    pub fn item(&self) -> &ItemOptions {
        &self.item
    }
}

/// How the whole list of features is fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionOptions {
    pub(crate) operation_id: String,
    pub(crate) page_parameter: String,
    pub(crate) params: Params,
}

impl CollectionOptions {
    pub fn operation_id(&self) -> &str {
        &self.operation_id
    }

    /// Name of the parameter carrying the page number.
    pub fn page_parameter(&self) -> &str {
        &self.page_parameter
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Parameters for the request of `page`. The page number wins over a
    /// static parameter with the same name.
    pub(crate) fn params_for_page(&self, page: u64) -> Params {
        let mut params = self.params.clone();
        params.insert(self.page_parameter.clone(), page.into());
        params
    }
}

/// How a single feature is fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemOptions {
    pub(crate) operation_id: String,
    pub(crate) identifier_parameter: String,
    pub(crate) params: Params,
}

impl ItemOptions {
    pub fn operation_id(&self) -> &str {
        &self.operation_id
    }

    /// Name of the parameter carrying the feature key.
    pub fn identifier_parameter(&self) -> &str {
        &self.identifier_parameter
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub(crate) fn params_for_key(&self, key: &str) -> Params {
        let mut params = self.params.clone();
        params.insert(self.identifier_parameter.clone(), key.into());
        params
    }
}
