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

use serde::{Deserialize, Serialize};

/// Parameters sent along with an operation call.
pub type Params = serde_json::Map<String, serde_json::Value>;

/// Result of a single call to an [`ApiService`](crate::ApiService).
///
/// Exactly one variant is produced per call and it is consumed right away by
/// the storage.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// A list of raw items, optionally paginated.
    Collection {
        items: Vec<serde_json::Value>,
        pagination: Option<Pagination>,
    },

    /// A single raw item.
    Resource(serde_json::Value),

    /// The call failed. The message is only meant for diagnostics.
    Error(String),
}

impl Response {
    pub fn collection(items: Vec<serde_json::Value>) -> Self {
        Response::Collection {
            items,
            pagination: None,
        }
    }

    pub fn paginated(items: Vec<serde_json::Value>, pagination: Pagination) -> Self {
        Response::Collection {
            items,
            pagination: Some(pagination),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u64,
    pub items_per_page: u64,
    #[serde(alias = "itemsTotal")]
    pub total_items: u64,
    pub total_pages: u64,
}

impl Pagination {
    pub fn new(current_page: u64, items_per_page: u64, total_items: u64, total_pages: u64) -> Self {
        Self {
            current_page,
            items_per_page,
            total_items,
            total_pages,
        }
    }

    /// Builds the pagination when the server only reports the number of items.
    pub fn from_total_items(current_page: u64, items_per_page: u64, total_items: u64) -> Self {
        let total_pages = if items_per_page == 0 {
            1
        } else {
            total_items.div_ceil(items_per_page)
        };
        Self::new(current_page, items_per_page, total_items, total_pages)
    }
}
