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

mod api_service_storage;

pub use api_service_storage::ApiServiceStorage;

/// Read access to a set of feature flags.
///
/// Reads never fail: when the flags cannot be retrieved the storage answers
/// with an empty list or no feature at all.
pub trait Storage: Send + Sync {
    type Feature;

    /// Returns every feature, or none at all if any of them could not be
    /// retrieved.
    fn all(&self) -> Vec<Self::Feature>;

    /// Returns the feature identified by `key`.
    fn get(&self, key: &str) -> Option<Self::Feature>;
}
