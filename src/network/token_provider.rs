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

use super::NetworkResult;

/// Provides the bearer token sent with every request of an
/// [`ApiServiceHttp`](crate::ApiServiceHttp).
pub trait TokenProvider: std::fmt::Debug + Send + Sync {
    fn get_access_token(&self) -> NetworkResult<String>;
}

/// A token known in advance, typically read from the environment.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
        }
    }
}

impl TokenProvider for StaticTokenProvider {
    fn get_access_token(&self) -> NetworkResult<String> {
        Ok(self.token.clone())
    }
}
