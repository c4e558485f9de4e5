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

use super::{Params, Response};

/// A client able to invoke remote operations identified by an operation id.
///
/// Calls are blocking. Any failure (transport, status code, payload) must be
/// reported as [`Response::Error`], never as a panic.
pub trait ApiService: std::fmt::Debug + Send + Sync {
    fn call(&self, operation_id: &str, params: &Params) -> Response;
}

