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

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use crate::network::{ApiService, Params, Response};

/// An [`ApiService`] answering with canned responses and recording every call.
///
/// Responses are returned in the order they were added. Once they are
/// exhausted every call gets a [`Response::Error`].
#[derive(Debug, Default)]
pub struct MockApiService {
    responses: Mutex<VecDeque<Response>>,
    calls: Mutex<Vec<(String, Params)>>,
}

impl MockApiService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, response: Response) -> Self {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(response);
        self
    }

    /// The `(operation_id, params)` of every call received so far.
    pub fn calls(&self) -> Vec<(String, Params)> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ApiService for MockApiService {
    fn call(&self, operation_id: &str, params: &Params) -> Response {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((operation_id.to_string(), params.clone()));
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Response::Error("no response left in mock".to_string()))
    }
}
