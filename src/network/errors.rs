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

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),

    #[error("Protocol error. Unexpected data received from server: {0}")]
    ProtocolError(String),

    #[error("Cannot parse '{0}' as URL")]
    UrlParseError(String),

    #[error("Operation '{0}' is not registered")]
    UnknownOperation(String),

    #[error("Missing value for path parameter '{0}'")]
    MissingPathParameter(String),

    #[error("Server answered with status {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    /// Returned by [`TokenProvider`](crate::TokenProvider) implementations
    /// that fail to obtain a token. The call then yields an error response.
    #[error("Cannot get access token: {0}")]
    TokenError(String),
}
