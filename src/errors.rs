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

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    ConfigurationError(#[from] ConfigurationError),

    #[error(transparent)]
    DeserializationError(#[from] DeserializationError),
}

/// A storage could not be created from the options given to the factory.
///
/// These errors are only raised while building a storage. Once a storage
/// exists, its read operations never fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Error while configuring storage '{storage_name}'. {kind}")]
pub struct ConfigurationError {
    pub storage_name: String,
    pub kind: ConfigurationErrorKind,
}

impl ConfigurationError {
    /// The option path (`collection[mapper][page]`) the error refers to.
    pub fn path(&self) -> &str {
        match &self.kind {
            ConfigurationErrorKind::MissingOption { path } => path,
            ConfigurationErrorKind::InvalidType { path, .. } => path,
            ConfigurationErrorKind::UndefinedOption { path } => path,
        }
    }
}

/// Additional information for [`ConfigurationError`] error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationErrorKind {
    #[error("The required option \"{path}\" is missing.")]
    MissingOption { path: String },

    #[error("The option \"{path}\" with value {value} is expected to be of type \"{expected}\", but is of type \"{actual}\".")]
    InvalidType {
        path: String,
        expected: String,
        actual: String,
        value: String,
    },

    #[error("The option \"{path}\" does not exist.")]
    UndefinedOption { path: String },
}

/// An error that can be returned when deserializing data.
#[derive(Debug, Error)]
#[error("Cannot deserialize '{string}': {source}")]
pub struct DeserializationError {
    pub string: String,
    pub source: DeserializationErrorKind,
}

/// Additional information for [`DeserializationError`] error
#[derive(Debug, Error)]
pub enum DeserializationErrorKind {
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_option_message() {
        let error = ConfigurationError {
            storage_name: "default".to_string(),
            kind: ConfigurationErrorKind::MissingOption {
                path: "collection[operationId]".to_string(),
            },
        };
        assert_eq!(
            error.to_string(),
            "Error while configuring storage 'default'. The required option \"collection[operationId]\" is missing."
        );
        assert_eq!(error.path(), "collection[operationId]");
    }

    #[test]
    fn test_invalid_type_message() {
        let error = ConfigurationError {
            storage_name: "default".to_string(),
            kind: ConfigurationErrorKind::InvalidType {
                path: "collection[params]".to_string(),
                expected: "array".to_string(),
                actual: "string".to_string(),
                value: "\"bar\"".to_string(),
            },
        };
        assert_eq!(
            error.to_string(),
            "Error while configuring storage 'default'. The option \"collection[params]\" with value \"bar\" is expected to be of type \"array\", but is of type \"string\"."
        );
    }

    #[test]
    fn test_configuration_error_is_transparent() {
        let error: Error = ConfigurationError {
            storage_name: "default".to_string(),
            kind: ConfigurationErrorKind::MissingOption {
                path: "client".to_string(),
            },
        }
        .into();
        assert!(matches!(error, Error::ConfigurationError(_)));
        assert_eq!(
            error.to_string(),
            "Error while configuring storage 'default'. The required option \"client\" is missing."
        );
    }
}
