// (C) Copyright IBM Corp. 2025.
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

//! Conversion of the raw payloads returned by the API into domain models.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::errors::DeserializationError;

/// Turns a raw payload into a domain object.
pub trait Denormalizer: Send + Sync {
    type Output;

    fn denormalize(&self, data: &serde_json::Value) -> Result<Self::Output, DeserializationError>;
}

/// [`Denormalizer`] for any type implementing [`serde::Deserialize`].
pub struct SerdeDenormalizer<T> {
    _target: PhantomData<fn() -> T>,
}

impl<T> SerdeDenormalizer<T> {
    pub fn new() -> Self {
        Self {
            _target: PhantomData,
        }
    }
}

impl<T> Default for SerdeDenormalizer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for SerdeDenormalizer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SerdeDenormalizer<{}>", std::any::type_name::<T>())
    }
}

impl<T: DeserializeOwned> Denormalizer for SerdeDenormalizer<T> {
    type Output = T;

    fn denormalize(&self, data: &serde_json::Value) -> Result<T, DeserializationError> {
        T::deserialize(data).map_err(|e| DeserializationError {
            string: format!("{data} as {}", std::any::type_name::<T>()),
            source: e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Feature;
    use serde_json::json;

    #[test]
    fn test_denormalize_feature() {
        let denormalizer = SerdeDenormalizer::<Feature>::new();
        let feature = denormalizer
            .denormalize(&json!({"title": "Lorem Ipsum", "enabled": true}))
            .unwrap();
        assert_eq!(feature, Feature::new("Lorem Ipsum", true));
    }

    #[test]
    fn test_denormalize_invalid_payload() {
        let denormalizer = SerdeDenormalizer::<Feature>::new();
        let error = denormalizer
            .denormalize(&json!({"enabled": "yes"}))
            .unwrap_err();
        assert!(error.to_string().starts_with("Cannot deserialize '{\"enabled\":\"yes\"} as "));
    }
}
