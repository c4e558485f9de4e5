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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A feature flag as served by the remote API.
///
/// The key is read from `key`, then `name`, then `title`, whichever comes
/// first. The expiration date is read from `expiresAt`, then `expiredAt`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", try_from = "FeatureJson")]
pub struct Feature {
    key: String,
    enabled: bool,
    description: Option<String>,
    expires_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FeatureJson {
    key: Option<String>,
    name: Option<String>,
    title: Option<String>,
    #[serde(default)]
    enabled: bool,
    description: Option<String>,
    expires_at: Option<DateTime<Utc>>,
    expired_at: Option<DateTime<Utc>>,
}

impl TryFrom<FeatureJson> for Feature {
    type Error = String;

    fn try_from(value: FeatureJson) -> Result<Self, Self::Error> {
        let key = value
            .key
            .or(value.name)
            .or(value.title)
            .ok_or_else(|| "missing field `key`".to_string())?;
        Ok(Self {
            key,
            enabled: value.enabled,
            description: value.description,
            expires_at: value.expires_at.or(value.expired_at),
        })
    }
}

impl Feature {
    pub fn new(key: &str, enabled: bool) -> Self {
        Self {
            key: key.to_string(),
            enabled,
            description: None,
            expires_at: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_expiration(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Whether the flag is switched on right now.
    pub fn is_enabled(&self) -> bool {
        self.is_enabled_at(Utc::now())
    }

    /// Whether the flag is switched on at `now`. An expired flag is always off.
    pub fn is_enabled_at(&self, now: DateTime<Utc>) -> bool {
        self.enabled && self.expires_at.map_or(true, |expires_at| now < expires_at)
    }
}
