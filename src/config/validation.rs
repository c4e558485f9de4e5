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

use std::sync::Arc;

use log::debug;

use super::descriptor::{
    CollectionOptions, ConnectionDescriptor, ItemOptions, DEFAULT_PAGE_PARAMETER,
};
use super::options::{json_type_name, OptionValue, RawOptions};
use crate::errors::{ConfigurationError, ConfigurationErrorKind};
use crate::network::{ApiService, Params};

type ValidationResult<T> = std::result::Result<T, ConfigurationError>;

/// Checks `options` and turns them into a [`ConnectionDescriptor`].
///
/// The client is taken out of the options and returned next to the
/// descriptor. Validation stops at the first invalid option. Options are
/// checked in this order: `client`, then `collection` (`operationId`,
/// `mapper`, `params`), then `item` (`operationId`, `mapper`, `params`).
pub fn validate_options(
    storage_name: &str,
    mut options: RawOptions,
) -> std::result::Result<(Arc<dyn ApiService>, ConnectionDescriptor), ConfigurationError> {
    let client = match options.remove("client") {
        Some(OptionValue::Client(client)) => client,
        Some(other) => return Err(invalid_type(storage_name, "client", "ApiService", &other)),
        None => return Err(missing(storage_name, "client".to_string())),
    };

    let collection =
        validate_collection(Section::top_level(storage_name, &options, "collection")?)?;
    let item = validate_item(Section::top_level(storage_name, &options, "item")?)?;

    if let Some(name) = options
        .keys()
        .find(|name| !["collection", "item"].contains(&name.as_str()))
    {
        return Err(error(
            storage_name,
            ConfigurationErrorKind::UndefinedOption { path: name.clone() },
        ));
    }

    debug!(
        "Storage '{storage_name}' configured with operations '{}' and '{}'",
        collection.operation_id, item.operation_id
    );
    Ok((client, ConnectionDescriptor { collection, item }))
}

fn validate_collection(section: Section<'_>) -> ValidationResult<CollectionOptions> {
    let operation_id = section.required_string("operationId")?;

    let mapper = section.subsection("mapper")?;
    let page_parameter = mapper.optional_string("page", DEFAULT_PAGE_PARAMETER)?;
    mapper.deny_unknown(&["page"])?;

    let params = section.params()?;
    section.deny_unknown(&["operationId", "mapper", "params"])?;

    Ok(CollectionOptions {
        operation_id,
        page_parameter,
        params,
    })
}

fn validate_item(section: Section<'_>) -> ValidationResult<ItemOptions> {
    let operation_id = section.required_string("operationId")?;

    let mapper = section.subsection("mapper")?;
    let identifier_parameter = mapper.required_string("identifier")?;
    mapper.deny_unknown(&["identifier"])?;

    let params = section.params()?;
    section.deny_unknown(&["operationId", "mapper", "params"])?;

    Ok(ItemOptions {
        operation_id,
        identifier_parameter,
        params,
    })
}

fn error(storage_name: &str, kind: ConfigurationErrorKind) -> ConfigurationError {
    ConfigurationError {
        storage_name: storage_name.to_string(),
        kind,
    }
}

fn missing(storage_name: &str, path: String) -> ConfigurationError {
    error(storage_name, ConfigurationErrorKind::MissingOption { path })
}

fn invalid_type(
    storage_name: &str,
    path: &str,
    expected: &str,
    value: &OptionValue,
) -> ConfigurationError {
    error(
        storage_name,
        ConfigurationErrorKind::InvalidType {
            path: path.to_string(),
            expected: expected.to_string(),
            actual: value.type_name().to_string(),
            value: value.describe(),
        },
    )
}

/// A mapping of options, addressed as `collection[mapper]`.
///
/// A section that was not configured at all reads as an empty one, so its
/// required options are reported as missing.
struct Section<'a> {
    storage_name: &'a str,
    path: String,
    entries: Option<&'a serde_json::Map<String, serde_json::Value>>,
}

impl<'a> Section<'a> {
    fn top_level(
        storage_name: &'a str,
        options: &'a RawOptions,
        name: &str,
    ) -> ValidationResult<Self> {
        let entries = match options.get(name) {
            None => None,
            Some(OptionValue::Value(serde_json::Value::Object(map))) => Some(map),
            Some(other) => return Err(invalid_type(storage_name, name, "array", other)),
        };
        Ok(Self {
            storage_name,
            path: name.to_string(),
            entries,
        })
    }

    fn path_of(&self, name: &str) -> String {
        format!("{}[{name}]", self.path)
    }

    fn get(&self, name: &str) -> Option<&'a serde_json::Value> {
        self.entries.and_then(|entries| entries.get(name))
    }

    fn invalid_type(
        &self,
        name: &str,
        expected: &str,
        value: &serde_json::Value,
    ) -> ConfigurationError {
        error(
            self.storage_name,
            ConfigurationErrorKind::InvalidType {
                path: self.path_of(name),
                expected: expected.to_string(),
                actual: json_type_name(value).to_string(),
                value: value.to_string(),
            },
        )
    }

    fn required_string(&self, name: &str) -> ValidationResult<String> {
        match self.get(name) {
            Some(serde_json::Value::String(value)) => Ok(value.clone()),
            Some(other) => Err(self.invalid_type(name, "string", other)),
            None => Err(missing(self.storage_name, self.path_of(name))),
        }
    }

    fn optional_string(&self, name: &str, default: &str) -> ValidationResult<String> {
        match self.get(name) {
            Some(serde_json::Value::String(value)) => Ok(value.clone()),
            Some(other) => Err(self.invalid_type(name, "string", other)),
            None => Ok(default.to_string()),
        }
    }

    fn subsection(&self, name: &str) -> ValidationResult<Section<'a>> {
        let entries = match self.get(name) {
            None => None,
            Some(serde_json::Value::Object(map)) => Some(map),
            Some(other) => return Err(self.invalid_type(name, "array", other)),
        };
        Ok(Section {
            storage_name: self.storage_name,
            path: self.path_of(name),
            entries,
        })
    }

    /// Static parameters merged into every request, empty by default.
    fn params(&self) -> ValidationResult<Params> {
        match self.get("params") {
            Some(serde_json::Value::Object(map)) => Ok(map.clone()),
            Some(other) => Err(self.invalid_type("params", "array", other)),
            None => Ok(Params::new()),
        }
    }

    fn deny_unknown(&self, known: &[&str]) -> ValidationResult<()> {
        let unknown = self
            .entries
            .and_then(|entries| entries.keys().find(|name| !known.contains(&name.as_str())));
        match unknown {
            Some(name) => Err(error(
                self.storage_name,
                ConfigurationErrorKind::UndefinedOption {
                    path: self.path_of(name),
                },
            )),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockApiService;
    use rstest::*;
    use serde_json::json;

    #[fixture]
    fn client() -> Arc<dyn ApiService> {
        Arc::new(MockApiService::new())
    }

    fn options(
        client: Arc<dyn ApiService>,
        collection: serde_json::Value,
        item: serde_json::Value,
    ) -> RawOptions {
        RawOptions::new()
            .with_client(client)
            .with("collection", collection)
            .with("item", item)
    }

    fn expect_error(options: RawOptions) -> ConfigurationError {
        match validate_options("default", options) {
            Ok(_) => panic!("validation was expected to fail"),
            Err(e) => e,
        }
    }

    #[rstest]
    fn test_minimal_options_use_defaults(client: Arc<dyn ApiService>) {
        let (_, descriptor) = validate_options(
            "default",
            options(
                client,
                json!({"operationId": "getFeatureCollection"}),
                json!({"operationId": "getFeatureItem", "mapper": {"identifier": "slug"}}),
            ),
        )
        .unwrap();

        assert_eq!(descriptor.collection().operation_id(), "getFeatureCollection");
        assert_eq!(descriptor.collection().page_parameter(), "page");
        assert!(descriptor.collection().params().is_empty());
        assert_eq!(descriptor.item().operation_id(), "getFeatureItem");
        assert_eq!(descriptor.item().identifier_parameter(), "slug");
        assert!(descriptor.item().params().is_empty());
    }

    #[rstest]
    fn test_full_options(client: Arc<dyn ApiService>) {
        let (_, descriptor) = validate_options(
            "default",
            options(
                client,
                json!({
                    "operationId": "getFeatureCollection",
                    "mapper": {"page": "p"},
                    "params": {"itemsPerPage": 1}
                }),
                json!({
                    "operationId": "getFeatureItem",
                    "mapper": {"identifier": "uuid"},
                    "params": {"x-uuid": "foo"}
                }),
            ),
        )
        .unwrap();

        assert_eq!(descriptor.collection().page_parameter(), "p");
        assert_eq!(descriptor.collection().params()["itemsPerPage"], 1);
        assert_eq!(descriptor.item().params()["x-uuid"], "foo");
    }

    #[rstest]
    fn test_missing_client() {
        let error = expect_error(
            RawOptions::new()
                .with("collection", json!({"operationId": "getFeatureCollection"}))
                .with(
                    "item",
                    json!({"operationId": "getFeatureItem", "mapper": {"identifier": "slug"}}),
                ),
        );
        assert_eq!(
            error.kind,
            ConfigurationErrorKind::MissingOption {
                path: "client".into()
            }
        );
        assert_eq!(error.storage_name, "default");
    }

    #[rstest]
    fn test_client_is_not_an_api_service() {
        let error = expect_error(
            RawOptions::new()
                .with("client", json!("api_service.api.default"))
                .with("collection", json!({"operationId": "getFeatureCollection"}))
                .with(
                    "item",
                    json!({"operationId": "getFeatureItem", "mapper": {"identifier": "slug"}}),
                ),
        );
        assert_eq!(
            error.to_string(),
            "Error while configuring storage 'default'. The option \"client\" with value \"api_service.api.default\" is expected to be of type \"ApiService\", but is of type \"string\"."
        );
    }

    #[rstest]
    fn test_missing_operation_ids(client: Arc<dyn ApiService>) {
        let error = expect_error(RawOptions::new().with_client(client));
        assert_eq!(
            error.to_string(),
            "Error while configuring storage 'default'. The required option \"collection[operationId]\" is missing."
        );
    }

    #[rstest]
    fn test_missing_item_operation_id(client: Arc<dyn ApiService>) {
        let error = expect_error(
            RawOptions::new()
                .with_client(client)
                .with("collection", json!({"operationId": "getFeatureCollection"})),
        );
        assert_eq!(
            error.kind,
            ConfigurationErrorKind::MissingOption {
                path: "item[operationId]".into()
            }
        );
    }

    #[rstest]
    fn test_missing_identifier(client: Arc<dyn ApiService>) {
        let error = expect_error(options(
            client,
            json!({"operationId": "getFeatureCollection"}),
            json!({"operationId": "getFeatureItem"}),
        ));
        assert_eq!(
            error.to_string(),
            "Error while configuring storage 'default'. The required option \"item[mapper][identifier]\" is missing."
        );
    }

    #[rstest]
    #[case::collection_operation_id(
        json!({"operationId": 813}),
        json!({"operationId": "getFeatureItem", "mapper": {"identifier": "slug"}}),
        "collection[operationId]", "string", "int", "813"
    )]
    #[case::collection_mapper_page(
        json!({"operationId": "getFeatureCollection", "mapper": {"page": 8}}),
        json!({"operationId": "getFeatureItem", "mapper": {"identifier": "slug"}}),
        "collection[mapper][page]", "string", "int", "8"
    )]
    #[case::collection_params(
        json!({"operationId": "getFeatureCollection", "params": "bar"}),
        json!({"operationId": "getFeatureItem", "mapper": {"identifier": "slug"}}),
        "collection[params]", "array", "string", "\"bar\""
    )]
    #[case::item_operation_id(
        json!({"operationId": "getFeatureCollection"}),
        json!({"operationId": 813, "mapper": {"identifier": "slug"}}),
        "item[operationId]", "string", "int", "813"
    )]
    #[case::item_mapper_identifier(
        json!({"operationId": "getFeatureCollection"}),
        json!({"operationId": "getFeatureItem", "mapper": {"identifier": 8}}),
        "item[mapper][identifier]", "string", "int", "8"
    )]
    #[case::item_params(
        json!({"operationId": "getFeatureCollection"}),
        json!({"operationId": "getFeatureItem", "mapper": {"identifier": "slug"}, "params": "bar"}),
        "item[params]", "array", "string", "\"bar\""
    )]
    #[case::item_params_list(
        json!({"operationId": "getFeatureCollection"}),
        json!({"operationId": "getFeatureItem", "mapper": {"identifier": "slug"}, "params": [1]}),
        "item[params]", "array", "list", "[1]"
    )]
    #[case::collection_not_a_mapping(
        json!("getFeatureCollection"),
        json!({"operationId": "getFeatureItem", "mapper": {"identifier": "slug"}}),
        "collection", "array", "string", "\"getFeatureCollection\""
    )]
    #[case::item_mapper_not_a_mapping(
        json!({"operationId": "getFeatureCollection"}),
        json!({"operationId": "getFeatureItem", "mapper": "slug"}),
        "item[mapper]", "array", "string", "\"slug\""
    )]
    fn test_invalid_types(
        client: Arc<dyn ApiService>,
        #[case] collection: serde_json::Value,
        #[case] item: serde_json::Value,
        #[case] path: &str,
        #[case] expected: &str,
        #[case] actual: &str,
        #[case] value: &str,
    ) {
        let error = expect_error(options(client, collection, item));
        assert_eq!(
            error.kind,
            ConfigurationErrorKind::InvalidType {
                path: path.into(),
                expected: expected.into(),
                actual: actual.into(),
                value: value.into(),
            }
        );
    }

    #[rstest]
    fn test_collection_error_reported_before_item_error(client: Arc<dyn ApiService>) {
        let error = expect_error(options(
            client,
            json!({"operationId": 1}),
            json!({"operationId": 2}),
        ));
        assert_eq!(error.path(), "collection[operationId]");
    }

    #[rstest]
    #[case::top_level(json!({"operationId": "getFeatureCollection"}), json!({"operationId": "getFeatureItem", "mapper": {"identifier": "slug"}}), Some("cache"), "cache")]
    #[case::section(json!({"operationId": "getFeatureCollection", "method": "GET"}), json!({"operationId": "getFeatureItem", "mapper": {"identifier": "slug"}}), None, "collection[method]")]
    #[case::mapper(json!({"operationId": "getFeatureCollection"}), json!({"operationId": "getFeatureItem", "mapper": {"identifier": "slug", "page": "p"}}), None, "item[mapper][page]")]
    fn test_undefined_options(
        client: Arc<dyn ApiService>,
        #[case] collection: serde_json::Value,
        #[case] item: serde_json::Value,
        #[case] extra: Option<&str>,
        #[case] path: &str,
    ) {
        let mut options = options(client, collection, item);
        if let Some(extra) = extra {
            options.insert(extra, json!(true));
        }
        let error = expect_error(options);
        assert_eq!(
            error.kind,
            ConfigurationErrorKind::UndefinedOption { path: path.into() }
        );
    }
}
