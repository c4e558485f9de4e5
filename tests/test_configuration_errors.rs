mod common;

use common::{http_client, options_json};
use featureflag_apiservice::{
    ConfigurationErrorKind, Error, FeatureStorageFactory, RawOptions, StorageFactory,
};
use httpmock::MockServer;
use serde_json::json;

fn create_storage_error(options: RawOptions) -> Error {
    match FeatureStorageFactory::default().create_storage("default", options) {
        Ok(_) => panic!("storage should not have been created"),
        Err(e) => e,
    }
}

#[test]
fn test_options_without_client() {
    let options = RawOptions::from_json(options_json()).unwrap();

    let error = create_storage_error(options);

    assert!(matches!(
        error,
        Error::ConfigurationError(ref e)
            if e.kind == ConfigurationErrorKind::MissingOption { path: "client".into() }
    ));
}

#[test]
fn test_options_from_file_with_client() {
    let server = MockServer::start();
    let options = RawOptions::from_json(options_json())
        .unwrap()
        .with_client(http_client(&server));

    assert!(FeatureStorageFactory::default()
        .create_storage("default", options)
        .is_ok());
}

#[test]
fn test_error_message() {
    let server = MockServer::start();
    let options = RawOptions::new()
        .with_client(http_client(&server))
        .with("collection", json!({"operationId": "getFeatureCollection"}))
        .with(
            "item",
            json!({"operationId": "getFeatureItem", "mapper": {"identifier": "slug"}, "params": "bar"}),
        );

    let error = create_storage_error(options);

    assert_eq!(
        error.to_string(),
        "Error while configuring storage 'default'. The option \"item[params]\" with value \"bar\" is expected to be of type \"array\", but is of type \"string\"."
    );
}
