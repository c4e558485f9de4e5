use std::sync::Arc;

use featureflag_apiservice::{
    ApiService, ApiServiceHttp, Feature, FeatureStorageFactory, Operation, OperationRegistry,
    RawOptions, ServiceAddress, Storage, StorageFactory,
};
use httpmock::MockServer;

pub fn http_client(server: &MockServer) -> Arc<dyn ApiService> {
    let operations = OperationRegistry::new()
        .with_operation("getFeatureCollection", Operation::get("/features"))
        .with_operation("getFeatureItem", Operation::get("/features/{uuid}"));
    Arc::new(ApiServiceHttp::new(
        ServiceAddress::new_without_ssl(server.host(), Some(server.port()), Some("api".into())),
        operations,
    ))
}

/// Storage options as they would be read from the host configuration file.
pub fn options_json() -> &'static str {
    r#"{
        "collection": {
            "operationId": "getFeatureCollection",
            "mapper": {"page": "page"},
            "params": {"itemsPerPage": 1}
        },
        "item": {
            "operationId": "getFeatureItem",
            "mapper": {"identifier": "uuid"},
            "params": {"x-uuid": "foo"}
        }
    }"#
}

pub fn create_storage(server: &MockServer) -> Box<dyn Storage<Feature = Feature>> {
    let options = RawOptions::from_json(options_json())
        .unwrap()
        .with_client(http_client(server));
    FeatureStorageFactory::default()
        .create_storage("default", options)
        .unwrap()
}
