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

use std::{env, sync::Arc};

use dotenvy::dotenv;
use featureflag_apiservice::{
    ApiServiceHttp, FeatureStorageFactory, Operation, OperationRegistry, RawOptions,
    ServiceAddress, StaticTokenProvider, StorageFactory,
};
use serde_json::json;
use std::error::Error;

fn main() -> std::result::Result<(), Box<dyn Error>> {
    dotenv().ok();
    let host = env::var("HOST").expect("HOST should be set.");
    let endpoint = env::var("ENDPOINT").ok();
    let collection_path = env::var("COLLECTION_PATH").unwrap_or("/features".to_string());
    let item_path = env::var("ITEM_PATH").unwrap_or("/features/{key}".to_string());
    let feature_key = env::var("FEATURE_KEY").expect("FEATURE_KEY should be set.");

    let operations = OperationRegistry::new()
        .with_operation("getFeatureCollection", Operation::get(&collection_path))
        .with_operation("getFeatureItem", Operation::get(&item_path));
    let mut client = ApiServiceHttp::new(ServiceAddress::new(host, None, endpoint), operations);
    if let Ok(token) = env::var("TOKEN") {
        client = client.with_token_provider(Box::new(StaticTokenProvider::new(&token)));
    }

    let options = RawOptions::new()
        .with_client(Arc::new(client))
        .with(
            "collection",
            json!({"operationId": "getFeatureCollection", "params": {"itemsPerPage": 50}}),
        )
        .with(
            "item",
            json!({"operationId": "getFeatureItem", "mapper": {"identifier": "key"}}),
        );
    let storage = FeatureStorageFactory::default().create_storage("demo", options)?;

    println!("All features:");
    for feature in storage.all() {
        println!("  {}: {}", feature.key(), feature.is_enabled());
    }

    match storage.get(&feature_key) {
        Some(feature) => println!("Feature '{}' enabled: {}", feature.key(), feature.is_enabled()),
        None => println!("Feature '{feature_key}' is not available"),
    }

    Ok(())
}
