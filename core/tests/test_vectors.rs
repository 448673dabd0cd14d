//! Drive the loader with canned transport outcomes from `test-vectors/load.json`.
//!
//! Each case names a simulated transport outcome (either `"failure"` or a
//! status/body pair) and the expected load result. Expected items are
//! compared as parsed values so field ordering in the file does not matter.

use std::sync::{mpsc, Arc};

use feed_core::{
    FeedItem, FeedLoader, HttpClient, HttpClientResult, HttpCompletion, HttpResponse,
    LoaderError, RemoteFeedLoader, TransportError,
};
use url::Url;
use uuid::Uuid;

const ENDPOINT: &str = "https://a-url.com/feed";

/// Replays one canned outcome from a separate thread.
struct CannedClient {
    outcome: HttpClientResult,
}

impl HttpClient for CannedClient {
    fn get(&self, _url: &Url, completion: HttpCompletion) {
        let outcome = self.outcome.clone();
        std::thread::spawn(move || completion(outcome));
    }
}

fn simulated_outcome(sim: &serde_json::Value) -> HttpClientResult {
    if sim.as_str() == Some("failure") {
        return HttpClientResult::Failure(TransportError::new("simulated"));
    }
    HttpClientResult::Success(HttpResponse {
        url: Url::parse(ENDPOINT).unwrap(),
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().as_bytes().to_vec(),
    })
}

fn expected_item(value: &serde_json::Value) -> FeedItem {
    FeedItem {
        id: Uuid::parse_str(value["id"].as_str().unwrap()).unwrap(),
        description: value["description"].as_str().map(str::to_string),
        location: value["location"].as_str().map(str::to_string),
        image_url: Url::parse(value["image_url"].as_str().unwrap()).unwrap(),
    }
}

#[test]
fn load_test_vectors() {
    let raw = include_str!("../../test-vectors/load.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let client = Arc::new(CannedClient {
            outcome: simulated_outcome(&case["simulated_response"]),
        });
        let sut = RemoteFeedLoader::from_endpoint(ENDPOINT, client).unwrap();

        let (tx, rx) = mpsc::channel();
        sut.load(Box::new(move |result| tx.send(result).unwrap()));
        let result = rx.recv().unwrap();
        assert!(rx.recv().is_err(), "{name}: delivered more than once");

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "Connectivity" => assert_eq!(err, LoaderError::Connectivity, "{name}"),
                "InvalidData" => assert_eq!(err, LoaderError::InvalidData, "{name}"),
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        } else {
            let items = result.unwrap();
            let expected: Vec<FeedItem> = case["expected_result"]
                .as_array()
                .unwrap()
                .iter()
                .map(expected_item)
                .collect();
            assert_eq!(items, expected, "{name}: parsed result");
        }
    }
}
