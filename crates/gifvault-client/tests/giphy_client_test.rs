//! Integration tests for `GiphyClient` against a stubbed provider.

use gifvault_client::{CachedGifClient, GifProvider, GiphyClient, MemoryCache};
use gifvault_config::GiphyConfig;
use gifvault_core::{GifFilter, GifId, GifVaultError, Pagination};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> GiphyConfig {
    GiphyConfig {
        api_url: server.uri(),
        api_key: "test-api-key".to_string(),
        timeout_secs: 5,
    }
}

fn gif_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "url": format!("https://giphy.com/gifs/{}", id),
        "title": "Batman Eye Roll GIF",
        "images": {
            "original_still": {"url": "https://i.giphy.com/o.gif", "width": "480", "height": "270"},
            "fixed_width": {"url": "https://i.giphy.com/w.gif", "width": "200", "height": "113"},
            "fixed_height": {"url": "https://i.giphy.com/h.gif", "width": "356", "height": "200"}
        }
    })
}

#[tokio::test]
async fn search_maps_items_and_pagination() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "batman"))
        .and(query_param("limit", "10"))
        .and(query_param("offset", "1"))
        .and(query_param("api_key", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [gif_json("id-one"), gif_json("id-two")],
            "pagination": {"total_count": 57, "count": 2, "offset": 1},
            "meta": {"status": 200, "msg": "OK"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GiphyClient::new(&config_for(&server)).unwrap();
    let page = client.search(&GifFilter::new("batman", 10, 1)).await.unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page.gifs[0].id.as_str(), "id-one");
    assert_eq!(page.gifs[0].images.fixed_height.width, "356");
    assert_eq!(page.pagination, Pagination::new(57, 2, 1));
}

#[tokio::test]
async fn search_without_results_or_pagination_yields_zeroed_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "nonexistentkeyword"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "meta": {"status": 200, "msg": "OK"}
        })))
        .mount(&server)
        .await;

    let client = GiphyClient::new(&config_for(&server)).unwrap();
    let page = client
        .search(&GifFilter::new("nonexistentkeyword", 10, 0))
        .await
        .unwrap();

    assert!(page.is_empty());
    assert_eq!(page.pagination, Pagination::new(0, 0, 0));
}

#[tokio::test]
async fn provider_error_carries_upstream_message_and_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "meta": {"status": 429, "msg": "API rate limit exceeded"}
        })))
        .mount(&server)
        .await;

    let client = GiphyClient::new(&config_for(&server)).unwrap();
    let err = client
        .search(&GifFilter::new("batman", 10, 0))
        .await
        .unwrap_err();

    match err {
        GifVaultError::Provider { message, status_code } => {
            assert_eq!(message, "API rate limit exceeded");
            assert_eq!(status_code, 429);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn validation_error_message_forces_422() {
    let server = MockServer::start().await;

    // The provider has been observed sending this message with a 500.
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "meta": {"status": 500, "msg": "Validation error"}
        })))
        .mount(&server)
        .await;

    let client = GiphyClient::new(&config_for(&server)).unwrap();
    let err = client
        .search(&GifFilter::new("batman", 10, 0))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 422);
}

#[tokio::test]
async fn error_body_without_meta_msg_falls_back_to_unknown() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let client = GiphyClient::new(&config_for(&server)).unwrap();
    let err = client
        .search(&GifFilter::new("batman", 10, 0))
        .await
        .unwrap_err();

    match err {
        GifVaultError::Provider { message, status_code } => {
            assert_eq!(message, "Unknown error");
            assert_eq!(status_code, 503);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn lookup_maps_single_gif() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/abc123"))
        .and(query_param("api_key", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": gif_json("abc123"),
            "meta": {"status": 200, "msg": "OK"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GiphyClient::new(&config_for(&server)).unwrap();
    let gif = client.get_by_id(&GifId::new("abc123")).await.unwrap();

    assert_eq!(gif.id.as_str(), "abc123");
    assert_eq!(gif.images.original.url, "https://i.giphy.com/o.gif");
}

#[tokio::test]
async fn lookup_with_missing_rendition_is_a_mapping_error() {
    let server = MockServer::start().await;

    let mut body = gif_json("abc123");
    body["images"].as_object_mut().unwrap().remove("fixed_width");

    Mock::given(method("GET"))
        .and(path("/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": body,
            "meta": {"status": 200, "msg": "OK"}
        })))
        .mount(&server)
        .await;

    let client = GiphyClient::new(&config_for(&server)).unwrap();
    let err = client.get_by_id(&GifId::new("abc123")).await.unwrap_err();

    assert!(matches!(err, GifVaultError::Mapping(_)));
}

#[tokio::test]
async fn cached_client_calls_provider_once_within_freshness_window() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "batman"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [gif_json("id-one")],
            "pagination": {"total_count": 1, "count": 1, "offset": 0},
            "meta": {"status": 200, "msg": "OK"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let inner = Arc::new(GiphyClient::new(&config_for(&server)).unwrap());
    let client = CachedGifClient::new(inner, Arc::new(MemoryCache::new()));
    let filter = GifFilter::new("batman", 10, 0);

    let first = client.search(&filter).await.unwrap();
    let second = client.search(&filter).await.unwrap();

    // The mock's expect(1) verifies the second response came from the cache.
    assert_eq!(first, second);
}

#[tokio::test]
async fn cached_client_does_not_cache_provider_failures() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "meta": {"status": 503, "msg": "Service unavailable"}
        })))
        .expect(2)
        .mount(&server)
        .await;

    let inner = Arc::new(GiphyClient::new(&config_for(&server)).unwrap());
    let client = CachedGifClient::new(inner, Arc::new(MemoryCache::new()));
    let filter = GifFilter::new("batman", 10, 0);

    // Both calls must reach the provider: the failure left no cache entry.
    assert!(client.search(&filter).await.is_err());
    assert!(client.search(&filter).await.is_err());
}
