use eyre::Result;
use futures::future::join_all;
use reqwest::{header::CONTENT_TYPE, StatusCode};
use webhook_listener::config::ListenerConfig;
use wl_tests::{utils::local_config, TestListener};

#[tokio::test]
async fn test_ping_event_is_echoed() -> Result<()> {
    let listener = TestListener::start_default().await?;
    let client = reqwest::Client::new();

    let resp = client
        .post(listener.url("/webhook"))
        .header(CONTENT_TYPE, "application/json")
        .body(r#"{"event":"ping"}"#)
        .send()
        .await?;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[CONTENT_TYPE], "application/json");
    assert_eq!(
        resp.text().await?,
        r#"{"status":"success","message":"Webhook received successfully","data":"{\"event\":\"ping\"}"}"#
    );

    listener.shutdown().await
}

#[tokio::test]
async fn test_empty_body_is_echoed() -> Result<()> {
    let listener = TestListener::start_default().await?;

    let resp = reqwest::Client::new().post(listener.url("/webhook")).send().await?;

    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value = resp.json().await?;
    assert_eq!(json["status"], "success");
    assert_eq!(json["message"], "Webhook received successfully");
    assert_eq!(json["data"], "");

    listener.shutdown().await
}

#[tokio::test]
async fn test_malformed_json_is_not_parsed() -> Result<()> {
    let listener = TestListener::start_default().await?;
    let client = reqwest::Client::new();

    for body in [r#"{"event": "ping""#, "plain text", "<xml/>", "\u{1F980} \t\n\\\"", "null"] {
        let resp = client
            .post(listener.url("/webhook"))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        assert_eq!(resp.status(), StatusCode::OK, "body {body:?} was rejected");
        let json: serde_json::Value = resp.json().await?;
        assert_eq!(json["data"], body);
    }

    listener.shutdown().await
}

#[tokio::test]
async fn test_large_body_echoed_without_default_limit() -> Result<()> {
    let listener = TestListener::start_default().await?;
    // Larger than axum's built-in 2MB default
    let body = "x".repeat(5 * 1024 * 1024);

    let resp =
        reqwest::Client::new().post(listener.url("/webhook")).body(body.clone()).send().await?;

    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value = resp.json().await?;
    assert_eq!(json["data"].as_str().map(str::len), Some(body.len()));
    assert_eq!(json["data"], body.as_str());

    listener.shutdown().await
}

#[tokio::test]
async fn test_repeated_posts_are_idempotent() -> Result<()> {
    let listener = TestListener::start_default().await?;
    let client = reqwest::Client::new();

    let mut responses = Vec::new();
    for _ in 0..3 {
        let resp = client.post(listener.url("/webhook")).body("same payload").send().await?;
        assert_eq!(resp.status(), StatusCode::OK);
        responses.push(resp.text().await?);
    }

    assert!(responses.windows(2).all(|pair| pair[0] == pair[1]));

    listener.shutdown().await
}

#[tokio::test]
async fn test_concurrent_posts_do_not_cross_contaminate() -> Result<()> {
    let listener = TestListener::start_default().await?;
    let client = reqwest::Client::new();

    let requests = (0..32).map(|i| {
        let client = client.clone();
        let url = listener.url("/webhook");
        async move {
            let body = format!(r#"{{"delivery":{i}}}"#);
            let resp = client.post(url).body(body.clone()).send().await?;
            let json: serde_json::Value = resp.json().await?;
            Ok::<_, reqwest::Error>((body, json))
        }
    });

    for result in join_all(requests).await {
        let (sent, json) = result?;
        assert_eq!(json["data"], sent.as_str());
    }

    listener.shutdown().await
}

#[tokio::test]
async fn test_invalid_utf8_body_returns_error_ack() -> Result<()> {
    let listener = TestListener::start_default().await?;

    let resp = reqwest::Client::new()
        .post(listener.url("/webhook"))
        .body(vec![0x7b, 0xff, 0xfe, 0x7d])
        .send()
        .await?;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.headers()[CONTENT_TYPE], "application/json");

    let json: serde_json::Value = resp.json().await?;
    assert_eq!(json["status"], "error");
    assert!(json["message"].as_str().is_some_and(|m| m.contains("UTF-8")));
    assert!(json.get("data").is_none());

    listener.shutdown().await
}

#[tokio::test]
async fn test_body_over_cap_returns_error_ack() -> Result<()> {
    let listener =
        TestListener::start(ListenerConfig { max_body_bytes: Some(16), ..local_config() }).await?;
    let client = reqwest::Client::new();

    let resp = client.post(listener.url("/webhook")).body("a".repeat(64)).send().await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json: serde_json::Value = resp.json().await?;
    assert_eq!(json["status"], "error");
    assert!(json["message"].as_str().is_some_and(|m| m.contains("body")));

    // At the cap is still fine
    let resp = client.post(listener.url("/webhook")).body("b".repeat(16)).send().await?;
    assert_eq!(resp.status(), StatusCode::OK);

    listener.shutdown().await
}

#[tokio::test]
async fn test_hidden_fault_details() -> Result<()> {
    let listener =
        TestListener::start(ListenerConfig { expose_fault_details: false, ..local_config() })
            .await?;

    let resp =
        reqwest::Client::new().post(listener.url("/webhook")).body(vec![0xc3, 0x28]).send().await?;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.text().await?, r#"{"status":"error","message":"Failed to read request body"}"#);

    listener.shutdown().await
}

#[tokio::test]
async fn test_failed_request_does_not_affect_next_one() -> Result<()> {
    let listener = TestListener::start_default().await?;
    let client = reqwest::Client::new();

    let resp = client.post(listener.url("/webhook")).body(vec![0xff]).send().await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = client.post(listener.url("/webhook")).body("ok").send().await?;
    assert_eq!(resp.status(), StatusCode::OK);

    listener.shutdown().await
}
