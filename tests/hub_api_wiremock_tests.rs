use hf_space_secrets::huggingface::HubClient;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HubClient {
    HubClient::new("hf_test_token".to_string(), server.uri()).unwrap()
}

#[tokio::test]
async fn test_set_space_secret_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/spaces/owner/space/secrets"))
        .and(header("authorization", "Bearer hf_test_token"))
        .and(body_json(serde_json::json!({
            "key": "JWT_SECRET",
            "value": "super-secret"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let res = client_for(&mock_server)
        .set_space_secret("owner/space", "JWT_SECRET", "super-secret")
        .await;
    assert!(res.is_ok(), "Expected success on 200 response: {:?}", res);
}

#[tokio::test]
async fn test_set_space_secret_hub_error_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/spaces/owner/space/secrets"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{"error":"Invalid credentials in Authorization header"}"#),
        )
        .mount(&mock_server)
        .await;

    let res = client_for(&mock_server)
        .set_space_secret("owner/space", "JWT_SECRET", "super-secret")
        .await;

    let msg = res.unwrap_err().to_string();
    assert_eq!(
        msg,
        "Hub API error (status 401): Invalid credentials in Authorization header"
    );
}

#[tokio::test]
async fn test_set_space_secret_plain_text_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/spaces/owner/space/secrets"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream unavailable"))
        .mount(&mock_server)
        .await;

    let msg = client_for(&mock_server)
        .set_space_secret("owner/space", "JWT_SECRET", "x")
        .await
        .unwrap_err()
        .to_string();
    assert!(msg.contains("502"));
    assert!(msg.contains("upstream unavailable"));
}

#[tokio::test]
async fn test_set_space_secret_empty_error_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/spaces/owner/space/secrets"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let msg = client_for(&mock_server)
        .set_space_secret("owner/space", "JWT_SECRET", "x")
        .await
        .unwrap_err()
        .to_string();
    assert_eq!(msg, "Hub API error (status 404): Not Found");
}

#[tokio::test]
async fn test_set_space_secret_connection_refused() {
    // Nothing listens on port 9 on a test machine.
    let client = HubClient::new("hf_test_token".to_string(), "http://127.0.0.1:9".to_string()).unwrap();

    let msg = client
        .set_space_secret("owner/space", "JWT_SECRET", "x")
        .await
        .unwrap_err()
        .to_string();
    assert!(msg.starts_with("HTTP error"));
}
