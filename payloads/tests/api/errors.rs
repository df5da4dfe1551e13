use payloads::{
    APIClient, ClientError, Endpoint, Location, RequestOptions, responses,
};
use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use std::net::TcpListener;
use test_helpers::{assert_status_code, spawn_app};

#[tokio::test]
async fn injected_status_is_reported() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.fail_with("/dashboard/main", StatusCode::SERVICE_UNAVAILABLE);

    let result = app.client.dashboard_main(&Location::city("almaty")).await;
    let message = result.as_ref().err().map(ToString::to_string);
    assert_eq!(message.as_deref(), Some("HTTP error, status: 503"));
    assert_status_code(result, StatusCode::SERVICE_UNAVAILABLE);

    app.recover();
    app.client.dashboard_main(&Location::city("almaty")).await?;
    Ok(())
}

#[tokio::test]
async fn failures_are_not_retried() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.fail_with("/health", StatusCode::INTERNAL_SERVER_ERROR);

    assert!(app.client.health_check().await.is_err());
    assert_eq!(app.requests_to("/health").len(), 1);

    Ok(())
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.serve_malformed("/dashboard/agriculture");

    let result = app
        .client
        .dashboard_agriculture(&Location::city("almaty"))
        .await;
    assert!(matches!(result, Err(ClientError::Decode(_))));

    Ok(())
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() -> anyhow::Result<()> {
    // Reserve a port, then free it so nothing is listening there.
    let port = TcpListener::bind("127.0.0.1:0")?.local_addr()?.port();
    let client = APIClient::new(format!("http://127.0.0.1:{port}/api/v1"), None)?;

    let result = client.health_check().await;
    assert!(matches!(result, Err(ClientError::Network(_))));
    assert_eq!(
        result.err().map(|e| e.to_string()).as_deref(),
        Some("Network error. Please check your connection.")
    );

    Ok(())
}

#[tokio::test]
async fn caller_headers_override_content_type() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
    let options = RequestOptions {
        headers,
        ..Default::default()
    };
    let health: responses::HealthStatus =
        app.client.request(&Endpoint::new("/health"), options).await?;
    assert_eq!(health.status, "healthy");

    let requests = app.requests_to("/health");
    assert_eq!(requests[0].content_type.as_deref(), Some("text/plain"));

    Ok(())
}
