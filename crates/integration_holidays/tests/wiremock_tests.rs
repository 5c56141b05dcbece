//! Integration tests for the holiday client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! ensuring proper handling of various response scenarios.

use domain::{CanonicalDate, CountryCode};
use integration_holidays::{HolidayClient, HolidayConfig, HolidayError, NagerDateClient};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

/// Trimmed Nager.Date response for Brazil 2025
fn sample_holidays_response() -> serde_json::Value {
    serde_json::json!([
        {
            "date": "2025-01-01",
            "localName": "Confraternização Universal",
            "name": "New Year's Day",
            "countryCode": "BR",
            "fixed": true,
            "global": true,
            "counties": null,
            "launchYear": null,
            "types": ["Public"]
        },
        {
            "date": "2025-04-21",
            "localName": "Tiradentes",
            "name": "Tiradentes",
            "countryCode": "BR",
            "fixed": true,
            "global": true,
            "counties": null,
            "launchYear": null,
            "types": ["Public"]
        },
        {
            "date": "2025-12-25",
            "localName": "Natal",
            "name": "Christmas Day",
            "countryCode": "BR",
            "fixed": true,
            "global": true,
            "counties": null,
            "launchYear": null,
            "types": ["Public"]
        }
    ])
}

/// Create a test client configured to use the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> NagerDateClient {
    let config = HolidayConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
    };
    #[allow(clippy::expect_used)]
    NagerDateClient::new(&config).expect("Failed to create client")
}

/// Base URL of a local port that nothing listens on
///
/// The listener is bound to an ephemeral port and dropped right away.
fn closed_port_uri() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

async fn setup_holidays_mock(mock_server: &MockServer, year: i32, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v3/PublicHolidays/{year}/BR")))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_public_holidays_success() {
    let mock_server = MockServer::start().await;
    setup_holidays_mock(
        &mock_server,
        2025,
        ResponseTemplate::new(200).set_body_json(sample_holidays_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.public_holidays(2025, &CountryCode::brazil()).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
    let set = result.unwrap();
    assert_eq!(set.year(), 2025);
    assert_eq!(set.len(), 3);

    let christmas = CanonicalDate::parse_iso("2025-12-25").unwrap();
    let record = set.find(&christmas).unwrap();
    assert_eq!(record.name, "Christmas Day");
    assert_eq!(record.local_name.as_deref(), Some("Natal"));
}

#[tokio::test]
async fn test_sends_json_accept_header() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/PublicHolidays/2025/BR"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let set = client
        .public_holidays(2025, &CountryCode::brazil())
        .await
        .unwrap();
    assert!(set.is_empty());
}

#[tokio::test]
async fn test_year_is_part_of_path() {
    let mock_server = MockServer::start().await;
    setup_holidays_mock(
        &mock_server,
        2026,
        ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "date": "2026-02-17", "localName": "Carnaval", "name": "Carnival" }
        ])),
    )
    .await;

    let client = create_test_client(&mock_server);
    let set = client
        .public_holidays(2026, &CountryCode::brazil())
        .await
        .unwrap();
    assert_eq!(set.year(), 2026);
    assert_eq!(set.records()[0].name, "Carnival");
}

#[tokio::test]
async fn test_is_healthy() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/AvailableCountries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    assert!(client.is_healthy().await);
}

// ============================================================================
// Error scenarios
// ============================================================================

#[tokio::test]
async fn test_server_error_is_service_unavailable() {
    let mock_server = MockServer::start().await;
    setup_holidays_mock(&mock_server, 2025, ResponseTemplate::new(503)).await;

    let client = create_test_client(&mock_server);
    let result = client.public_holidays(2025, &CountryCode::brazil()).await;

    assert!(matches!(result, Err(HolidayError::ServiceUnavailable(_))));
}

#[tokio::test]
async fn test_rate_limit() {
    let mock_server = MockServer::start().await;
    setup_holidays_mock(&mock_server, 2025, ResponseTemplate::new(429)).await;

    let client = create_test_client(&mock_server);
    let result = client.public_holidays(2025, &CountryCode::brazil()).await;

    assert!(matches!(result, Err(HolidayError::RateLimitExceeded)));
}

#[tokio::test]
async fn test_not_found_reports_status_and_url() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/PublicHolidays/2025/XX"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let country = CountryCode::new("XX").unwrap();
    let result = client.public_holidays(2025, &country).await;

    match result {
        Err(HolidayError::RequestFailed(msg)) => {
            assert!(msg.contains("404"));
            assert!(msg.contains("/api/v3/PublicHolidays/2025/XX"));
        },
        other => unreachable!("Expected RequestFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_bad_request_is_request_failed() {
    let mock_server = MockServer::start().await;
    setup_holidays_mock(&mock_server, 2025, ResponseTemplate::new(400)).await;

    let client = create_test_client(&mock_server);
    let result = client.public_holidays(2025, &CountryCode::brazil()).await;

    assert!(matches!(result, Err(HolidayError::RequestFailed(_))));
}

#[tokio::test]
async fn test_invalid_json_is_parse_error() {
    let mock_server = MockServer::start().await;
    setup_holidays_mock(
        &mock_server,
        2025,
        ResponseTemplate::new(200).set_body_string("<html>not json</html>"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.public_holidays(2025, &CountryCode::brazil()).await;

    assert!(matches!(result, Err(HolidayError::ParseError(_))));
}

#[tokio::test]
async fn test_unreachable_server() {
    let config = HolidayConfig {
        base_url: closed_port_uri(),
        timeout_secs: 2,
    };
    let client = NagerDateClient::new(&config).unwrap();
    let result = client.public_holidays(2025, &CountryCode::brazil()).await;

    assert!(matches!(result, Err(HolidayError::ConnectionFailed(_))));
    assert!(!client.is_healthy().await);
}
