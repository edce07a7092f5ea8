//! Tests for HttpRoomResolver against a mock mapping endpoint

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::error::IvrError;
use crate::services::http_resolver::HttpRoomResolver;
use crate::traits::RoomResolver;

fn resolver_for(server: &MockServer) -> HttpRoomResolver {
    HttpRoomResolver::new(format!("{}/conferenceMapper", server.uri()))
}

#[tokio::test]
async fn test_conference_is_returned() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/conferenceMapper"))
        .and(query_param("id", "4021"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Successfully retrieved conference mapping",
            "id": 4021,
            "conference": "room-42"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let room = resolver_for(&server).resolve("4021").await.unwrap();

    assert_eq!(room.unwrap().as_str(), "room-42");
}

#[tokio::test]
async fn test_missing_conference_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/conferenceMapper"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "No conference mapping was found" })))
        .mount(&server)
        .await;

    let room = resolver_for(&server).resolve("9999").await.unwrap();

    assert!(room.is_none());
}

#[tokio::test]
async fn test_http_error_status_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = resolver_for(&server).resolve("4021").await.unwrap_err();

    assert!(matches!(err, IvrError::RoomResolutionFailed { reason } if reason.contains("500")));
}

#[tokio::test]
async fn test_non_json_body_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = resolver_for(&server).resolve("4021").await.unwrap_err();

    assert!(matches!(err, IvrError::RoomResolutionFailed { .. }));
}

#[tokio::test]
async fn test_blank_conference_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "conference": "  " })))
        .mount(&server)
        .await;

    let err = resolver_for(&server).resolve("4021").await.unwrap_err();

    assert!(matches!(err, IvrError::RoomResolutionFailed { .. }));
}

#[tokio::test]
async fn test_unreachable_endpoint_fails() {
    let resolver = HttpRoomResolver::new("http://127.0.0.1:1/conferenceMapper");

    let err = resolver.resolve("4021").await.unwrap_err();

    assert!(matches!(err, IvrError::RoomResolutionFailed { .. }));
}

#[test]
fn test_target_built_from_config() {
    let mut config = shared::IvrConfig::default();
    config.confmapper_url = "https://mapper.example.org".to_string();
    config.confmapper_endpoint = "/conferenceMapper".to_string();

    let resolver = HttpRoomResolver::from_config(&config);

    assert_eq!(resolver.target(), "https://mapper.example.org/conferenceMapper");
}
