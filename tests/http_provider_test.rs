// ABOUTME: Integration tests for the HTTP activity provider against a mock tracker
// ABOUTME: Request shape, DTO mapping and status-to-error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use allure::models::ActivityType;
use allure::providers::{ActivityProvider, HttpActivityProvider, ProviderError};
use common::first_week_range;
use mockito::{Matcher, Server};

const ACTIVITIES: &str = r#"[
    {"sport_type": "Run", "distance": 10000.0, "moving_time": 3000, "start_date": "2025-03-03T07:00:00Z"},
    {"type": "Ride", "distance": 40000.0, "moving_time": 5400, "start_date": "2025-03-05T17:30:00Z"},
    {"sport_type": "Kitesurf", "moving_time": 1800, "start_date": "2025-03-08T10:00:00Z"}
]"#;

#[tokio::test]
async fn test_fetch_maps_tracker_activities() {
    common::init_test_logging();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/athletes/42/activities")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("after".into(), "2025-03-03".into()),
            Matcher::UrlEncoded("before".into(), "2025-03-10".into()),
        ]))
        .match_header("authorization", "Bearer secret-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ACTIVITIES)
        .create_async()
        .await;

    let provider = HttpActivityProvider::new(server.url(), Some("secret-token".to_owned()));
    let records = provider
        .fetch_activities("42", first_week_range())
        .await
        .unwrap();
    mock.assert_async().await;

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].activity_type, ActivityType::Run);
    assert!((records[0].distance_km - 10.0).abs() < 1e-9);
    assert!((records[0].moving_time_minutes - 50.0).abs() < 1e-9);
    assert_eq!(records[1].activity_type, ActivityType::Ride);
    assert!((records[1].moving_time_minutes - 90.0).abs() < 1e-9);
    assert_eq!(
        records[2].activity_type,
        ActivityType::Other("Kitesurf".to_owned())
    );
    assert!(records[2].distance_km.abs() < 1e-9);
}

#[tokio::test]
async fn test_records_carrying_both_type_keys() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/athletes/42/activities")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"[
                {"type": "Run", "sport_type": "TrailRun", "distance": 12000.0,
                 "moving_time": 4200, "start_date": "2025-03-09T08:00:00Z"},
                {"type": "Ride", "sport_type": "GravelRide", "distance": 50000.0,
                 "moving_time": 7200, "start_date": "2025-03-09T14:00:00Z"}
            ]"#,
        )
        .create_async()
        .await;

    let provider = HttpActivityProvider::new(server.url(), None);
    let records = provider
        .fetch_activities("42", first_week_range())
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].activity_type, ActivityType::TrailRun);
    assert_eq!(records[1].activity_type, ActivityType::GravelRide);
    // Sunday activities belong to the requested week
    assert!(records.iter().all(|r| first_week_range().contains(r.start_date)));
}

#[tokio::test]
async fn test_trailing_slash_and_missing_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/athletes/7/activities")
        .match_query(Matcher::Any)
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let provider = HttpActivityProvider::new(format!("{}/", server.url()), None);
    let records = provider
        .fetch_activities("7", first_week_range())
        .await
        .unwrap();
    mock.assert_async().await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_rejected_token_is_an_authentication_failure() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/athletes/42/activities")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"message": "Authorization Error"}"#)
        .create_async()
        .await;

    let provider = HttpActivityProvider::new(server.url(), Some("expired".to_owned()))
        .named("strava");
    let error = provider
        .fetch_activities("42", first_week_range())
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        ProviderError::AuthenticationFailed { ref provider, .. } if provider == "strava"
    ));
}

#[tokio::test]
async fn test_server_error_is_unavailable() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/athletes/42/activities")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("maintenance")
        .create_async()
        .await;

    let provider = HttpActivityProvider::new(server.url(), None);
    let error = provider
        .fetch_activities("42", first_week_range())
        .await
        .unwrap_err();
    assert!(matches!(error, ProviderError::Unavailable { .. }));
    assert!(error.to_string().contains("maintenance"));
}

#[tokio::test]
async fn test_client_error_keeps_the_status() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/athletes/42/activities")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body("no such athlete")
        .create_async()
        .await;

    let provider = HttpActivityProvider::new(server.url(), None);
    let error = provider
        .fetch_activities("42", first_week_range())
        .await
        .unwrap_err();
    assert!(matches!(error, ProviderError::ApiError { status: 404, .. }));
}

#[tokio::test]
async fn test_malformed_body_is_an_invalid_response() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/athletes/42/activities")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"activities": "not a list"}"#)
        .create_async()
        .await;

    let provider = HttpActivityProvider::new(server.url(), None);
    let error = provider
        .fetch_activities("42", first_week_range())
        .await
        .unwrap_err();
    assert!(matches!(error, ProviderError::InvalidResponse { .. }));
}

#[tokio::test]
async fn test_unreachable_tracker_is_unavailable() {
    let provider = HttpActivityProvider::new("http://127.0.0.1:1", None);
    let error = provider
        .fetch_activities("42", first_week_range())
        .await
        .unwrap_err();
    assert!(matches!(error, ProviderError::Unavailable { .. }));
}
