//! End-to-end tests for the page server
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test pages_tests

use std::time::Duration;

use chat_core::traits::{OnlineRecordRepository, RoomRepository};
use chat_core::{ObjectId, RoomMembers};
use chat_db::{PgOnlineRecordRepository, PgRoomRepository};
use futures_util::{SinkExt, StreamExt};
use integration_tests::{
    assert_json, assert_page, check_test_env, page_attr, page_view, TestServer, UNKNOWN_ROOM_ID,
};
use reqwest::StatusCode;
use tokio_tungstenite::tungstenite::Message;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let json = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let json = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(json["checks"]["database"], "healthy");
}

// ============================================================================
// Page Tests
// ============================================================================

#[tokio::test]
async fn test_signed_out_chat_renders_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/chat").await.unwrap();
    let html = assert_page(response, StatusCode::OK).await.unwrap();
    assert_eq!(page_view(&html).as_deref(), Some("login"));
}

#[tokio::test]
async fn test_cookie_session_renders_chat() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.seed_user("cookie").await.unwrap();

    let response = server.get_with_cookie("/chat", &token).await.unwrap();
    let html = assert_page(response, StatusCode::OK).await.unwrap();
    assert_eq!(page_view(&html).as_deref(), Some("chat"));
}

#[tokio::test]
async fn test_username_opens_persisted_inbox() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (me, my_token) = server.seed_user("me").await.unwrap();
    let (alice, alice_token) = server.seed_user("alice").await.unwrap();

    let response = server
        .get_auth(&format!("/chat/{}", alice.username), &my_token)
        .await
        .unwrap();
    let html = assert_page(response, StatusCode::OK).await.unwrap();
    let room_id = page_attr(&html, "data-room").expect("room rendered");

    let stored = PgRoomRepository::new(server.pool.clone())
        .find_inbox(&RoomMembers::pair(alice.id, me.id))
        .await
        .unwrap()
        .expect("room stored");
    assert_eq!(stored.id.to_string(), room_id);
    assert_eq!(stored.creator_id, me.id);

    // Either side lands in the same room afterwards
    let response = server
        .get_auth(&format!("/chat/{}", me.username), &alice_token)
        .await
        .unwrap();
    let html = assert_page(response, StatusCode::OK).await.unwrap();
    assert_eq!(page_attr(&html, "data-room"), Some(room_id));
}

#[tokio::test]
async fn test_unknown_username_renders_requested_room() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.seed_user("lonely").await.unwrap();

    let response = server.get_auth("/chat/doesNotExist", &token).await.unwrap();
    let html = assert_page(response, StatusCode::OK).await.unwrap();
    assert_eq!(page_attr(&html, "data-room").as_deref(), Some("doesNotExist"));
    assert_eq!(page_attr(&html, "data-online").as_deref(), Some("unknown"));
}

// ============================================================================
// Socket and presence
// ============================================================================

#[tokio::test]
async fn test_socket_session_drives_presence() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (me, token) = server.seed_user("socket").await.unwrap();
    let room_page = format!("/chat/{UNKNOWN_ROOM_ID}");

    let (mut ws, _) = tokio_tungstenite::connect_async(server.socket_url(&token))
        .await
        .expect("connect");
    ws.send(Message::Text("ping".into())).await.unwrap();
    assert_eq!(ws.next().await.unwrap().unwrap(), Message::Text("pong".into()));

    let html = assert_page(server.get_auth(&room_page, &token).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(page_attr(&html, "data-online").as_deref(), Some("online"));

    ws.close(None).await.unwrap();

    let records = PgOnlineRecordRepository::new(server.pool.clone());
    let mut recorded = None;
    for _ in 0..50 {
        recorded = records.last_online(me.id).await.unwrap();
        if recorded.is_some() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert!(recorded.is_some(), "last online not recorded");

    let html = assert_page(server.get_auth(&room_page, &token).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(page_attr(&html, "data-online").as_deref(), Some("last_seen"));
}

#[tokio::test]
async fn test_socket_rejects_missing_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let url = format!("ws://{}/socket", server.addr);

    match tokio_tungstenite::connect_async(url).await.map(|_| ()) {
        Err(tokio_tungstenite::tungstenite::Error::Http(response)) => {
            assert_eq!(response.status(), 401);
        }
        other => panic!("expected 401, got {other:?}"),
    }

    // Unused id stays offline
    let records = PgOnlineRecordRepository::new(server.pool.clone());
    assert!(records
        .last_online(ObjectId::from_bytes([0xee; 12]))
        .await
        .unwrap()
        .is_none());
}
