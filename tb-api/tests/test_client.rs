//! Integration tests for session state and the single-shot endpoints.

mod common;

use chrono::NaiveDate;
use serde_json::json;

use tb_core::error::TbError;

// ---- login / session ----

#[tokio::test]
async fn login_stores_token_and_user() {
    let transport = common::MockTransport::new();
    transport.push(200, common::login_body());
    let client = common::test_client(transport.clone());

    let user = client.login("pat@example.com", "hunter2").await.unwrap();
    assert_eq!(user.username, "pat");
    assert!(client.logged_in().await);
    assert_eq!(client.current_user().await.unwrap().id, 10);

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.ends_with("/authenticate"));
    // The login call itself goes out unauthenticated.
    assert!(requests[0].token.is_none());
    let body = requests[0].body.as_ref().unwrap();
    assert_eq!(body["username"], "pat@example.com");
    assert_eq!(body["clientId"], tb_core::constants::IOS_CLIENT_ID);
}

#[tokio::test]
async fn login_twice_issues_one_network_call() {
    let transport = common::MockTransport::new();
    transport.push(200, common::login_body());
    let client = common::test_client(transport.clone());

    client.login("pat@example.com", "hunter2").await.unwrap();
    let user = client.login("pat@example.com", "hunter2").await.unwrap();
    assert_eq!(user.username, "pat");
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn login_rejection_leaves_session_unauthenticated() {
    let transport = common::MockTransport::new();
    transport.push(401, json!({"message": "bad credentials"}));
    let client = common::test_client(transport.clone());

    let err = client.login("pat@example.com", "wrong").await.unwrap_err();
    assert!(matches!(err, TbError::AuthFailed(_)));
    assert!(!client.logged_in().await);
    assert!(client.current_user().await.is_none());
}

#[tokio::test]
async fn authenticated_requests_carry_raw_token() {
    let transport = common::MockTransport::new();
    transport.push(200, common::login_body());
    transport.push(200, common::followings_body());
    let client = common::test_client(transport.clone());

    client.login("pat@example.com", "hunter2").await.unwrap();
    client.get_followings().await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[1].token.as_deref(), Some("tok-abc"));
}

#[tokio::test]
async fn clones_share_one_session() {
    let transport = common::MockTransport::new();
    transport.push(200, common::login_body());
    let client = common::test_client(transport.clone());
    let clone = client.clone();

    client.login("pat@example.com", "hunter2").await.unwrap();
    assert!(clone.logged_in().await);

    clone.logout().await;
    assert!(!client.logged_in().await);
}

// ---- followings / children ----

#[tokio::test]
async fn followings_are_mapped_and_children_attached() {
    let transport = common::MockTransport::new();
    transport.push(200, common::followings_body());
    let client = common::test_client(transport.clone());

    let followings = client.get_followings().await.unwrap();
    assert_eq!(followings.len(), 1);
    assert!(followings[0].relationship.is_parent());
    assert_eq!(followings[0].journal.children[0].journal().id, 555);

    let requests = transport.requests();
    assert_eq!(
        common::query_param(&requests[0], "clientId").as_deref(),
        Some(tb_core::constants::IOS_CLIENT_ID)
    );
}

#[tokio::test]
async fn children_flattens_across_followings() {
    let transport = common::MockTransport::new();
    transport.push(200, common::followings_body());
    let client = common::test_client(transport);

    let children = client.children().await.unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].name(), "Ada Doe");
    assert!(children[0].is_attached());
}

#[tokio::test]
async fn followings_server_error_propagates() {
    let transport = common::MockTransport::new();
    transport.push(500, json!({"message": "boom"}));
    let client = common::test_client(transport);

    let err = client.get_followings().await.unwrap_err();
    match err {
        TbError::ServerError { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected ServerError, got {other:?}"),
    }
}

// ---- export ----

#[tokio::test]
async fn export_ok_status_is_true() {
    let transport = common::MockTransport::new();
    transport.push(200, json!({"status": "ok"}));
    let client = common::test_client(transport.clone());
    let journal = common::test_journal();

    let accepted = client
        .request_export(
            &journal,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        )
        .await
        .unwrap();
    assert!(accepted);

    let requests = transport.requests();
    assert!(requests[0].url.ends_with("/journals/555/export"));
    assert_eq!(
        common::query_param(&requests[0], "startDate").as_deref(),
        Some("2024-01-01")
    );
    assert_eq!(
        common::query_param(&requests[0], "endDate").as_deref(),
        Some("2024-12-31")
    );
}

#[tokio::test]
async fn export_other_status_is_false() {
    let transport = common::MockTransport::new();
    transport.push(200, json!({"status": "pending"}));
    let client = common::test_client(transport);

    let accepted = client
        .request_export(
            &common::test_journal(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
        .await
        .unwrap();
    assert!(!accepted);
}

#[tokio::test]
async fn export_server_error_propagates() {
    let transport = common::MockTransport::new();
    transport.push(403, json!({"message": "not yours"}));
    let client = common::test_client(transport);

    let err = client
        .request_export(
            &common::test_journal(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, TbError::ServerError { status: 403, .. }));
}
