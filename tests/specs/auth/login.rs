//! Login specs
//!
//! Verify credential checks and token issuance.

use crate::prelude::*;

fn credentials() -> Value {
    json!({"email": "email@email.com", "password": "123456"})
}

#[tokio::test]
async fn login_issues_sixteen_hex_token() {
    let outcome = Service::empty()
        .post("/login")
        .json(credentials())
        .send()
        .await
        .status_is(200);

    let token = outcome.body()["token"].as_str().unwrap();
    assert_eq!(token.len(), 16);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()), "{token}");
}

#[tokio::test]
async fn issued_token_opens_protected_endpoints() {
    let service = Service::empty();
    let login = service
        .post("/login")
        .json(credentials())
        .send()
        .await
        .status_is(200);
    let token = login.body()["token"].as_str().unwrap().to_string();

    service
        .post("/talker")
        .token(&token)
        .json(valid_talker())
        .send()
        .await
        .status_is(201);
}

#[tokio::test]
async fn login_needs_no_token_and_touches_no_data() {
    let service = Service::with_talkers(three_talkers());
    service.post("/login").json(credentials()).send().await.status_is(200);
    assert_eq!(service.persisted(), three_talkers());
}

#[tokio::test]
async fn credential_checks_run_in_order() {
    let service = Service::empty();
    let cases = [
        (json!({}), messages::EMAIL_REQUIRED),
        (json!({"email": "", "password": "1"}), messages::EMAIL_REQUIRED),
        (json!({"email": "email@", "password": "1"}), messages::EMAIL_FORMAT),
        (json!({"email": "email@email.com"}), messages::PASSWORD_REQUIRED),
        (json!({"email": "email@email.com", "password": "12345"}), messages::PASSWORD_LENGTH),
    ];

    for (body, expected) in cases {
        service
            .post("/login")
            .json(body)
            .send()
            .await
            .status_is(400)
            .message_is(expected);
    }
}

#[tokio::test]
async fn malformed_login_body_is_bad_request() {
    Service::empty()
        .post("/login")
        .raw("email=email@email.com")
        .send()
        .await
        .status_is(400)
        .message_is(messages::MALFORMED_BODY);
}
