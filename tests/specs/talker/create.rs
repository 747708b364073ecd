//! Create specs
//!
//! Verify id assignment, persistence, and the order of field checks.

use crate::prelude::*;

#[tokio::test]
async fn created_talker_gets_next_id_and_is_readable() {
    let service = Service::with_talkers(three_talkers());

    let created = service
        .post("/talker")
        .authed()
        .json(valid_talker())
        .send()
        .await
        .status_is(201);
    assert_eq!(created.body()["id"], 4);

    let fetched = service.get("/talker/4").send().await.status_is(200);
    assert_eq!(fetched.body()["name"], valid_talker()["name"]);
    assert_eq!(fetched.body()["age"], valid_talker()["age"]);
    assert_eq!(fetched.body()["talk"], valid_talker()["talk"]);
    assert_eq!(service.persisted().as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn short_name_fails_regardless_of_other_fields() {
    let service = Service::empty();
    for body in [
        json!({"name": "Al", "age": 30, "talk": {"watchedAt": "10/10/2021", "rate": 4}}),
        json!({"name": "Al", "age": 3, "talk": {"watchedAt": "bad", "rate": 9}}),
        json!({"name": "Al"}),
    ] {
        service
            .post("/talker")
            .authed()
            .json(body)
            .send()
            .await
            .status_is(400)
            .message_is(messages::NAME_LENGTH);
    }
    assert_eq!(service.persisted(), json!([]));
}

#[tokio::test]
async fn underage_fails_after_name_checks() {
    let service = Service::empty();
    let mut body = valid_talker();
    body["age"] = json!(17);
    body["talk"]["rate"] = json!(0);

    service
        .post("/talker")
        .authed()
        .json(body.clone())
        .send()
        .await
        .status_is(400)
        .message_is(messages::AGE_RANGE);

    body["name"] = json!("");
    service
        .post("/talker")
        .authed()
        .json(body)
        .send()
        .await
        .status_is(400)
        .message_is(messages::NAME_REQUIRED);
}

#[tokio::test]
async fn field_checks_run_in_order() {
    let service = Service::empty();
    let cases = [
        (json!({}), messages::NAME_REQUIRED),
        (json!({"name": "Ana"}), messages::AGE_REQUIRED),
        (json!({"name": "Ana", "age": 20}), messages::TALK_REQUIRED),
        (json!({"name": "Ana", "age": 20, "talk": {}}), messages::WATCHED_AT_REQUIRED),
        (
            json!({"name": "Ana", "age": 20, "talk": {"watchedAt": "2020/02/31"}}),
            messages::WATCHED_AT_FORMAT,
        ),
        (
            json!({"name": "Ana", "age": 20, "talk": {"watchedAt": "31/02/2020"}}),
            messages::RATE_REQUIRED,
        ),
        (
            json!({"name": "Ana", "age": 20, "talk": {"watchedAt": "31/02/2020", "rate": 6}}),
            messages::RATE_RANGE,
        ),
    ];

    for (body, expected) in cases {
        service
            .post("/talker")
            .authed()
            .json(body)
            .send()
            .await
            .status_is(400)
            .message_is(expected);
    }
}

#[tokio::test]
async fn watched_at_accepts_shape_not_calendar() {
    let service = Service::empty();
    for (watched_at, status) in [("31/02/2020", 201), ("2020/02/31", 400), ("1/2/2020", 400)] {
        let mut body = valid_talker();
        body["talk"]["watchedAt"] = json!(watched_at);
        service
            .post("/talker")
            .authed()
            .json(body)
            .send()
            .await
            .status_is(status);
    }
}

#[tokio::test]
async fn rate_bounds() {
    let service = Service::empty();
    for (rate, status) in [(0, 400), (1, 201), (5, 201), (6, 400)] {
        let mut body = valid_talker();
        body["talk"]["rate"] = json!(rate);
        service
            .post("/talker")
            .authed()
            .json(body)
            .send()
            .await
            .status_is(status);
    }
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    Service::empty()
        .post("/talker")
        .authed()
        .raw("{\"name\": ")
        .send()
        .await
        .status_is(400)
        .message_is(messages::MALFORMED_BODY);
}

#[tokio::test]
async fn unknown_fields_are_not_persisted() {
    let service = Service::empty();
    let mut body = valid_talker();
    body["nickname"] = json!("Dani");
    body["talk"]["venue"] = json!("main stage");

    service
        .post("/talker")
        .authed()
        .json(body)
        .send()
        .await
        .status_is(201);

    let mut expected = valid_talker();
    expected["id"] = json!(1);
    assert_eq!(service.persisted(), json!([expected]));
}
