//! Delete specs
//!
//! Verify removal by id and the 204 reply.

use crate::prelude::*;

#[tokio::test]
async fn delete_removes_only_that_record() {
    let service = Service::with_talkers(three_talkers());

    service
        .delete("/talker/2")
        .authed()
        .send()
        .await
        .status_is(204)
        .body_is_empty();

    service.get("/talker/2").send().await.status_is(404);
    assert_eq!(
        service.persisted(),
        json!([three_talkers()[0].clone(), three_talkers()[2].clone()])
    );
    service
        .get("/talker/3")
        .send()
        .await
        .status_is(200)
        .body_is(three_talkers()[2].clone());
}

#[tokio::test]
async fn delete_unknown_id_is_not_found() {
    let service = Service::with_talkers(three_talkers());

    service
        .delete("/talker/7")
        .authed()
        .send()
        .await
        .status_is(404)
        .message_is(messages::NOT_FOUND);

    assert_eq!(service.persisted(), three_talkers());
}

#[tokio::test]
async fn create_after_delete_keeps_size_plus_one_numbering() {
    let service = Service::with_talkers(three_talkers());
    service.delete("/talker/1").authed().send().await.status_is(204);

    let created = service
        .post("/talker")
        .authed()
        .json(valid_talker())
        .send()
        .await
        .status_is(201);

    // Two records remain, so the new id collides with the existing 3
    assert_eq!(created.body()["id"], 3);
    let ids: Vec<_> = service
        .persisted()
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 3, 3]);
}
