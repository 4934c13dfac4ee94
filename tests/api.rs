//! End-to-end tests of the customer API over a real socket.

use customer_registry_sdk::{ClientError, CustomerDraft, RegistryClient};
use reqwest::StatusCode;

mod common;

fn draft(name: &str) -> CustomerDraft {
    CustomerDraft {
        name: name.to_string(),
        role: "CSO".to_string(),
        email: "ada@example.com".to_string(),
        phone: "5550100".to_string(),
        contacted: false,
    }
}

#[tokio::test]
async fn test_list_then_get_round_trip() {
    let server = common::start_seeded().await;
    let client = RegistryClient::new(&server.url());

    let customers = client.list().await.unwrap();
    assert_eq!(customers.len(), 4);

    for customer in customers {
        let fetched = client.get(&customer.id).await.unwrap();
        assert_eq!(fetched, customer);
    }

    server.stop().await.unwrap();
}

#[tokio::test]
async fn test_create_on_seeded_store_assigns_fresh_id() {
    let server = common::start_seeded().await;
    let client = RegistryClient::new(&server.url());

    let created = client.create(&draft("Ada Lovelace")).await.unwrap();
    assert!(!["1", "2", "3", "4"].contains(&created.id.as_str()));
    assert_eq!(created.id, "5");
    assert_eq!(created.name, "Ada Lovelace");

    assert_eq!(client.list().await.unwrap().len(), 5);
    assert_eq!(client.get("5").await.unwrap(), created);
}

#[tokio::test]
async fn test_get_unknown_id_is_404_with_message() {
    let server = common::start_seeded().await;

    let res = reqwest::get(format!("{}/customers/99", server.url()))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.text().await.unwrap(), "Customer not found");

    let client = RegistryClient::new(&server.url());
    assert!(matches!(
        client.get("99").await,
        Err(ClientError::NotFound(id)) if id == "99"
    ));
}

#[tokio::test]
async fn test_post_returns_201() {
    let server = common::start_seeded().await;

    let res = reqwest::Client::new()
        .post(format!("{}/customers", server.url()))
        .json(&serde_json::json!({ "name": "Grace Hopper", "contacted": true }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["id"], "5");
    assert_eq!(body["role"], "");
    assert_eq!(body["contacted"], true);
}

#[tokio::test]
async fn test_post_form_encoded_json_is_accepted() {
    let server = common::start_seeded().await;

    let res = reqwest::Client::new()
        .post(format!("{}/customers", server.url()))
        .header("content-type", "application/x-www-form-urlencoded")
        .body(r#"{"name":"Grace Hopper"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(server.store.get("5").await.unwrap().name, "Grace Hopper");
}

#[tokio::test]
async fn test_update_then_get_reflects_new_fields() {
    let server = common::start_seeded().await;
    let client = RegistryClient::new(&server.url());

    let mut replacement = draft("Janet Doe");
    replacement.contacted = true;
    let updated = client.update("2", &replacement).await.unwrap();

    assert_eq!(updated.id, "2");
    let fetched = client.get("2").await.unwrap();
    assert_eq!(fetched, updated);
    assert_eq!(fetched.name, "Janet Doe");
    assert!(fetched.contacted);
}

#[tokio::test]
async fn test_update_unknown_id_leaves_store_unchanged() {
    let server = common::start_seeded().await;
    let client = RegistryClient::new(&server.url());
    let before = client.list().await.unwrap();

    assert!(matches!(
        client.update("99", &draft("Nobody")).await,
        Err(ClientError::NotFound(_))
    ));
    assert_eq!(client.list().await.unwrap(), before);
}

#[tokio::test]
async fn test_delete_returns_remaining_map_and_removes_record() {
    let server = common::start_seeded().await;
    let client = RegistryClient::new(&server.url());

    let remaining = client.delete("2").await.unwrap();
    assert_eq!(remaining.len(), 3);
    assert!(!remaining.contains_key("2"));
    assert!(remaining.iter().all(|(key, customer)| key == &customer.id));

    assert!(matches!(
        client.get("2").await,
        Err(ClientError::NotFound(_))
    ));
    assert!(matches!(
        client.delete("2").await,
        Err(ClientError::NotFound(_))
    ));
    assert_eq!(server.store.len().await, 3);
}

#[tokio::test]
async fn test_create_after_delete_skips_taken_ids() {
    let server = common::start_seeded().await;
    let client = RegistryClient::new(&server.url());

    client.delete("2").await.unwrap();
    let created = client.create(&draft("Ada")).await.unwrap();

    let ids: Vec<_> = client.list().await.unwrap().into_iter().map(|c| c.id).collect();
    assert_eq!(created.id, "5");
    assert_eq!(ids, vec!["1", "3", "4", "5"]);
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let server = common::start_seeded().await;

    let res = reqwest::Client::new()
        .post(format!("{}/customers", server.url()))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(server.store.len().await, 4);
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let server = common::start_seeded().await;
    let huge = "x".repeat(80 * 1024);

    let res = reqwest::Client::new()
        .post(format!("{}/customers", server.url()))
        .json(&serde_json::json!({ "name": huge }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(server.store.len().await, 4);
}
