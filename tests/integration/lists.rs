use affinity_api::rest::{EntityType, FieldValueQuery, NewFieldValue};
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{basic_auth_header, setup};

#[tokio::test]
async fn test_get_all_lists_sends_basic_auth() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/lists"))
        .and(header("Authorization", basic_auth_header().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 450, "type": 0, "name": "Investors", "public": true, "owner_id": 38706, "list_size": 67},
            {"id": 451, "type": 8, "name": "Deals", "public": false, "owner_id": 38706, "list_size": 3}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let lists = client.get_all_lists().await.unwrap();
    assert_eq!(lists.len(), 2);
    assert_eq!(lists[0].entity_kind(), Some(EntityType::Person));
    assert_eq!(lists[1].entity_kind(), Some(EntityType::Opportunity));
}

#[tokio::test]
async fn test_create_list_entry_then_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/lists/7/list-entries"))
        .and(body_string("entity_id=100&creator_id=5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 9001,
            "list_id": 7,
            "creator_id": 5,
            "entity_id": 100,
            "entity": {"id": 100, "name": "Acme"},
            "created_at": "2024-01-02T03:04:05.000-08:00"
        })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    let entry = client.create_list_entry(7, 100, Some(5)).await.unwrap();
    assert_eq!(entry.id, 9001);
    assert_eq!(entry.entity_id, 100);
    assert!(entry.created_at_utc().is_some());

    Mock::given(method("POST"))
        .and(path("/lists/7/list-entries"))
        .respond_with(ResponseTemplate::new(404).set_body_string("List not found"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.create_list_entry(7, 100, Some(5)).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.body(), Some("List not found"));
}

#[tokio::test]
async fn test_field_values_for_list_entry() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/field-values"))
        .and(query_param("person_id", "38706"))
        .and(query_param("list_entry_id", "56517"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 20406836, "field_id": 1284, "entity_id": 38706, "list_entry_id": 56517, "value": "Ada"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/field-values"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 20406837, "field_id": 1284, "entity_id": 38706, "list_entry_id": 56517, "value": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let values = client
        .get_field_values(&FieldValueQuery::person(38706).with_list_entry(56517))
        .await
        .unwrap();
    assert_eq!(values[0].value, serde_json::json!("Ada"));

    let created = client
        .create_field_value(&NewFieldValue {
            field_id: 1284,
            entity_id: 38706,
            list_entry_id: Some(56517),
            value: serde_json::json!(3),
        })
        .await
        .unwrap();
    assert_eq!(created.id, 20406837);

    let received = server.received_requests().await.unwrap();
    assert_eq!(
        received[0].url.query(),
        Some("person_id=38706&list_entry_id=56517")
    );
}
