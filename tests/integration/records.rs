use affinity_api::rest::{NewNote, NewOpportunity, NewPerson, PersonUpdate, SearchOptions};
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{basic_auth_header, setup};

#[tokio::test]
async fn test_person_lifecycle() {
    let (server, client) = setup().await;
    let person = serde_json::json!({
        "id": 38706,
        "type": 0,
        "first_name": "Ada",
        "last_name": "Lovelace",
        "emails": ["ada@example.com"],
        "primary_email": "ada@example.com",
        "organization_ids": [42]
    });

    Mock::given(method("GET"))
        .and(path("/persons"))
        .and(query_param("term", "ada"))
        .and(query_param("page_size", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "persons": [person.clone()],
            "next_page_token": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/persons"))
        .and(header("Authorization", basic_auth_header().as_str()))
        .and(body_string(
            "first_name=Ada&last_name=Lovelace&emails%5B%5D=ada%40example.com&organization_ids%5B%5D=42",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(&person))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/persons/38706"))
        .and(body_string("last_name=Byron"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&person))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/persons/38706"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let page = client
        .search_persons("ada", SearchOptions::new().page_size(10))
        .await
        .unwrap();
    assert_eq!(page.persons.len(), 1);
    assert!(!page.persons[0].is_internal());

    let created = client
        .create_person(
            &NewPerson::new("Ada", "Lovelace")
                .email("ada@example.com")
                .organization(42),
        )
        .await
        .unwrap();
    assert_eq!(created.organization_ids, vec![42]);

    client
        .update_person(
            created.id,
            &PersonUpdate {
                last_name: Some("Byron".to_string()),
                ..PersonUpdate::default()
            },
        )
        .await
        .unwrap();

    assert!(client.delete_person(created.id).await.unwrap().success);
}

#[tokio::test]
async fn test_get_organization_example() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/organizations/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 42, "name": "Acme", "domain": "acme.com", "global": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let org = client.get_organization(42).await.unwrap();
    assert_eq!(org.id, 42);
    assert_eq!(org.name, "Acme");
    assert_eq!(org.domain.as_deref(), Some("acme.com"));
    assert!(org.person_ids.is_empty());
}

#[tokio::test]
async fn test_opportunity_note_and_strength() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/opportunities"))
        .and(body_string("name=Seed&list_id=451&organization_ids%5B%5D=42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 117, "name": "Seed", "person_ids": [], "organization_ids": [42], "list_entries": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/notes"))
        .and(body_string("opportunity_ids%5B%5D=117&content=Term+sheet+sent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 5, "creator_id": 1, "person_ids": [], "organization_ids": [],
            "opportunity_ids": [117], "content": "Term sheet sent",
            "created_at": "2024-05-01T12:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/relationship-strengths"))
        .and(query_param("internal_id", "1"))
        .and(query_param("external_id", "38706"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"internal_id": 1, "external_id": 38706, "strength": 0.82}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let opportunity = client
        .create_opportunity(&NewOpportunity::new("Seed", 451).organization(42))
        .await
        .unwrap();
    let note = client
        .create_note(&NewNote::new("Term sheet sent").opportunity(opportunity.id))
        .await
        .unwrap();
    assert_eq!(note.opportunity_ids, vec![117]);
    assert!(note.created_at_utc().is_some());

    let strengths = client
        .get_relationship_strength(Some(1), Some(38706))
        .await
        .unwrap();
    assert!(strengths[0].strength > 0.8);
}
