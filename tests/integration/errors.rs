use affinity_api::rest::{ErrorKind, FieldValueQuery, SearchOptions};
use affinity_api::{AffinityCredentials, AffinityRestClient, ClientConfig, SuccessPolicy};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::setup;

#[tokio::test]
async fn test_missing_arguments_send_no_request() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let errors = vec![
        client
            .search_persons("", SearchOptions::default())
            .await
            .unwrap_err(),
        client
            .search_organizations("  ", SearchOptions::default())
            .await
            .unwrap_err(),
        client
            .search_opportunities("", SearchOptions::default())
            .await
            .unwrap_err(),
        client
            .get_field_values(&FieldValueQuery::default())
            .await
            .unwrap_err(),
        client
            .get_relationship_strength(None, None)
            .await
            .unwrap_err(),
    ];

    for err in errors {
        assert!(matches!(err.kind, ErrorKind::InvalidInput(_)), "{err}");
        assert!(err.to_string().contains("Usage:"));
    }
}

#[tokio::test]
async fn test_server_errors_surface_status_and_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/lists/1"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Rate limit exceeded"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/persons/2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.get_list(1).await.unwrap_err();
    assert_eq!(err.status(), Some(429));
    assert_eq!(err.body(), Some("Rate limit exceeded"));

    let err = client.get_person(2).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_malformed_json_is_client_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/lists"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.get_all_lists().await.unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Client(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_any_2xx_policy_accepts_created() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lists/3"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 3, "type": 1, "name": "Portfolio", "public": true, "owner_id": 1, "list_size": 0
        })))
        .expect(2)
        .mount(&server)
        .await;

    let credentials = AffinityCredentials::new("key").with_base_url(server.uri());

    let strict = AffinityRestClient::with_credentials(credentials.clone()).unwrap();
    assert_eq!(strict.get_list(3).await.unwrap_err().status(), Some(201));

    let lenient = AffinityRestClient::with_config(
        credentials,
        ClientConfig::builder()
            .with_success_policy(SuccessPolicy::Any2xx)
            .build(),
    )
    .unwrap();
    assert_eq!(lenient.get_list(3).await.unwrap().name, "Portfolio");
}
