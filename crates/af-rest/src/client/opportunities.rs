use tracing::instrument;

use crate::error::Result;
use crate::opportunity::{NewOpportunity, Opportunity, OpportunitySearchResult, OpportunityUpdate};
use crate::search::SearchOptions;
use crate::types::DeleteResult;

const SEARCH_USAGE: &str = "search_opportunities(term, page_size, page_token)";

impl super::AffinityRestClient {
    /// Search opportunities by name.
    ///
    /// A blank `term` is rejected without sending a request.
    #[instrument(skip(self))]
    pub async fn search_opportunities(
        &self,
        term: &str,
        options: SearchOptions,
    ) -> Result<OpportunitySearchResult> {
        let term = super::require_term(term, SEARCH_USAGE)?;
        self.client
            .get_json_with_query(
                "opportunities",
                &[
                    ("term", Some(term.to_string())),
                    ("page_size", options.page_size.map(|s| s.to_string())),
                    ("page_token", options.page_token),
                ],
            )
            .await
            .map_err(Into::into)
    }

    /// Get a single opportunity.
    #[instrument(skip(self))]
    pub async fn get_opportunity(&self, opportunity_id: u64) -> Result<Opportunity> {
        let path = format!("opportunities/{}", opportunity_id);
        self.client.get_json(&path).await.map_err(Into::into)
    }

    /// Create an opportunity on a list.
    #[instrument(skip(self, opportunity))]
    pub async fn create_opportunity(&self, opportunity: &NewOpportunity) -> Result<Opportunity> {
        self.client
            .post_form("opportunities", opportunity.to_form())
            .await
            .map_err(Into::into)
    }

    /// Update an opportunity. Only fields set on `changes` are sent.
    #[instrument(skip(self, changes))]
    pub async fn update_opportunity(
        &self,
        opportunity_id: u64,
        changes: &OpportunityUpdate,
    ) -> Result<Opportunity> {
        let path = format!("opportunities/{}", opportunity_id);
        self.client
            .put_form(&path, changes.to_form())
            .await
            .map_err(Into::into)
    }

    /// Delete an opportunity.
    #[instrument(skip(self))]
    pub async fn delete_opportunity(&self, opportunity_id: u64) -> Result<DeleteResult> {
        let path = format!("opportunities/{}", opportunity_id);
        self.client.delete_json(&path).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::super::AffinityRestClient;
    use crate::opportunity::{NewOpportunity, OpportunityUpdate};
    use crate::search::SearchOptions;
    use affinity_client::AffinityCredentials;
    use wiremock::matchers::{body_string, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> AffinityRestClient {
        AffinityRestClient::with_credentials(
            AffinityCredentials::new("test-key").with_base_url(server.uri()),
        )
        .unwrap()
    }

    fn opportunity_json() -> serde_json::Value {
        serde_json::json!({
            "id": 117,
            "name": "Series A",
            "person_ids": [38706],
            "organization_ids": [21442],
            "list_entries": []
        })
    }

    #[tokio::test]
    async fn test_search_opportunities() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/opportunities"))
            .and(query_param("term", "series"))
            .and(query_param("page_size", "25"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "opportunities": [opportunity_json()],
                "next_page_token": "eyJwYWdlIjoyfQ"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let page = client(&mock_server)
            .search_opportunities("series", SearchOptions::new().page_size(25))
            .await
            .unwrap();
        assert_eq!(page.opportunities[0].name, "Series A");
        assert!(page.next_page_token.is_some());
    }

    #[tokio::test]
    async fn test_search_opportunities_empty_term() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let err = client(&mock_server)
            .search_opportunities("", SearchOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[tokio::test]
    async fn test_opportunity_crud() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/opportunities"))
            .and(body_string(
                "name=Series+A&list_id=263&person_ids%5B%5D=38706&organization_ids%5B%5D=21442",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(opportunity_json()))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/opportunities/117"))
            .respond_with(ResponseTemplate::new(200).set_body_json(opportunity_json()))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("PUT"))
            .and(path("/opportunities/117"))
            .and(body_string("name=Series+B"))
            .respond_with(ResponseTemplate::new(200).set_body_json(opportunity_json()))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/opportunities/117"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client(&mock_server);
        let created = client
            .create_opportunity(
                &NewOpportunity::new("Series A", 263)
                    .person(38706)
                    .organization(21442),
            )
            .await
            .unwrap();
        assert_eq!(created.id, 117);

        let fetched = client.get_opportunity(117).await.unwrap();
        assert_eq!(fetched, created);

        client
            .update_opportunity(
                117,
                &OpportunityUpdate {
                    name: Some("Series B".to_string()),
                    ..OpportunityUpdate::default()
                },
            )
            .await
            .unwrap();

        assert!(client.delete_opportunity(117).await.unwrap().success);
    }
}
