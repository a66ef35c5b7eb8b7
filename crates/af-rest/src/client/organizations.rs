use tracing::instrument;

use crate::error::Result;
use crate::field::Field;
use crate::organization::{
    NewOrganization, Organization, OrganizationSearchResult, OrganizationUpdate,
};
use crate::search::SearchOptions;
use crate::types::DeleteResult;

const SEARCH_USAGE: &str = "search_organizations(term, page_size, page_token)";

impl super::AffinityRestClient {
    /// Search organizations by name or domain.
    ///
    /// A blank `term` is rejected without sending a request.
    #[instrument(skip(self))]
    pub async fn search_organizations(
        &self,
        term: &str,
        options: SearchOptions,
    ) -> Result<OrganizationSearchResult> {
        let term = super::require_term(term, SEARCH_USAGE)?;
        self.client
            .get_json_with_query(
                "organizations",
                &[
                    ("term", Some(term.to_string())),
                    ("page_size", options.page_size.map(|s| s.to_string())),
                    ("page_token", options.page_token),
                ],
            )
            .await
            .map_err(Into::into)
    }

    /// Get a single organization, including its list entries.
    #[instrument(skip(self))]
    pub async fn get_organization(&self, organization_id: u64) -> Result<Organization> {
        let path = format!("organizations/{}", organization_id);
        self.client.get_json(&path).await.map_err(Into::into)
    }

    /// Create an organization.
    #[instrument(skip(self, organization))]
    pub async fn create_organization(&self, organization: &NewOrganization) -> Result<Organization> {
        self.client
            .post_form("organizations", organization.to_form())
            .await
            .map_err(Into::into)
    }

    /// Update an organization. Only fields set on `changes` are sent.
    #[instrument(skip(self, changes))]
    pub async fn update_organization(
        &self,
        organization_id: u64,
        changes: &OrganizationUpdate,
    ) -> Result<Organization> {
        let path = format!("organizations/{}", organization_id);
        self.client
            .put_form(&path, changes.to_form())
            .await
            .map_err(Into::into)
    }

    /// Delete an organization.
    #[instrument(skip(self))]
    pub async fn delete_organization(&self, organization_id: u64) -> Result<DeleteResult> {
        let path = format!("organizations/{}", organization_id);
        self.client.delete_json(&path).await.map_err(Into::into)
    }

    /// Get the global fields defined on organizations.
    #[instrument(skip(self))]
    pub async fn get_organization_fields(&self) -> Result<Vec<Field>> {
        self.client
            .get_json("organizations/fields")
            .await
            .map_err(Into::into)
    }
}
