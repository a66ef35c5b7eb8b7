use tracing::instrument;

use crate::error::Result;
use crate::relationship_strength::RelationshipStrength;

const USAGE: &str = "get_relationship_strength(internal_id, external_id)";

impl super::AffinityRestClient {
    /// Get the relationship strength between an internal and an external person.
    ///
    /// Both identifiers are required; if either is missing the call fails
    /// without sending a request.
    #[instrument(skip(self))]
    pub async fn get_relationship_strength(
        &self,
        internal_id: Option<u64>,
        external_id: Option<u64>,
    ) -> Result<Vec<RelationshipStrength>> {
        let (Some(internal_id), Some(external_id)) = (internal_id, external_id) else {
            return Err(super::usage_error(USAGE));
        };
        self.client
            .get_json_with_query(
                "relationship-strengths",
                &[
                    ("internal_id", Some(internal_id.to_string())),
                    ("external_id", Some(external_id.to_string())),
                ],
            )
            .await
            .map_err(Into::into)
    }
}
