use affinity_client::FormBody;
use tracing::instrument;

use crate::error::Result;
use crate::field_value::{FieldValue, FieldValueQuery, NewFieldValue};
use crate::types::DeleteResult;

impl super::AffinityRestClient {
    /// Get the field values attached to a person, organization, opportunity
    /// or list entry.
    ///
    /// At least one filter of `query` must be set; otherwise the call fails
    /// without sending a request.
    #[instrument(skip(self))]
    pub async fn get_field_values(&self, query: &FieldValueQuery) -> Result<Vec<FieldValue>> {
        if query.is_empty() {
            return Err(super::usage_error(
                "get_field_values(person_id | organization_id | opportunity_id | list_entry_id)",
            ));
        }
        self.client
            .get_json_with_query("field-values", &query.params())
            .await
            .map_err(Into::into)
    }

    /// Create a field value.
    #[instrument(skip(self, new_value))]
    pub async fn create_field_value(&self, new_value: &NewFieldValue) -> Result<FieldValue> {
        self.client
            .post_form("field-values", new_value.to_form())
            .await
            .map_err(Into::into)
    }

    /// Replace the value of an existing field value.
    ///
    /// A `null` value is rejected without sending a request; use
    /// [`delete_field_value`](Self::delete_field_value) to clear a cell.
    #[instrument(skip(self, value))]
    pub async fn update_field_value(
        &self,
        field_value_id: u64,
        value: &serde_json::Value,
    ) -> Result<FieldValue> {
        if value.is_null() {
            return Err(super::usage_error("update_field_value(field_value_id, value)"));
        }
        let path = format!("field-values/{}", field_value_id);
        let form = FormBody::new().json_value("value", value);
        self.client.put_form(&path, form).await.map_err(Into::into)
    }

    /// Delete a field value.
    #[instrument(skip(self))]
    pub async fn delete_field_value(&self, field_value_id: u64) -> Result<DeleteResult> {
        let path = format!("field-values/{}", field_value_id);
        self.client.delete_json(&path).await.map_err(Into::into)
    }
}
