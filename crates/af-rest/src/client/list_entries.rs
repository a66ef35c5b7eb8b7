use affinity_client::FormBody;
use tracing::instrument;

use crate::error::Result;
use crate::list_entry::ListEntry;
use crate::types::DeleteResult;

impl super::AffinityRestClient {
    /// Get every entry of a list.
    #[instrument(skip(self))]
    pub async fn get_all_list_entries(&self, list_id: u64) -> Result<Vec<ListEntry>> {
        let path = format!("lists/{}/list-entries", list_id);
        self.client.get_json(&path).await.map_err(Into::into)
    }

    /// Get a single list entry.
    #[instrument(skip(self))]
    pub async fn get_list_entry(&self, list_id: u64, list_entry_id: u64) -> Result<ListEntry> {
        let path = format!("lists/{}/list-entries/{}", list_id, list_entry_id);
        self.client.get_json(&path).await.map_err(Into::into)
    }

    /// Add an entity to a list.
    ///
    /// `creator_id` credits an internal person as the creator; when `None`
    /// Affinity uses the API key owner.
    #[instrument(skip(self))]
    pub async fn create_list_entry(
        &self,
        list_id: u64,
        entity_id: u64,
        creator_id: Option<u64>,
    ) -> Result<ListEntry> {
        let path = format!("lists/{}/list-entries", list_id);
        let form = FormBody::new()
            .field("entity_id", entity_id)
            .field_opt("creator_id", creator_id);
        self.client.post_form(&path, form).await.map_err(Into::into)
    }

    /// Remove an entry from a list.
    #[instrument(skip(self))]
    pub async fn delete_list_entry(&self, list_id: u64, list_entry_id: u64) -> Result<DeleteResult> {
        let path = format!("lists/{}/list-entries/{}", list_id, list_entry_id);
        self.client.delete_json(&path).await.map_err(Into::into)
    }
}
