use tracing::instrument;

use crate::error::Result;
use crate::list::List;

impl super::AffinityRestClient {
    /// Get every list visible to the API key owner.
    #[instrument(skip(self))]
    pub async fn get_all_lists(&self) -> Result<Vec<List>> {
        self.client.get_json("lists").await.map_err(Into::into)
    }

    /// Get a single list.
    #[instrument(skip(self))]
    pub async fn get_list(&self, list_id: u64) -> Result<List> {
        let path = format!("lists/{}", list_id);
        self.client.get_json(&path).await.map_err(Into::into)
    }
}
