use tracing::instrument;

use crate::error::Result;
use crate::note::{NewNote, Note};

impl super::AffinityRestClient {
    /// Create a note attached to persons, organizations and/or opportunities.
    #[instrument(skip(self, note))]
    pub async fn create_note(&self, note: &NewNote) -> Result<Note> {
        self.client
            .post_form("notes", note.to_form())
            .await
            .map_err(Into::into)
    }
}
