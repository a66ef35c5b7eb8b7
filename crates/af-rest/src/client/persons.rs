use tracing::instrument;

use crate::error::Result;
use crate::field::Field;
use crate::person::{NewPerson, Person, PersonSearchResult, PersonUpdate};
use crate::search::SearchOptions;
use crate::types::DeleteResult;

const SEARCH_USAGE: &str = "search_persons(term, page_size, page_token)";

impl super::AffinityRestClient {
    /// Search persons by name or email.
    ///
    /// A blank `term` is rejected without sending a request.
    #[instrument(skip(self))]
    pub async fn search_persons(
        &self,
        term: &str,
        options: SearchOptions,
    ) -> Result<PersonSearchResult> {
        let term = super::require_term(term, SEARCH_USAGE)?;
        self.client
            .get_json_with_query(
                "persons",
                &[
                    ("term", Some(term.to_string())),
                    ("page_size", options.page_size.map(|s| s.to_string())),
                    ("page_token", options.page_token),
                ],
            )
            .await
            .map_err(Into::into)
    }

    /// Get a single person, including their list entries.
    #[instrument(skip(self))]
    pub async fn get_person(&self, person_id: u64) -> Result<Person> {
        let path = format!("persons/{}", person_id);
        self.client.get_json(&path).await.map_err(Into::into)
    }

    /// Create a person.
    #[instrument(skip(self, person))]
    pub async fn create_person(&self, person: &NewPerson) -> Result<Person> {
        self.client
            .post_form("persons", person.to_form())
            .await
            .map_err(Into::into)
    }

    /// Update a person. Only fields set on `changes` are sent.
    #[instrument(skip(self, changes))]
    pub async fn update_person(&self, person_id: u64, changes: &PersonUpdate) -> Result<Person> {
        let path = format!("persons/{}", person_id);
        self.client
            .put_form(&path, changes.to_form())
            .await
            .map_err(Into::into)
    }

    /// Delete a person.
    #[instrument(skip(self))]
    pub async fn delete_person(&self, person_id: u64) -> Result<DeleteResult> {
        let path = format!("persons/{}", person_id);
        self.client.delete_json(&path).await.map_err(Into::into)
    }

    /// Get the global fields defined on persons.
    #[instrument(skip(self))]
    pub async fn get_person_fields(&self) -> Result<Vec<Field>> {
        self.client.get_json("persons/fields").await.map_err(Into::into)
    }
}
