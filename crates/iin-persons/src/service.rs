//! Person directory service implementation.

use crate::{
    errors::{PersonError, Result},
    traits::PersonDirectory,
    types::Person,
};
use async_trait::async_trait;
use iin_core::DecodedIin;
use iin_storage::{Storage, CF_PERSONS};
use std::sync::Arc;
use tracing::info;

/// Person directory backed by a [`Storage`] implementation
pub struct PersonDirectoryService<S>
where
    S: Storage,
{
    storage: Arc<S>,
}

impl<S> PersonDirectoryService<S>
where
    S: Storage,
{
    /// Create a new person directory service
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl<S> PersonDirectory for PersonDirectoryService<S>
where
    S: Storage + 'static,
{
    fn validate_iin(&self, iin: &str) -> iin_core::Result<DecodedIin> {
        iin_core::validate(iin)
    }

    async fn create(&self, person: Person) -> Result<String> {
        iin_core::validate(&person.iin)?;

        if self.storage.exists(CF_PERSONS, &person.iin).await? {
            return Err(PersonError::AlreadyExists(person.iin));
        }

        self.storage.put(CF_PERSONS, &person.iin, &person).await?;

        info!("Person created: {}", person.iin);
        Ok(person.iin)
    }

    async fn get(&self, iin: &str) -> Result<Person> {
        iin_core::validate(iin)?;

        self.storage
            .get(CF_PERSONS, &iin.to_string())
            .await?
            .ok_or_else(|| PersonError::NotFound(iin.to_string()))
    }

    async fn find_by_name(&self, fragment: &str) -> Result<Vec<Person>> {
        let fragment = fragment.to_lowercase();

        let persons: Vec<(Vec<u8>, Person)> = self.storage.scan_all(CF_PERSONS).await?;
        let matches: Vec<Person> = persons
            .into_iter()
            .map(|(_, person)| person)
            .filter(|person| person.name.to_lowercase().contains(&fragment))
            .collect();

        info!("Found {} persons matching {:?}", matches.len(), fragment);
        Ok(matches)
    }
}
