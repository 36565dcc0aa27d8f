//! Person directory trait definitions.

use crate::{errors::Result, types::Person};
use async_trait::async_trait;
use iin_core::DecodedIin;

/// Person directory subsystem trait
#[async_trait]
pub trait PersonDirectory: Send + Sync {
    /// Validate an IIN and decode its birth date and gender
    fn validate_iin(&self, iin: &str) -> iin_core::Result<DecodedIin>;

    /// Store a new person record; the IIN must validate and be unused.
    /// Returns the IIN the record is keyed by.
    async fn create(&self, person: Person) -> Result<String>;

    /// Fetch a person by IIN; the IIN must validate
    async fn get(&self, iin: &str) -> Result<Person>;

    /// Find persons whose name contains the fragment, case-insensitively
    async fn find_by_name(&self, fragment: &str) -> Result<Vec<Person>>;
}
