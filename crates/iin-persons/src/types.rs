//! Person record type definitions.

use serde::{Deserialize, Serialize};

/// Person record, keyed by IIN
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub iin: String,
    pub name: String,
    pub phone: String,
}
