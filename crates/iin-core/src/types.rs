//! Decoded IIN type definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Gender encoded by the 7th digit of an IIN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Gender::Male => "male",
            Gender::Female => "female",
        };
        write!(f, "{}", s)
    }
}

/// Identity attributes decoded from a valid IIN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedIin {
    pub birth_date: NaiveDate,
    pub gender: Gender,
}
