//! # iin-core
//!
//! IIN (Individual Identification Number) validation.
//!
//! An IIN is a 12-digit personal identifier encoding birth date, century,
//! gender, and a mod-11 check digit. This crate decodes and verifies IINs
//! as a pure function: no I/O, no state, no dependency on storage or
//! transport.

#![warn(clippy::all)]

pub mod errors;
pub mod types;
pub mod validate;

pub use errors::{IinError, Result};
pub use types::{DecodedIin, Gender};
pub use validate::validate;
