//! IIN validation error types.

use thiserror::Error;

/// Reasons an IIN can be rejected.
///
/// Every malformed input maps to exactly one of these variants; validation
/// never panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IinError {
    /// Input is not exactly 12 characters
    #[error("IIN must contain exactly 12 digits")]
    WrongLength,

    /// Input contains a character outside 0-9
    #[error("IIN must consist of digits only")]
    NonDigitCharacter,

    /// 7th digit is not in 1..=6
    #[error("7th digit does not encode a known century and gender")]
    UnrecognizedCenturyDigit,

    /// Encoded month/day combination does not exist for the derived year
    #[error("IIN encodes a nonexistent birth date")]
    InvalidCalendarDate,

    /// Both checksum passes leave remainder 10; no check digit can verify
    #[error("IIN checksum is unverifiable")]
    UnverifiableChecksum,

    /// Computed check digit differs from the 12th digit
    #[error("IIN check digit does not match")]
    ChecksumMismatch,
}

/// Result type for IIN validation
pub type Result<T> = std::result::Result<T, IinError>;
