//! IIN validation algorithm.

use crate::errors::{IinError, Result};
use crate::types::{DecodedIin, Gender};
use chrono::NaiveDate;

/// First-pass checksum weights for digits 1-11.
const WEIGHTS_PASS_1: [u32; 11] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

/// Second-pass weights, used when the first pass leaves remainder 10.
const WEIGHTS_PASS_2: [u32; 11] = [3, 4, 5, 6, 7, 8, 9, 10, 11, 1, 2];

/// Validate an IIN and decode its birth date and gender.
///
/// Checks run in order and short-circuit on the first failure: length,
/// digits, century/gender digit, calendar date, checksum. See [`IinError`]
/// for the rejection taxonomy.
pub fn validate(iin: &str) -> Result<DecodedIin> {
    if iin.len() != 12 {
        return Err(IinError::WrongLength);
    }

    let mut digits = [0u32; 12];
    for (i, c) in iin.chars().enumerate() {
        digits[i] = c.to_digit(10).ok_or(IinError::NonDigitCharacter)?;
    }

    // Date components: YYMMDD
    let yy = digits[0] * 10 + digits[1];
    let mm = digits[2] * 10 + digits[3];
    let dd = digits[4] * 10 + digits[5];

    // The 7th digit jointly encodes birth century and gender
    let (century_base, gender) = match digits[6] {
        1 => (1800, Gender::Male),
        2 => (1800, Gender::Female),
        3 => (1900, Gender::Male),
        4 => (1900, Gender::Female),
        5 => (2000, Gender::Male),
        6 => (2000, Gender::Female),
        _ => return Err(IinError::UnrecognizedCenturyDigit),
    };

    let birth_date = NaiveDate::from_ymd_opt(century_base + yy as i32, mm, dd)
        .ok_or(IinError::InvalidCalendarDate)?;

    let mut check = weighted_mod11(&digits, &WEIGHTS_PASS_1);
    if check == 10 {
        check = weighted_mod11(&digits, &WEIGHTS_PASS_2);
        if check == 10 {
            return Err(IinError::UnverifiableChecksum);
        }
    }
    if check != digits[11] {
        return Err(IinError::ChecksumMismatch);
    }

    Ok(DecodedIin { birth_date, gender })
}

/// Weighted sum of the first 11 digits, reduced mod 11.
fn weighted_mod11(digits: &[u32; 12], weights: &[u32; 11]) -> u32 {
    digits
        .iter()
        .zip(weights.iter())
        .map(|(d, w)| d * w)
        .sum::<u32>()
        % 11
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Append the check digit the two-pass algorithm produces for an
    /// 11-digit prefix. Returns None when both passes leave remainder 10.
    fn with_check_digit(prefix: &str) -> Option<String> {
        assert_eq!(prefix.len(), 11);
        let mut digits = [0u32; 12];
        for (i, c) in prefix.chars().enumerate() {
            digits[i] = c.to_digit(10).unwrap();
        }
        let mut check = weighted_mod11(&digits, &WEIGHTS_PASS_1);
        if check == 10 {
            check = weighted_mod11(&digits, &WEIGHTS_PASS_2);
            if check == 10 {
                return None;
            }
        }
        Some(format!("{}{}", prefix, check))
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_valid_male_1900s() {
        let iin = with_check_digit("80010130092").unwrap();
        assert_eq!(iin, "800101300928");
        let decoded = validate(&iin).unwrap();
        assert_eq!(decoded.birth_date, date(1980, 1, 1));
        assert_eq!(decoded.gender, Gender::Male);
    }

    #[test]
    fn test_valid_female_1900s() {
        let iin = with_check_digit("80010140092").unwrap();
        assert_eq!(iin, "800101400924");
        let decoded = validate(&iin).unwrap();
        assert_eq!(decoded.birth_date, date(1980, 1, 1));
        assert_eq!(decoded.gender, Gender::Female);
    }

    #[test]
    fn test_century_digit_decodes_all_six_cases() {
        let cases = [
            ('1', 1880, Gender::Male),
            ('2', 1880, Gender::Female),
            ('3', 1980, Gender::Male),
            ('4', 1980, Gender::Female),
            ('5', 2080, Gender::Male),
            ('6', 2080, Gender::Female),
        ];
        for (digit, year, gender) in cases {
            let prefix = format!("800101{}0092", digit);
            let iin = with_check_digit(&prefix).unwrap();
            let decoded = validate(&iin).unwrap();
            assert_eq!(decoded.birth_date, date(year, 1, 1), "digit {}", digit);
            assert_eq!(decoded.gender, gender, "digit {}", digit);
        }
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(validate("80010130092"), Err(IinError::WrongLength));
        assert_eq!(validate(""), Err(IinError::WrongLength));
        assert_eq!(validate("8001013009244"), Err(IinError::WrongLength));
    }

    #[test]
    fn test_non_digit_character() {
        assert_eq!(validate("80010A300924"), Err(IinError::NonDigitCharacter));
        assert_eq!(validate("8001013009 4"), Err(IinError::NonDigitCharacter));
    }

    #[test]
    fn test_multibyte_input_is_rejected_not_panicking() {
        // 12 bytes but non-ASCII content
        assert_eq!(validate("8001013009\u{441}"), Err(IinError::NonDigitCharacter));
    }

    #[test]
    fn test_unrecognized_century_digit() {
        for digit in ['0', '7', '8', '9'] {
            let iin = format!("800101{}00924", digit);
            assert_eq!(
                validate(&iin),
                Err(IinError::UnrecognizedCenturyDigit),
                "digit {}",
                digit
            );
        }
    }

    #[test]
    fn test_invalid_calendar_date() {
        // Day 32 does not exist
        assert_eq!(validate("800132300000"), Err(IinError::InvalidCalendarDate));
        // Month 13 does not exist
        assert_eq!(validate("801301300000"), Err(IinError::InvalidCalendarDate));
        // April has 30 days
        assert_eq!(validate("800431300000"), Err(IinError::InvalidCalendarDate));
        // Month and day of zero are not calendar values
        assert_eq!(validate("800001300000"), Err(IinError::InvalidCalendarDate));
        // 1981 is not a leap year
        assert_eq!(validate("810229300000"), Err(IinError::InvalidCalendarDate));
    }

    #[test]
    fn test_leap_day_in_leap_year_is_valid() {
        let iin = with_check_digit("80022930092").unwrap();
        let decoded = validate(&iin).unwrap();
        assert_eq!(decoded.birth_date, date(1980, 2, 29));
    }

    #[test]
    fn test_checksum_mismatch() {
        // Correct check digit for this prefix is 8
        assert_eq!(validate("800101300924"), Err(IinError::ChecksumMismatch));
        assert_eq!(validate("800101400925"), Err(IinError::ChecksumMismatch));
    }

    #[test]
    fn test_second_pass_checksum() {
        // First pass leaves remainder 10, second pass yields 0
        let decoded = validate("100101300000").unwrap();
        assert_eq!(decoded.birth_date, date(1910, 1, 1));
        assert_eq!(decoded.gender, Gender::Male);
    }

    #[test]
    fn test_unverifiable_checksum() {
        // Both passes leave remainder 10; no 12th digit can make it valid
        for digit in 0..10 {
            let iin = format!("00010130420{}", digit);
            assert_eq!(validate(&iin), Err(IinError::UnverifiableChecksum));
        }
        assert!(with_check_digit("00010130420").is_none());
    }

    #[test]
    fn test_at_most_one_check_digit_validates() {
        for prefix in ["80010130092", "80010140092", "10010130000", "00010130420"] {
            let valid_count = (0..10)
                .filter(|d| validate(&format!("{}{}", prefix, d)).is_ok())
                .count();
            assert!(valid_count <= 1, "prefix {}", prefix);
        }
    }

    #[test]
    fn test_deterministic() {
        for _ in 0..3 {
            assert_eq!(validate("800101400924"), validate("800101400924"));
            assert_eq!(validate("800101300924"), validate("800101300924"));
        }
    }
}
