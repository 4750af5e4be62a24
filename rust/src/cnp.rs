//! CNP encoding, validation and decoding.
//!
//! Format: `S YYMMDD RR NNN C` (13 digits, no separators)
//!
//! `S` folds sex, birth era and foreign residency into one digit, `RR` is the
//! region code, `NNN` the per-day serial and `C` a weighted mod-11 check
//! digit over the first 12 digits.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::region::Region;

/// Length of a complete CNP.
pub const CNP_LENGTH: usize = 13;

/// Length of the partial CNP the check digit is computed over.
pub const PARTIAL_LENGTH: usize = CNP_LENGTH - 1;

const CHECK_WEIGHTS: [u32; PARTIAL_LENGTH] = [2, 7, 9, 1, 4, 6, 3, 5, 8, 2, 7, 9];

static CNP_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{13}$").unwrap());

/// Errors that can occur during CNP operations.
#[derive(Error, Debug)]
pub enum CnpError {
    #[error("Invalid serial {0}: must be in range 1-999")]
    InvalidSerial(u16),
    #[error("Birth year {0} is out of range: allowed range is 1800-2099")]
    YearOutOfRange(i32),
    #[error("Invalid partial CNP: expected 12 digits, got {0} characters")]
    InvalidPartialLength(usize),
    #[error("Invalid partial CNP: must contain only ASCII digits")]
    InvalidPartialDigit,
    #[error("Invalid CNP: {0}")]
    InvalidCnp(String),
    #[error("Unknown region code: {0}")]
    UnknownRegionCode(u8),
    #[error("Unknown region name: {0}")]
    UnknownRegionName(String),
    #[error("Invalid sex letter: {0}")]
    InvalidSex(String),
}

/// Sex marker, written into the lead digit as a +0/+1 offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    /// Both sexes, in lead-digit-offset order.
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }

    fn offset(self) -> u8 {
        match self {
            Self::Male => 0,
            Self::Female => 1,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = CnpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "M" | "m" => Ok(Self::Male),
            "F" | "f" => Ok(Self::Female),
            other => Err(CnpError::InvalidSex(other.to_string())),
        }
    }
}

/// A structured CNP, immutable once constructed.
///
/// The textual form is derived on demand with [`Cnp::full`]; derivation can
/// fail for birth years outside the supported eras, so there is no `Display`
/// impl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cnp {
    sex: Sex,
    birth_date: NaiveDate,
    region: Region,
    serial: u16,
    resident: bool,
}

impl Cnp {
    /// Build a CNP from its fields.
    ///
    /// `serial` orders people registered on the same day in the same region
    /// and must be in 1-999. `resident` marks foreign residents, whose lead
    /// digit is 7/8 regardless of birth era.
    pub fn new(
        sex: Sex,
        birth_date: NaiveDate,
        region: Region,
        serial: u16,
        resident: bool,
    ) -> Result<Self, CnpError> {
        if serial == 0 || serial > 999 {
            return Err(CnpError::InvalidSerial(serial));
        }

        Ok(Self {
            sex,
            birth_date,
            region,
            serial,
            resident,
        })
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn serial(&self) -> u16 {
        self.serial
    }

    pub fn resident(&self) -> bool {
        self.resident
    }

    /// Lead digit folding residency, birth era and sex together.
    ///
    /// Residents take base 7 without any era check; otherwise the base is 1
    /// for 1900-1999, 3 for 1800-1899 and 5 for 2000-2099, plus one for
    /// females.
    pub fn lead_digit(&self) -> Result<u8, CnpError> {
        let base = if self.resident {
            7
        } else {
            match self.birth_date.year() {
                1900..=1999 => 1,
                1800..=1899 => 3,
                2000..=2099 => 5,
                year => return Err(CnpError::YearOutOfRange(year)),
            }
        };

        Ok(base + self.sex.offset())
    }

    /// First 12 digits of the identifier, before the check digit.
    pub fn partial(&self) -> Result<String, CnpError> {
        Ok(format!(
            "{}{}{:02}{:02}{:02}{:03}",
            self.lead_digit()?,
            self.birth_date.format("%y"),
            self.birth_date.month(),
            self.birth_date.day(),
            self.region.code(),
            self.serial,
        ))
    }

    /// Complete 13-digit identifier.
    pub fn full(&self) -> Result<String, CnpError> {
        let partial = self.partial()?;
        let check = compute_check_digit(&partial)?;
        Ok(format!("{partial}{check}"))
    }
}

/// Check digit for a 12-digit partial CNP.
///
/// Weighted sum of the digits mod 11; a remainder of 10 maps to check digit
/// 1, everything below stays as is, so the result is always a single digit.
pub fn compute_check_digit(partial: &str) -> Result<u8, CnpError> {
    if partial.len() != PARTIAL_LENGTH {
        return Err(CnpError::InvalidPartialLength(partial.len()));
    }

    let mut sum: u32 = 0;
    for (byte, weight) in partial.bytes().zip(CHECK_WEIGHTS) {
        if !byte.is_ascii_digit() {
            return Err(CnpError::InvalidPartialDigit);
        }
        sum += u32::from(byte - b'0') * weight;
    }

    let remainder = sum % 11;
    if remainder < 10 {
        Ok(remainder as u8)
    } else {
        Ok(1)
    }
}

/// Check that a string is a well-formed CNP: exactly 13 ASCII digits whose
/// last digit matches the checksum of the first 12. Total over any input,
/// never panics.
pub fn validate_cnp(cnp: &str) -> bool {
    if !CNP_SHAPE.is_match(cnp) {
        return false;
    }

    let (partial, check) = cnp.split_at(PARTIAL_LENGTH);
    match compute_check_digit(partial) {
        Ok(expected) => check.as_bytes()[0] - b'0' == expected,
        Err(_) => false,
    }
}

/// Decoded CNP fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedCnp {
    pub raw: String,
    pub sex: Sex,
    pub birth_date: NaiveDate,
    pub region: Region,
    pub serial: u16,
    pub resident: bool,
}

impl ParsedCnp {
    pub fn birth_year(&self) -> i32 {
        self.birth_date.year()
    }

    pub fn birth_month(&self) -> u32 {
        self.birth_date.month()
    }

    pub fn birth_day(&self) -> u32 {
        self.birth_date.day()
    }
}

fn digits_to_u32(digits: &str) -> u32 {
    digits.bytes().fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

/// Decode a valid CNP into its fields.
///
/// Lead digits 1/2 decode as 19xx births, 7/8 as 20xx residents, and 3-6 as
/// 20xx births with sex taken from the digit's parity. The encoder assigns
/// 3/4 to 1800s births, so those do not decode back to their original year.
/// The serial comes back as written, including 000.
pub fn parse_cnp(cnp: &str) -> Result<ParsedCnp, CnpError> {
    if !validate_cnp(cnp) {
        return Err(CnpError::InvalidCnp(cnp.to_string()));
    }

    let lead = cnp.as_bytes()[0] - b'0';
    let (sex, century, resident) = match lead {
        1 => (Sex::Male, 1900, false),
        2 => (Sex::Female, 1900, false),
        7 => (Sex::Male, 2000, true),
        8 => (Sex::Female, 2000, true),
        3 | 5 => (Sex::Male, 2000, false),
        4 | 6 => (Sex::Female, 2000, false),
        _ => return Err(CnpError::InvalidCnp(cnp.to_string())),
    };

    let year = century + digits_to_u32(&cnp[1..3]) as i32;
    let month = digits_to_u32(&cnp[3..5]);
    let day = digits_to_u32(&cnp[5..7]);
    let birth_date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| CnpError::InvalidCnp(cnp.to_string()))?;

    let region = Region::from_code(digits_to_u32(&cnp[7..9]) as u8)?;
    let serial = digits_to_u32(&cnp[9..12]) as u16;

    Ok(ParsedCnp {
        raw: cnp.to_string(),
        sex,
        birth_date,
        region,
        serial,
        resident,
    })
}

/// Human-readable report for a CNP.
pub fn describe_cnp(cnp: &str) -> Result<String, CnpError> {
    let parsed = parse_cnp(cnp)?;
    Ok(format!(
        "CNP: {}\nSex: {}\nBirth year: {}\nBirth month: {}\nBirth day: {}\nRegion: {}",
        parsed.raw,
        parsed.sex,
        parsed.birth_year(),
        parsed.birth_month(),
        parsed.birth_day(),
        parsed.region,
    ))
}
