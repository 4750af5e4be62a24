//! cnpgen: Romanian CNP (Cod Numeric Personal) generation and validation.
//!
//! A CNP is the 13-digit national identification number encoding sex, birth
//! date, region of birth, a per-day serial and a weighted mod-11 check digit.
//!
//! # Format
//!
//! ```text
//! CNP ::= S YY MM DD RR NNN C
//!
//! S    lead digit: sex folded with birth era (1/2 for 19xx, 3/4 for 18xx,
//!      5/6 for 20xx) or foreign residency (7/8)
//! YY   last two digits of the birth year
//! MM   birth month
//! DD   birth day
//! RR   region code (01-46, 51, 52)
//! NNN  serial (001-999)
//! C    check digit over the first 12 digits
//! ```
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use cnp::{Cnp, Region, Sex, parse_cnp, validate_cnp};
//!
//! let birth_date = NaiveDate::from_ymd_opt(1993, 3, 2).expect("valid date");
//! let cnp = Cnp::new(Sex::Male, birth_date, Region::Iasi, 22, false).expect("serial in range");
//! let full = cnp.full().expect("year inside a supported era");
//! assert_eq!(full, "1930302220223");
//! assert!(validate_cnp(&full));
//! assert_eq!(parse_cnp(&full).expect("well-formed").region, Region::Iasi);
//! ```

mod cnp;
mod generator;
mod region;

pub use cnp::{
    CNP_LENGTH, Cnp, CnpError, PARTIAL_LENGTH, ParsedCnp, Sex, compute_check_digit, describe_cnp,
    parse_cnp, validate_cnp,
};
pub use generator::CnpGen;
pub use region::Region;
