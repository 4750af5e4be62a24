//! Random CNP sampling for bulk generation.
//!
//! The generator implements `Iterator<Item = Cnp>`.
//! Use `next_cnp()` for the explicit domain API.

use chrono::{NaiveDate, TimeDelta};
use once_cell::sync::Lazy;
use rand::RngExt;
use rand::rngs::ThreadRng;

use crate::cnp::{Cnp, Sex};
use crate::region::Region;

static MIN_BIRTH_DATE: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(1900, 1, 1).unwrap());
static MAX_BIRTH_DATE: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(2099, 12, 31).unwrap());

/// Endless source of random, checksum-valid CNPs.
///
/// Birth dates are sampled from 1900-2099 only; those eras decode back to
/// the year they encode, which 1800s lead digits do not.
pub struct CnpGen {
    rng: ThreadRng,
}

impl CnpGen {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }

    /// Generate the next CNP (domain API).
    pub fn next_cnp(&mut self) -> Cnp {
        let sex = Sex::ALL[self.rng.random_range(0..Sex::ALL.len())];
        let region = Region::ALL[self.rng.random_range(0..Region::ALL.len())];
        let serial: u16 = self.rng.random_range(1..=999);
        let birth_date = self.random_birth_date();

        Cnp::new(sex, birth_date, region, serial, false)
            .expect("sampled fields should always be in range")
    }

    /// Generate n CNPs.
    pub fn next_n(&mut self, n: usize) -> Vec<Cnp> {
        self.take(n).collect()
    }

    fn random_birth_date(&mut self) -> NaiveDate {
        let span = (*MAX_BIRTH_DATE - *MIN_BIRTH_DATE).num_days();
        *MIN_BIRTH_DATE + TimeDelta::days(self.rng.random_range(0..=span))
    }
}

impl Default for CnpGen {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for CnpGen {
    type Item = Cnp;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_cnp())
    }
}
