//! Region-of-birth catalog.
//!
//! Every region carries the fixed numeric code written into digits 8-9 of a
//! CNP: the counties (1-39), Bucharest (40) and its six sectors (41-46), plus
//! the later-added Calarasi (51) and Giurgiu (52). Codes 47-50 were never
//! assigned.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::cnp::CnpError;

/// Region of birth, with its wire code as the discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Region {
    Alba = 1,
    Arad = 2,
    Arges = 3,
    Bacau = 4,
    Bihor = 5,
    BistritaNasaud = 6,
    Botosani = 7,
    Brasov = 8,
    Braila = 9,
    Buzau = 10,
    CarasSeverin = 11,
    Cluj = 12,
    Constanta = 13,
    Covasna = 14,
    Dambovita = 15,
    Dolj = 16,
    Galati = 17,
    Gorj = 18,
    Hargita = 19,
    Hunedoara = 20,
    Ialomita = 21,
    Iasi = 22,
    Ilfov = 23,
    Maramures = 24,
    Mehedinti = 25,
    Mures = 26,
    Neamt = 27,
    Olt = 28,
    Prahova = 29,
    SatuMare = 30,
    Salaj = 31,
    Sibiu = 32,
    Suceava = 33,
    Teleorman = 34,
    Timis = 35,
    Tulcea = 36,
    Vaslui = 37,
    Valcea = 38,
    Vrancea = 39,
    Bucuresti = 40,
    BucurestiSector1 = 41,
    BucurestiSector2 = 42,
    BucurestiSector3 = 43,
    BucurestiSector4 = 44,
    BucurestiSector5 = 45,
    BucurestiSector6 = 46,
    Calarasi = 51,
    Giurgiu = 52,
}

impl Region {
    /// Every region, in ascending code order.
    pub const ALL: [Region; 48] = [
        Region::Alba,
        Region::Arad,
        Region::Arges,
        Region::Bacau,
        Region::Bihor,
        Region::BistritaNasaud,
        Region::Botosani,
        Region::Brasov,
        Region::Braila,
        Region::Buzau,
        Region::CarasSeverin,
        Region::Cluj,
        Region::Constanta,
        Region::Covasna,
        Region::Dambovita,
        Region::Dolj,
        Region::Galati,
        Region::Gorj,
        Region::Hargita,
        Region::Hunedoara,
        Region::Ialomita,
        Region::Iasi,
        Region::Ilfov,
        Region::Maramures,
        Region::Mehedinti,
        Region::Mures,
        Region::Neamt,
        Region::Olt,
        Region::Prahova,
        Region::SatuMare,
        Region::Salaj,
        Region::Sibiu,
        Region::Suceava,
        Region::Teleorman,
        Region::Timis,
        Region::Tulcea,
        Region::Vaslui,
        Region::Valcea,
        Region::Vrancea,
        Region::Bucuresti,
        Region::BucurestiSector1,
        Region::BucurestiSector2,
        Region::BucurestiSector3,
        Region::BucurestiSector4,
        Region::BucurestiSector5,
        Region::BucurestiSector6,
        Region::Calarasi,
        Region::Giurgiu,
    ];

    /// Numeric code written into the identifier.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Look a region up by its numeric code.
    pub fn from_code(code: u8) -> Result<Self, CnpError> {
        match code {
            1..=46 => Ok(Self::ALL[usize::from(code) - 1]),
            51 => Ok(Self::Calarasi),
            52 => Ok(Self::Giurgiu),
            _ => Err(CnpError::UnknownRegionCode(code)),
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Alba => "Alba",
            Self::Arad => "Arad",
            Self::Arges => "Arges",
            Self::Bacau => "Bacau",
            Self::Bihor => "Bihor",
            Self::BistritaNasaud => "Bistrita-Nasaud",
            Self::Botosani => "Botosani",
            Self::Brasov => "Brasov",
            Self::Braila => "Braila",
            Self::Buzau => "Buzau",
            Self::CarasSeverin => "Caras-Severin",
            Self::Cluj => "Cluj",
            Self::Constanta => "Constanta",
            Self::Covasna => "Covasna",
            Self::Dambovita => "Dambovita",
            Self::Dolj => "Dolj",
            Self::Galati => "Galati",
            Self::Gorj => "Gorj",
            Self::Hargita => "Hargita",
            Self::Hunedoara => "Hunedoara",
            Self::Ialomita => "Ialomita",
            Self::Iasi => "Iasi",
            Self::Ilfov => "Ilfov",
            Self::Maramures => "Maramures",
            Self::Mehedinti => "Mehedinti",
            Self::Mures => "Mures",
            Self::Neamt => "Neamt",
            Self::Olt => "Olt",
            Self::Prahova => "Prahova",
            Self::SatuMare => "Satu-Mare",
            Self::Salaj => "Salaj",
            Self::Sibiu => "Sibiu",
            Self::Suceava => "Suceava",
            Self::Teleorman => "Teleorman",
            Self::Timis => "Timis",
            Self::Tulcea => "Tulcea",
            Self::Vaslui => "Vaslui",
            Self::Valcea => "Valcea",
            Self::Vrancea => "Vrancea",
            Self::Bucuresti => "Bucuresti",
            Self::BucurestiSector1 => "Bucuresti Sector 1",
            Self::BucurestiSector2 => "Bucuresti Sector 2",
            Self::BucurestiSector3 => "Bucuresti Sector 3",
            Self::BucurestiSector4 => "Bucuresti Sector 4",
            Self::BucurestiSector5 => "Bucuresti Sector 5",
            Self::BucurestiSector6 => "Bucuresti Sector 6",
            Self::Calarasi => "Calarasi",
            Self::Giurgiu => "Giurgiu",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = CnpError;

    /// Case-insensitive match against display names. Separators must match
    /// the display form: "Satu-Mare" resolves, "Satu Mare" does not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|region| region.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CnpError::UnknownRegionName(wanted.to_string()))
    }
}

impl Serialize for Region {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_catalog() {
        assert_eq!(Region::Alba.code(), 1);
        assert_eq!(Region::Braila.code(), 9);
        assert_eq!(Region::Iasi.code(), 22);
        assert_eq!(Region::Vrancea.code(), 39);
        assert_eq!(Region::Bucuresti.code(), 40);
        assert_eq!(Region::BucurestiSector1.code(), 41);
        assert_eq!(Region::BucurestiSector6.code(), 46);
        assert_eq!(Region::Calarasi.code(), 51);
        assert_eq!(Region::Giurgiu.code(), 52);
    }

    #[test]
    fn test_all_is_complete_and_in_code_order() {
        assert_eq!(Region::ALL.len(), 48);
        for pair in Region::ALL.windows(2) {
            assert!(pair[0].code() < pair[1].code());
        }
    }

    #[test]
    fn test_from_code_round_trip() {
        for region in Region::ALL {
            assert_eq!(Region::from_code(region.code()).unwrap(), region);
        }
    }

    #[test]
    fn test_from_code_rejects_unassigned_codes() {
        for code in [0u8, 47, 48, 49, 50, 53, 99, 255] {
            assert!(matches!(
                Region::from_code(code),
                Err(CnpError::UnknownRegionCode(c)) if c == code
            ));
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Region::Alba.to_string(), "Alba");
        assert_eq!(Region::BistritaNasaud.to_string(), "Bistrita-Nasaud");
        assert_eq!(Region::CarasSeverin.to_string(), "Caras-Severin");
        assert_eq!(Region::SatuMare.to_string(), "Satu-Mare");
        assert_eq!(Region::BucurestiSector4.to_string(), "Bucuresti Sector 4");
    }

    #[test]
    fn test_from_str_accepts_display_names() {
        assert_eq!("Iasi".parse::<Region>().unwrap(), Region::Iasi);
        assert_eq!("iasi".parse::<Region>().unwrap(), Region::Iasi);
        assert_eq!("SATU-MARE".parse::<Region>().unwrap(), Region::SatuMare);
        assert_eq!(" Cluj ".parse::<Region>().unwrap(), Region::Cluj);
        assert_eq!(
            "bucuresti sector 3".parse::<Region>().unwrap(),
            Region::BucurestiSector3
        );
    }

    #[test]
    fn test_from_str_rejects_unknown_names() {
        assert!(matches!(
            "Atlantis".parse::<Region>(),
            Err(CnpError::UnknownRegionName(_))
        ));
        assert!(matches!(
            "Satu Mare".parse::<Region>(),
            Err(CnpError::UnknownRegionName(_))
        ));
        assert!(matches!(
            "".parse::<Region>(),
            Err(CnpError::UnknownRegionName(_))
        ));
    }

    #[test]
    fn test_serializes_as_display_name() {
        let json = serde_json::to_string(&Region::BucurestiSector2).unwrap();
        assert_eq!(json, "\"Bucuresti Sector 2\"");
    }
}
