//! City zones known to the client.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Administrative zone of the city, tracked independently for coverage
/// statistics.
///
/// Serialized as the display name the backend uses in its `Zone_Name` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ZoneName {
    Thiruvottiyur,
    Manali,
    Madhavaram,
    Tondiarpet,
    Royapuram,
    #[serde(rename = "Thiru-Vi-Ka Nagar")]
    ThiruViKaNagar,
    Ambattur,
    #[serde(rename = "Anna Nagar")]
    AnnaNagar,
    Teynampet,
    Kodambakkam,
    Valasaravakkam,
    Alandur,
    #[default]
    Adyar,
    Perungudi,
    Sholinganallur,
    Kolathur,
    Villivakkam,
    Mylapore,
    Velachery,
    Virugambakkam,
    Saidapet,
}

impl ZoneName {
    /// Every zone, in the order the zone selector lists them.
    pub const ALL: [ZoneName; 21] = [
        ZoneName::Thiruvottiyur,
        ZoneName::Manali,
        ZoneName::Madhavaram,
        ZoneName::Tondiarpet,
        ZoneName::Royapuram,
        ZoneName::ThiruViKaNagar,
        ZoneName::Ambattur,
        ZoneName::AnnaNagar,
        ZoneName::Teynampet,
        ZoneName::Kodambakkam,
        ZoneName::Valasaravakkam,
        ZoneName::Alandur,
        ZoneName::Adyar,
        ZoneName::Perungudi,
        ZoneName::Sholinganallur,
        ZoneName::Kolathur,
        ZoneName::Villivakkam,
        ZoneName::Mylapore,
        ZoneName::Velachery,
        ZoneName::Virugambakkam,
        ZoneName::Saidapet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneName::Thiruvottiyur => "Thiruvottiyur",
            ZoneName::Manali => "Manali",
            ZoneName::Madhavaram => "Madhavaram",
            ZoneName::Tondiarpet => "Tondiarpet",
            ZoneName::Royapuram => "Royapuram",
            ZoneName::ThiruViKaNagar => "Thiru-Vi-Ka Nagar",
            ZoneName::Ambattur => "Ambattur",
            ZoneName::AnnaNagar => "Anna Nagar",
            ZoneName::Teynampet => "Teynampet",
            ZoneName::Kodambakkam => "Kodambakkam",
            ZoneName::Valasaravakkam => "Valasaravakkam",
            ZoneName::Alandur => "Alandur",
            ZoneName::Adyar => "Adyar",
            ZoneName::Perungudi => "Perungudi",
            ZoneName::Sholinganallur => "Sholinganallur",
            ZoneName::Kolathur => "Kolathur",
            ZoneName::Villivakkam => "Villivakkam",
            ZoneName::Mylapore => "Mylapore",
            ZoneName::Velachery => "Velachery",
            ZoneName::Virugambakkam => "Virugambakkam",
            ZoneName::Saidapet => "Saidapet",
        }
    }
}

impl fmt::Display for ZoneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown zone: {0}")]
pub struct UnknownZone(pub String);

impl FromStr for ZoneName {
    type Err = UnknownZone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ZoneName::ALL
            .iter()
            .copied()
            .find(|zone| zone.as_str() == s)
            .ok_or_else(|| UnknownZone(s.to_string()))
    }
}
