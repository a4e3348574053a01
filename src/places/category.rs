//! Search categories offered by the category bar

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A place category, mapped to the provider's type string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Restaurant,
    Lodging,
    Cafe,
    GasStation,
    BeautySalon,
    Gym,
    Atm,
    ChargingStation,
    Hospital,
}

impl Category {
    pub const ALL: [Self; 9] = [
        Self::Restaurant,
        Self::Lodging,
        Self::Cafe,
        Self::GasStation,
        Self::BeautySalon,
        Self::Gym,
        Self::Atm,
        Self::ChargingStation,
        Self::Hospital,
    ];

    /// Type string understood by the place provider
    #[must_use]
    pub const fn provider_type(self) -> &'static str {
        match self {
            Self::Restaurant => "restaurant",
            Self::Lodging => "lodging",
            Self::Cafe => "cafe",
            Self::GasStation => "gas_station",
            Self::BeautySalon => "beauty_salon",
            Self::Gym => "gym",
            Self::Atm => "atm",
            Self::ChargingStation => "charging_station",
            Self::Hospital => "hospital",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Restaurant => "Restaurants",
            Self::Lodging => "Hotels",
            Self::Cafe => "Cafes",
            Self::GasStation => "Petrol Pumps",
            Self::BeautySalon => "Salons",
            Self::Gym => "Gyms",
            Self::Atm => "ATMs",
            Self::ChargingStation => "EV Charging",
            Self::Hospital => "Hospitals",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Parse a provider type string; `-` and `_` are interchangeable
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|category| category.provider_type() == wanted)
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}
