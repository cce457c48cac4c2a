//! Canonical fuel-type vocabulary for the MINETUR price feed.
//!
//! The provider reports one price column per fuel on every station object
//! (e.g. `"Precio Gasoleo A"`). Modelling the full set as an enum keeps
//! price access exhaustive: adding a variant forces every `match` over
//! fuel prices to handle it, and no code ever indexes station objects by
//! a free-form string key.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the fourteen fuel products the provider publishes prices for.
///
/// Serde names match [`FuelType::token`] so the same spelling works in
/// JSON, CLI flags, and config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    #[serde(rename = "diesel-a")]
    DieselA,
    #[serde(rename = "diesel-b")]
    DieselB,
    #[serde(rename = "diesel-premium")]
    DieselPremium,
    #[serde(rename = "gasoline-95-e5")]
    Gasoline95E5,
    #[serde(rename = "gasoline-95-e5-premium")]
    Gasoline95E5Premium,
    #[serde(rename = "gasoline-95-e10")]
    Gasoline95E10,
    #[serde(rename = "gasoline-98-e5")]
    Gasoline98E5,
    #[serde(rename = "gasoline-98-e10")]
    Gasoline98E10,
    #[serde(rename = "biodiesel")]
    Biodiesel,
    #[serde(rename = "bioethanol")]
    Bioethanol,
    #[serde(rename = "cng")]
    CompressedNaturalGas,
    #[serde(rename = "lng")]
    LiquefiedNaturalGas,
    #[serde(rename = "lpg")]
    Lpg,
    #[serde(rename = "hydrogen")]
    Hydrogen,
}

impl FuelType {
    /// Every variant, in the order the provider documents its columns.
    pub const ALL: [FuelType; 14] = [
        FuelType::DieselA,
        FuelType::DieselB,
        FuelType::DieselPremium,
        FuelType::Gasoline95E5,
        FuelType::Gasoline95E5Premium,
        FuelType::Gasoline95E10,
        FuelType::Gasoline98E5,
        FuelType::Gasoline98E10,
        FuelType::Biodiesel,
        FuelType::Bioethanol,
        FuelType::CompressedNaturalGas,
        FuelType::LiquefiedNaturalGas,
        FuelType::Lpg,
        FuelType::Hydrogen,
    ];

    /// The provider's JSON field name for this fuel's price column.
    #[must_use]
    pub fn provider_field(self) -> &'static str {
        match self {
            FuelType::DieselA => "Precio Gasoleo A",
            FuelType::DieselB => "Precio Gasoleo B",
            FuelType::DieselPremium => "Precio Gasoleo Premium",
            FuelType::Gasoline95E5 => "Precio Gasolina 95 E5",
            FuelType::Gasoline95E5Premium => "Precio Gasolina 95 E5 Premium",
            FuelType::Gasoline95E10 => "Precio Gasolina 95 E10",
            FuelType::Gasoline98E5 => "Precio Gasolina 98 E5",
            FuelType::Gasoline98E10 => "Precio Gasolina 98 E10",
            FuelType::Biodiesel => "Precio Biodiesel",
            FuelType::Bioethanol => "Precio Bioetanol",
            FuelType::CompressedNaturalGas => "Precio Gas Natural Comprimido",
            FuelType::LiquefiedNaturalGas => "Precio Gas Natural Licuado",
            FuelType::Lpg => "Precio Gases licuados del petróleo",
            FuelType::Hydrogen => "Precio Hidrogeno",
        }
    }

    /// Stable CLI/config token for this fuel, e.g. `"diesel-a"`.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            FuelType::DieselA => "diesel-a",
            FuelType::DieselB => "diesel-b",
            FuelType::DieselPremium => "diesel-premium",
            FuelType::Gasoline95E5 => "gasoline-95-e5",
            FuelType::Gasoline95E5Premium => "gasoline-95-e5-premium",
            FuelType::Gasoline95E10 => "gasoline-95-e10",
            FuelType::Gasoline98E5 => "gasoline-98-e5",
            FuelType::Gasoline98E10 => "gasoline-98-e10",
            FuelType::Biodiesel => "biodiesel",
            FuelType::Bioethanol => "bioethanol",
            FuelType::CompressedNaturalGas => "cng",
            FuelType::LiquefiedNaturalGas => "lng",
            FuelType::Lpg => "lpg",
            FuelType::Hydrogen => "hydrogen",
        }
    }
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Error)]
#[error("unknown fuel type: {0}")]
pub struct ParseFuelTypeError(String);

impl std::str::FromStr for FuelType {
    type Err = ParseFuelTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FuelType::ALL
            .into_iter()
            .find(|fuel| fuel.token() == s)
            .ok_or_else(|| ParseFuelTypeError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_variants_have_distinct_provider_fields() {
        let mut seen = std::collections::HashSet::new();
        for fuel in FuelType::ALL {
            assert!(seen.insert(fuel.provider_field()), "duplicate provider field");
        }
        assert_eq!(seen.len(), 14);
    }

    #[test]
    fn token_round_trips_through_from_str() {
        for fuel in FuelType::ALL {
            let parsed: FuelType = fuel.token().parse().unwrap();
            assert_eq!(parsed, fuel);
        }
    }

    #[test]
    fn from_str_rejects_unknown_token() {
        assert!("kerosene".parse::<FuelType>().is_err());
    }

    #[test]
    fn hydrogen_maps_to_provider_column() {
        assert_eq!(FuelType::Hydrogen.provider_field(), "Precio Hidrogeno");
    }

    #[test]
    fn serde_uses_kebab_case_tokens() {
        let json = serde_json::to_string(&FuelType::DieselA).unwrap();
        assert_eq!(json, "\"diesel-a\"");
    }
}
