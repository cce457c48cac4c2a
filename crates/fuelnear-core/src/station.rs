//! The normalized station record the resolution pipeline emits.

use serde::{Deserialize, Serialize};

use crate::fuel::FuelType;
use crate::geo::Coordinates;

/// A fuel station after normalization, annotated with its distance from
/// the query center. Coordinates are guaranteed parsed; prices are `None`
/// where the provider reported nothing usable for that fuel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    /// Provider-assigned station ID (`IDEESS`), stable within a snapshot.
    pub id: String,
    /// Signage / brand name (`Rótulo`), free text.
    pub name: String,
    pub address: String,
    /// Opening hours as the feed spells them, e.g. `"L-D: 24H"`.
    pub schedule: String,
    pub locality: String,
    pub municipality: String,
    /// Province free text as the feed spells it, e.g. `"MADRID"`.
    pub province: String,
    /// Two-digit province code (`IDProvincia`).
    pub province_code: String,
    /// Two-digit autonomous community code (`IDCCAA`).
    pub region_code: String,
    pub postal_code: String,
    pub coords: Coordinates,
    pub prices: PriceTable,
    /// Great-circle distance from the query center, in kilometres.
    /// Computed per query; meaningless outside the call that produced it.
    pub distance_km: f64,
}

impl Station {
    /// Price in €/litre (or €/kg) for the given fuel, if the station
    /// reported a parsable value.
    #[must_use]
    pub fn price(&self, fuel: FuelType) -> Option<f64> {
        self.prices.get(fuel)
    }

    /// Whether the station sells the given fuel: a present, parsable,
    /// strictly positive price. Zero and negative values count as "does
    /// not sell", matching the provider's convention.
    #[must_use]
    pub fn sells(&self, fuel: FuelType) -> bool {
        self.price(fuel).is_some_and(|p| p > 0.0)
    }
}

/// One optional price per fuel product. An explicit field per fuel keeps
/// access exhaustive; there is no string-keyed lookup anywhere.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceTable {
    pub diesel_a: Option<f64>,
    pub diesel_b: Option<f64>,
    pub diesel_premium: Option<f64>,
    pub gasoline_95_e5: Option<f64>,
    pub gasoline_95_e5_premium: Option<f64>,
    pub gasoline_95_e10: Option<f64>,
    pub gasoline_98_e5: Option<f64>,
    pub gasoline_98_e10: Option<f64>,
    pub biodiesel: Option<f64>,
    pub bioethanol: Option<f64>,
    pub cng: Option<f64>,
    pub lng: Option<f64>,
    pub lpg: Option<f64>,
    pub hydrogen: Option<f64>,
}

impl PriceTable {
    #[must_use]
    pub fn get(&self, fuel: FuelType) -> Option<f64> {
        match fuel {
            FuelType::DieselA => self.diesel_a,
            FuelType::DieselB => self.diesel_b,
            FuelType::DieselPremium => self.diesel_premium,
            FuelType::Gasoline95E5 => self.gasoline_95_e5,
            FuelType::Gasoline95E5Premium => self.gasoline_95_e5_premium,
            FuelType::Gasoline95E10 => self.gasoline_95_e10,
            FuelType::Gasoline98E5 => self.gasoline_98_e5,
            FuelType::Gasoline98E10 => self.gasoline_98_e10,
            FuelType::Biodiesel => self.biodiesel,
            FuelType::Bioethanol => self.bioethanol,
            FuelType::CompressedNaturalGas => self.cng,
            FuelType::LiquefiedNaturalGas => self.lng,
            FuelType::Lpg => self.lpg,
            FuelType::Hydrogen => self.hydrogen,
        }
    }

    pub fn set(&mut self, fuel: FuelType, price: Option<f64>) {
        match fuel {
            FuelType::DieselA => self.diesel_a = price,
            FuelType::DieselB => self.diesel_b = price,
            FuelType::DieselPremium => self.diesel_premium = price,
            FuelType::Gasoline95E5 => self.gasoline_95_e5 = price,
            FuelType::Gasoline95E5Premium => self.gasoline_95_e5_premium = price,
            FuelType::Gasoline95E10 => self.gasoline_95_e10 = price,
            FuelType::Gasoline98E5 => self.gasoline_98_e5 = price,
            FuelType::Gasoline98E10 => self.gasoline_98_e10 = price,
            FuelType::Biodiesel => self.biodiesel = price,
            FuelType::Bioethanol => self.bioethanol = price,
            FuelType::CompressedNaturalGas => self.cng = price,
            FuelType::LiquefiedNaturalGas => self.lng = price,
            FuelType::Lpg => self.lpg = price,
            FuelType::Hydrogen => self.hydrogen = price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_station(prices: PriceTable) -> Station {
        Station {
            id: "1048".to_string(),
            name: "REPSOL".to_string(),
            address: "CALLE MAYOR 1".to_string(),
            schedule: "L-D: 24H".to_string(),
            locality: "MADRID".to_string(),
            municipality: "Madrid".to_string(),
            province: "MADRID".to_string(),
            province_code: "28".to_string(),
            region_code: "13".to_string(),
            postal_code: "28001".to_string(),
            coords: Coordinates::new(40.4168, -3.7038),
            prices,
            distance_km: 0.0,
        }
    }

    #[test]
    fn sells_false_when_price_absent() {
        let station = make_station(PriceTable::default());
        assert!(!station.sells(FuelType::DieselA));
    }

    #[test]
    fn sells_false_when_price_zero() {
        let mut prices = PriceTable::default();
        prices.set(FuelType::Hydrogen, Some(0.0));
        let station = make_station(prices);
        assert!(!station.sells(FuelType::Hydrogen));
    }

    #[test]
    fn sells_true_when_price_positive() {
        let mut prices = PriceTable::default();
        prices.set(FuelType::Gasoline95E5, Some(1.589));
        let station = make_station(prices);
        assert!(station.sells(FuelType::Gasoline95E5));
        assert_eq!(station.price(FuelType::Gasoline95E5), Some(1.589));
    }

    #[test]
    fn set_and_get_agree_for_every_fuel() {
        let mut prices = PriceTable::default();
        for (i, fuel) in FuelType::ALL.into_iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            prices.set(fuel, Some(1.0 + i as f64 / 100.0));
        }
        for (i, fuel) in FuelType::ALL.into_iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let expected = 1.0 + i as f64 / 100.0;
            assert_eq!(prices.get(fuel), Some(expected));
        }
    }
}
