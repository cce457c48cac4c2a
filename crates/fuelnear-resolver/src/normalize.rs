//! Normalization from raw feed strings to typed [`Station`] records.
//!
//! This is the only place locale-formatted numbers become `f64`. Failures
//! are soft and local: an unparsable price leaves that fuel unavailable,
//! unparsable coordinates drop the whole record (the caller sees `None`).

use fuelnear_core::{Coordinates, FuelType, PriceTable, Station};

use crate::distance::haversine_km;
use crate::types::RawStation;

/// Parses a decimal string that may use a comma as the decimal separator.
///
/// Accepts `"40,4168"`, `"40.4168"`, `"1,589"`, surrounding whitespace
/// included. Returns `None` for empty, non-numeric, or otherwise
/// malformed input. Never panics.
#[must_use]
pub fn parse_locale_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value: f64 = trimmed.replace(',', ".").parse().ok()?;
    if value.is_finite() {
        Some(value)
    } else {
        None
    }
}

/// Normalizes one raw station and annotates it with its distance from
/// `center`.
///
/// Returns `None` when either coordinate fails to parse; such records are
/// excluded from resolution entirely. Price parse failures are per-fuel:
/// the fuel's slot stays `None` and the record survives.
#[must_use]
pub fn normalize_station(raw: &RawStation, center: Coordinates) -> Option<Station> {
    let lat = parse_locale_decimal(&raw.latitude)?;
    let lng = parse_locale_decimal(&raw.longitude)?;
    let coords = Coordinates::new(lat, lng);

    let mut prices = PriceTable::default();
    for fuel in FuelType::ALL {
        let parsed = raw.raw_price(fuel).and_then(parse_locale_decimal);
        prices.set(fuel, parsed);
    }

    Some(Station {
        id: raw.id.clone(),
        name: raw.signage.clone(),
        address: raw.address.clone(),
        schedule: raw.schedule.clone(),
        locality: raw.locality.clone(),
        municipality: raw.municipality.clone(),
        province: raw.province.clone(),
        province_code: raw.province_code.clone(),
        region_code: raw.region_code.clone(),
        postal_code: raw.postal_code.clone(),
        coords,
        prices,
        distance_km: haversine_km(center, coords),
    })
}
