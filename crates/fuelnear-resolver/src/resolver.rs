//! The pure resolution core: normalize → annotate → filter → rank →
//! truncate over one fetched snapshot.
//!
//! Everything here is synchronous and allocation-only; the HTTP side
//! lives in [`crate::client`]. Keeping the core pure makes the ranking
//! semantics testable without a server.

use fuelnear_core::{Coordinates, FuelType, Station};

use crate::normalize::normalize_station;
use crate::types::RawSnapshot;

/// Optional match criteria, applied as a conjunction. An absent field
/// constrains nothing.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    /// Case-insensitive substring match against the station signage.
    pub brand: Option<String>,
    /// Station must sell this fuel (present, parsable, strictly positive
    /// price).
    pub fuel_type: Option<FuelType>,
    /// Exact autonomous community code, e.g. `"13"`.
    pub region_code: Option<String>,
    /// Exact province code, e.g. `"28"`.
    pub province_code: Option<String>,
    /// Prefix match against the snapshot's publication date string. The
    /// date is a snapshot-level property, so this gates the whole result
    /// set, not individual stations.
    pub date_prefix: Option<String>,
}

impl FilterSpec {
    /// `true` when no criterion is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.brand.is_none()
            && self.fuel_type.is_none()
            && self.region_code.is_none()
            && self.province_code.is_none()
            && self.date_prefix.is_none()
    }
}

/// Resolves the `max_results` stations nearest to `center` that satisfy
/// `filter`, over one already-fetched snapshot.
///
/// Records with unparsable coordinates are dropped before filtering and
/// never count toward `max_results`. Output is sorted by ascending
/// distance; equal distances keep feed order (stable sort, no secondary
/// key). Fewer survivors than `max_results` is a valid short result;
/// zero survivors is a valid empty one.
#[must_use]
pub fn closest_stations(
    snapshot: &RawSnapshot,
    center: Coordinates,
    max_results: usize,
    filter: &FilterSpec,
) -> Vec<Station> {
    // The publication date belongs to the snapshot, not to any station:
    // a non-matching prefix empties the whole result set at once.
    if let Some(prefix) = &filter.date_prefix {
        if !snapshot.date.starts_with(prefix.as_str()) {
            return Vec::new();
        }
    }

    let total = snapshot.stations.len();
    let mut matches: Vec<Station> = snapshot
        .stations
        .iter()
        .filter_map(|raw| normalize_station(raw, center))
        .filter(|station| station_matches(station, filter))
        .collect();

    tracing::debug!(
        total,
        matched = matches.len(),
        "resolved snapshot against filter"
    );

    matches.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches.truncate(max_results);
    matches
}

fn station_matches(station: &Station, filter: &FilterSpec) -> bool {
    if let Some(brand) = &filter.brand {
        if !station
            .name
            .to_lowercase()
            .contains(&brand.to_lowercase())
        {
            return false;
        }
    }

    if let Some(fuel) = filter.fuel_type {
        if !station.sells(fuel) {
            return false;
        }
    }

    if let Some(region) = &filter.region_code {
        if station.region_code != *region {
            return false;
        }
    }

    if let Some(province) = &filter.province_code {
        if station.province_code != *province {
            return false;
        }
    }

    true
}
