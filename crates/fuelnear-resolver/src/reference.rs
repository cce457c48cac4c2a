//! Reference-data extraction: the distinct regions and provinces present
//! in one snapshot, for populating filter choices.
//!
//! First-seen-wins: the first station carrying a code decides the display
//! name, and output order is the order codes first appear in the feed —
//! not alphabetical. The sets are tiny (≤19 regions, ≤52 provinces), so a
//! seen-set plus ordered accumulation is all the structure needed.

use std::collections::HashSet;

use fuelnear_core::{Province, Region};

use crate::types::RawSnapshot;

/// Distinct autonomous communities observed across the snapshot.
///
/// The feed has no region-name column, so the display name is derived
/// from the first-seen station's province text: the part before a
/// `" - "` separator when one is present (e.g. `"PALMAS (LAS) - GRAN
/// CANARIA"` → `"PALMAS (LAS)"`), otherwise the whole field.
#[must_use]
pub fn extract_regions(snapshot: &RawSnapshot) -> Vec<Region> {
    let mut seen = HashSet::new();
    let mut regions = Vec::new();

    for station in &snapshot.stations {
        if station.region_code.is_empty() || !seen.insert(station.region_code.as_str()) {
            continue;
        }
        let name = station
            .province
            .split(" - ")
            .next()
            .unwrap_or(&station.province);
        regions.push(Region {
            code: station.region_code.clone(),
            name: name.to_owned(),
        });
    }

    regions
}

/// Distinct provinces observed across the snapshot, each carrying its
/// parent region code from the same first-seen station.
#[must_use]
pub fn extract_provinces(snapshot: &RawSnapshot) -> Vec<Province> {
    let mut seen = HashSet::new();
    let mut provinces = Vec::new();

    for station in &snapshot.stations {
        if station.province_code.is_empty() || !seen.insert(station.province_code.as_str()) {
            continue;
        }
        provinces.push(Province {
            code: station.province_code.clone(),
            name: station.province.clone(),
            region_code: station.region_code.clone(),
        });
    }

    provinces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawStation;

    fn station(id: &str, region_code: &str, province_code: &str, province: &str) -> RawStation {
        let json = serde_json::json!({
            "IDEESS": id,
            "IDCCAA": region_code,
            "IDProvincia": province_code,
            "Provincia": province,
        });
        serde_json::from_value(json).unwrap()
    }

    fn snapshot(stations: Vec<RawStation>) -> RawSnapshot {
        RawSnapshot {
            date: "27/08/2026 8:00:00".to_owned(),
            status: "OK".to_owned(),
            note: String::new(),
            stations,
        }
    }

    #[test]
    fn regions_deduplicate_by_code_first_seen_wins() {
        let snap = snapshot(vec![
            station("1", "01", "41", "Sevilla"),
            station("2", "01", "41", "SEVILLA"),
            station("3", "09", "08", "Barcelona"),
        ]);
        let regions = extract_regions(&snap);
        assert_eq!(regions.len(), 2);
        // First occurrence decides both position and spelling.
        assert_eq!(regions[0].code, "01");
        assert_eq!(regions[0].name, "Sevilla");
        assert_eq!(regions[1].code, "09");
    }

    #[test]
    fn region_name_takes_text_before_separator() {
        let snap = snapshot(vec![station(
            "1",
            "05",
            "35",
            "PALMAS (LAS) - GRAN CANARIA",
        )]);
        let regions = extract_regions(&snap);
        assert_eq!(regions[0].name, "PALMAS (LAS)");
    }

    #[test]
    fn regions_preserve_feed_order_not_alphabetical() {
        let snap = snapshot(vec![
            station("1", "16", "48", "Bizkaia"),
            station("2", "01", "41", "Sevilla"),
            station("3", "09", "08", "Barcelona"),
        ]);
        let codes: Vec<_> = extract_regions(&snap)
            .into_iter()
            .map(|r| r.code)
            .collect();
        assert_eq!(codes, vec!["16", "01", "09"]);
    }

    #[test]
    fn provinces_carry_parent_region_code() {
        let snap = snapshot(vec![
            station("1", "13", "28", "Madrid"),
            station("2", "09", "08", "Barcelona"),
            station("3", "09", "17", "Girona"),
        ]);
        let provinces = extract_provinces(&snap);
        assert_eq!(provinces.len(), 3);
        assert_eq!(provinces[0].code, "28");
        assert_eq!(provinces[0].region_code, "13");
        assert_eq!(provinces[2].code, "17");
        assert_eq!(provinces[2].region_code, "09");
    }

    #[test]
    fn provinces_deduplicate_keeping_first_spelling() {
        let snap = snapshot(vec![
            station("1", "13", "28", "Madrid"),
            station("2", "13", "28", "MADRID"),
        ]);
        let provinces = extract_provinces(&snap);
        assert_eq!(provinces.len(), 1);
        assert_eq!(provinces[0].name, "Madrid");
    }

    #[test]
    fn empty_snapshot_yields_empty_reference_data() {
        let snap = snapshot(vec![]);
        assert!(extract_regions(&snap).is_empty());
        assert!(extract_provinces(&snap).is_empty());
    }

    #[test]
    fn blank_codes_are_skipped() {
        let snap = snapshot(vec![station("1", "", "", "Nowhere")]);
        assert!(extract_regions(&snap).is_empty());
        assert!(extract_provinces(&snap).is_empty());
    }
}
