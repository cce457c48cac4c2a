//! Spanish administrative reference data.
//!
//! Two flavours live here: owned [`Region`] / [`Province`] values as
//! derived from a feed snapshot (codes plus whatever display name the
//! feed carried), and canonical `const` tables of the 19 autonomous
//! communities and 52 provinces for callers that want clean INE names
//! without a fetch.

use serde::{Deserialize, Serialize};

/// An autonomous community (CCAA) as observed in or looked up for a feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Two-digit CCAA code, e.g. `"13"` for Madrid.
    pub code: String,
    pub name: String,
}

/// A province, keyed by its two-digit code, with its parent CCAA code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    /// Two-digit province code, e.g. `"28"` for Madrid.
    pub code: String,
    pub name: String,
    /// CCAA code of the community this province belongs to.
    pub region_code: String,
}

/// Canonical (code, name) pairs for Spain's 19 autonomous communities,
/// Ceuta and Melilla included, using the INE spellings the feed uses.
pub const AUTONOMOUS_COMMUNITIES: &[(&str, &str)] = &[
    ("01", "Andalucía"),
    ("02", "Aragón"),
    ("03", "Asturias, Principado de"),
    ("04", "Balears, Illes"),
    ("05", "Canarias"),
    ("06", "Cantabria"),
    ("07", "Castilla y León"),
    ("08", "Castilla - La Mancha"),
    ("09", "Cataluña"),
    ("10", "Comunitat Valenciana"),
    ("11", "Extremadura"),
    ("12", "Galicia"),
    ("13", "Madrid, Comunidad de"),
    ("14", "Murcia, Región de"),
    ("15", "Navarra, Comunidad Foral de"),
    ("16", "País Vasco"),
    ("17", "Rioja, La"),
    ("18", "Ceuta"),
    ("19", "Melilla"),
];

/// Canonical (code, name, region code) triples for the 52 provinces.
pub const PROVINCES: &[(&str, &str, &str)] = &[
    ("04", "Almería", "01"),
    ("11", "Cádiz", "01"),
    ("14", "Córdoba", "01"),
    ("18", "Granada", "01"),
    ("21", "Huelva", "01"),
    ("23", "Jaén", "01"),
    ("29", "Málaga", "01"),
    ("41", "Sevilla", "01"),
    ("22", "Huesca", "02"),
    ("44", "Teruel", "02"),
    ("50", "Zaragoza", "02"),
    ("33", "Asturias", "03"),
    ("07", "Balears, Illes", "04"),
    ("35", "Palmas, Las", "05"),
    ("38", "Santa Cruz de Tenerife", "05"),
    ("39", "Cantabria", "06"),
    ("05", "Ávila", "07"),
    ("09", "Burgos", "07"),
    ("24", "León", "07"),
    ("34", "Palencia", "07"),
    ("37", "Salamanca", "07"),
    ("40", "Segovia", "07"),
    ("42", "Soria", "07"),
    ("47", "Valladolid", "07"),
    ("49", "Zamora", "07"),
    ("02", "Albacete", "08"),
    ("13", "Ciudad Real", "08"),
    ("16", "Cuenca", "08"),
    ("19", "Guadalajara", "08"),
    ("45", "Toledo", "08"),
    ("08", "Barcelona", "09"),
    ("17", "Girona", "09"),
    ("25", "Lleida", "09"),
    ("43", "Tarragona", "09"),
    ("03", "Alicante/Alacant", "10"),
    ("12", "Castellón/Castelló", "10"),
    ("46", "Valencia/València", "10"),
    ("06", "Badajoz", "11"),
    ("10", "Cáceres", "11"),
    ("15", "Coruña, A", "12"),
    ("27", "Lugo", "12"),
    ("32", "Ourense", "12"),
    ("36", "Pontevedra", "12"),
    ("28", "Madrid", "13"),
    ("30", "Murcia", "14"),
    ("31", "Navarra", "15"),
    ("01", "Araba/Álava", "16"),
    ("48", "Bizkaia", "16"),
    ("20", "Gipuzkoa", "16"),
    ("26", "Rioja, La", "17"),
    ("51", "Ceuta", "18"),
    ("52", "Melilla", "19"),
];

/// Canonical display name for a CCAA code, if the code is known.
#[must_use]
pub fn region_name(code: &str) -> Option<&'static str> {
    AUTONOMOUS_COMMUNITIES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Canonical display name for a province code, if the code is known.
#[must_use]
pub fn province_name(code: &str) -> Option<&'static str> {
    PROVINCES
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|(_, name, _)| *name)
}

/// CCAA code a province belongs to, if the province code is known.
#[must_use]
pub fn region_code_for_province(code: &str) -> Option<&'static str> {
    PROVINCES
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|(_, _, region)| *region)
}
