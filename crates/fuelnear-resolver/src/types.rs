//! Wire types for the MINETUR `EstacionesTerrestres` endpoint.
//!
//! ## Observed shape from the live feed
//!
//! ### Numeric fields are locale-formatted strings
//! Coordinates and every price column arrive as Spanish-locale decimal
//! strings with a comma separator, e.g. `"40,416800"` / `"1,589"`. Nothing
//! in this module parses them; see [`crate::normalize`] for the boundary
//! where strings become numbers.
//!
//! ### Price columns
//! One column per fuel product, absent or `null` (and occasionally an
//! empty string) when the station does not sell that fuel. All fourteen
//! are modelled as `Option<String>` with `#[serde(default)]` and accessed
//! exclusively through [`RawStation::raw_price`], keyed by
//! [`FuelType`] — never by string.
//!
//! ### `Fecha`
//! A single snapshot-level publication timestamp, `dd/MM/yyyy HH:mm:ss`.
//! There is no per-station date in the feed; date filtering is therefore
//! all-or-nothing across a snapshot.
//!
//! ### Extra columns
//! The feed also carries `Horario`, `Margen`, `Tipo Venta`, `Remisión`,
//! `% BioEtanol` and `% Éster metílico`; only the first is kept (it is
//! useful display data), the rest are ignored by serde.

use chrono::NaiveDateTime;
use fuelnear_core::FuelType;
use serde::Deserialize;

/// Top-level response from the provider: one full dataset publication.
/// Immutable once fetched; every resolution call fetches its own.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSnapshot {
    /// Publication timestamp string, `dd/MM/yyyy HH:mm:ss`.
    #[serde(rename = "Fecha")]
    pub date: String,

    /// Provider result status, `"OK"` on success.
    #[serde(rename = "ResultadoConsulta", default)]
    pub status: String,

    /// Free-text note (legal attribution boilerplate).
    #[serde(rename = "Nota", default)]
    pub note: String,

    /// Every station in the country, in provider order.
    #[serde(rename = "ListaEESSPrecio", default)]
    pub stations: Vec<RawStation>,
}

impl RawSnapshot {
    /// Publication timestamp parsed into a typed value, if it matches the
    /// provider's `dd/MM/yyyy HH:mm:ss` format.
    #[must_use]
    pub fn published_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.date, "%d/%m/%Y %H:%M:%S").ok()
    }
}

/// One station exactly as the provider reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStation {
    /// Provider-assigned station ID, unique within a snapshot.
    #[serde(rename = "IDEESS")]
    pub id: String,

    /// Signage / brand name, free text (e.g. `"REPSOL"`, `"CEPSA"`).
    #[serde(rename = "Rótulo", default)]
    pub signage: String,

    #[serde(rename = "Dirección", default)]
    pub address: String,

    #[serde(rename = "Horario", default)]
    pub schedule: String,

    #[serde(rename = "Localidad", default)]
    pub locality: String,

    #[serde(rename = "Municipio", default)]
    pub municipality: String,

    #[serde(rename = "IDMunicipio", default)]
    pub municipality_id: String,

    /// Province free text. For multi-province communities the feed spells
    /// it `"PALMAS (LAS) - GRAN CANARIA"` style; the text before `" - "`
    /// doubles as a region display name.
    #[serde(rename = "Provincia", default)]
    pub province: String,

    #[serde(rename = "IDProvincia", default)]
    pub province_code: String,

    /// Autonomous community code.
    #[serde(rename = "IDCCAA", default)]
    pub region_code: String,

    #[serde(rename = "C.P.", default)]
    pub postal_code: String,

    /// Latitude, comma-decimal string.
    #[serde(rename = "Latitud", default)]
    pub latitude: String,

    /// Longitude, comma-decimal string.
    #[serde(rename = "Longitud (WGS84)", default)]
    pub longitude: String,

    #[serde(rename = "Precio Gasoleo A", default)]
    pub price_diesel_a: Option<String>,

    #[serde(rename = "Precio Gasoleo B", default)]
    pub price_diesel_b: Option<String>,

    #[serde(rename = "Precio Gasoleo Premium", default)]
    pub price_diesel_premium: Option<String>,

    #[serde(rename = "Precio Gasolina 95 E5", default)]
    pub price_gasoline_95_e5: Option<String>,

    #[serde(rename = "Precio Gasolina 95 E5 Premium", default)]
    pub price_gasoline_95_e5_premium: Option<String>,

    #[serde(rename = "Precio Gasolina 95 E10", default)]
    pub price_gasoline_95_e10: Option<String>,

    #[serde(rename = "Precio Gasolina 98 E5", default)]
    pub price_gasoline_98_e5: Option<String>,

    #[serde(rename = "Precio Gasolina 98 E10", default)]
    pub price_gasoline_98_e10: Option<String>,

    #[serde(rename = "Precio Biodiesel", default)]
    pub price_biodiesel: Option<String>,

    #[serde(rename = "Precio Bioetanol", default)]
    pub price_bioethanol: Option<String>,

    #[serde(rename = "Precio Gas Natural Comprimido", default)]
    pub price_cng: Option<String>,

    #[serde(rename = "Precio Gas Natural Licuado", default)]
    pub price_lng: Option<String>,

    #[serde(rename = "Precio Gases licuados del petróleo", default)]
    pub price_lpg: Option<String>,

    #[serde(rename = "Precio Hidrogeno", default)]
    pub price_hydrogen: Option<String>,
}

impl RawStation {
    /// The raw, still locale-formatted price string for a fuel, if the
    /// provider sent one. Exhaustive over [`FuelType`].
    #[must_use]
    pub fn raw_price(&self, fuel: FuelType) -> Option<&str> {
        let field = match fuel {
            FuelType::DieselA => &self.price_diesel_a,
            FuelType::DieselB => &self.price_diesel_b,
            FuelType::DieselPremium => &self.price_diesel_premium,
            FuelType::Gasoline95E5 => &self.price_gasoline_95_e5,
            FuelType::Gasoline95E5Premium => &self.price_gasoline_95_e5_premium,
            FuelType::Gasoline95E10 => &self.price_gasoline_95_e10,
            FuelType::Gasoline98E5 => &self.price_gasoline_98_e5,
            FuelType::Gasoline98E10 => &self.price_gasoline_98_e10,
            FuelType::Biodiesel => &self.price_biodiesel,
            FuelType::Bioethanol => &self.price_bioethanol,
            FuelType::CompressedNaturalGas => &self.price_cng,
            FuelType::LiquefiedNaturalGas => &self.price_lng,
            FuelType::Lpg => &self.price_lpg,
            FuelType::Hydrogen => &self.price_hydrogen,
        };
        field.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_provider_field_names() {
        let json = r#"{
            "Fecha": "27/08/2026 8:00:00",
            "ResultadoConsulta": "OK",
            "Nota": "Archivo de todos los productos.",
            "ListaEESSPrecio": [{
                "IDEESS": "1048",
                "Rótulo": "REPSOL",
                "Dirección": "CALLE MAYOR 1",
                "Horario": "L-D: 24H",
                "Localidad": "MADRID",
                "Municipio": "Madrid",
                "IDMunicipio": "4309",
                "Provincia": "MADRID",
                "IDProvincia": "28",
                "IDCCAA": "13",
                "C.P.": "28001",
                "Latitud": "40,416800",
                "Longitud (WGS84)": "-3,703800",
                "Precio Gasoleo A": "1,489",
                "Precio Gasolina 95 E5": "1,589",
                "Precio Hidrogeno": null
            }]
        }"#;

        let snapshot: RawSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.date, "27/08/2026 8:00:00");
        assert_eq!(snapshot.status, "OK");
        assert_eq!(snapshot.stations.len(), 1);

        let station = &snapshot.stations[0];
        assert_eq!(station.id, "1048");
        assert_eq!(station.signage, "REPSOL");
        assert_eq!(station.latitude, "40,416800");
        assert_eq!(station.raw_price(FuelType::DieselA), Some("1,489"));
        assert_eq!(station.raw_price(FuelType::Hydrogen), None);
        assert_eq!(station.raw_price(FuelType::Lpg), None);
    }

    #[test]
    fn published_at_parses_provider_timestamp() {
        let snapshot: RawSnapshot = serde_json::from_str(
            r#"{"Fecha": "01/03/2026 14:30:00", "ListaEESSPrecio": []}"#,
        )
        .unwrap();
        let ts = snapshot.published_at().unwrap();
        assert_eq!(ts.format("%Y-%m-%d %H:%M").to_string(), "2026-03-01 14:30");
    }

    #[test]
    fn published_at_none_for_garbage_date() {
        let snapshot: RawSnapshot =
            serde_json::from_str(r#"{"Fecha": "soon", "ListaEESSPrecio": []}"#).unwrap();
        assert!(snapshot.published_at().is_none());
    }

    #[test]
    fn missing_price_columns_default_to_none() {
        let json = r#"{
            "Fecha": "27/08/2026 8:00:00",
            "ListaEESSPrecio": [{"IDEESS": "7"}]
        }"#;
        let snapshot: RawSnapshot = serde_json::from_str(json).unwrap();
        let station = &snapshot.stations[0];
        for fuel in FuelType::ALL {
            assert_eq!(station.raw_price(fuel), None);
        }
    }
}
