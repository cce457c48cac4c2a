pub mod client;
pub mod distance;
pub mod error;
pub mod normalize;
pub mod reference;
pub mod resolver;
pub mod types;

pub use client::{StationsClient, DEFAULT_ENDPOINT};
pub use distance::haversine_km;
pub use error::ResolveError;
pub use normalize::parse_locale_decimal;
pub use reference::{extract_provinces, extract_regions};
pub use resolver::{closest_stations, FilterSpec};
pub use types::{RawSnapshot, RawStation};
