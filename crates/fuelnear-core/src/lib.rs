pub mod fuel;
pub mod geo;
pub mod regions;
pub mod station;

pub use fuel::FuelType;
pub use geo::Coordinates;
pub use regions::{Province, Region, AUTONOMOUS_COMMUNITIES, PROVINCES};
pub use station::{PriceTable, Station};
