//! Great-circle distance on the WGS84 sphere approximation.

use fuelnear_core::Coordinates;

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinate pairs, in kilometres.
///
/// Symmetric, zero for identical points, and correct across the
/// antimeridian without special casing. Inputs are taken at face value:
/// out-of-range degrees still produce a number, not an error.
#[must_use]
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    const MADRID: Coordinates = Coordinates {
        lat: 40.4168,
        lng: -3.7038,
    };
    const BARCELONA: Coordinates = Coordinates {
        lat: 41.3851,
        lng: 2.1734,
    };

    #[test]
    fn identical_points_are_zero_distance() {
        assert!(haversine_km(MADRID, MADRID).abs() < 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let ab = haversine_km(MADRID, BARCELONA);
        let ba = haversine_km(BARCELONA, MADRID);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn madrid_to_barcelona_is_about_505_km() {
        let d = haversine_km(MADRID, BARCELONA);
        assert!((500.0..510.0).contains(&d), "got {d} km");
    }

    #[test]
    fn antimeridian_crossing_stays_short() {
        // Two points 2° of longitude apart straddling ±180: the formula
        // must take the short way round, not the 358° way.
        let west = Coordinates::new(0.0, 179.0);
        let east = Coordinates::new(0.0, -179.0);
        let d = haversine_km(west, east);
        assert!(d < 250.0, "got {d} km");
    }

    #[test]
    fn one_degree_latitude_is_about_111_km() {
        let a = Coordinates::new(40.0, 0.0);
        let b = Coordinates::new(41.0, 0.0);
        let d = haversine_km(a, b);
        assert!((110.0..113.0).contains(&d), "got {d} km");
    }
}
