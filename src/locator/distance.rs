use crate::models::GeoPoint;

/// Mean Earth radius in km.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points (haversine), rounded to
/// one decimal of a kilometer — the precision shown to the user.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    (EARTH_RADIUS_KM * c * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_points_are_zero() {
        let p = GeoPoint {
            lat: 37.5665,
            lng: 126.978,
        };
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let a = GeoPoint { lat: 37.0, lng: 127.0 };
        let b = GeoPoint { lat: 38.0, lng: 127.0 };
        let d = haversine_km(a, b);
        assert!((d - 111.2).abs() <= 0.5, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint {
            lat: 37.5665,
            lng: 126.978,
        };
        let b = GeoPoint {
            lat: 37.4979,
            lng: 127.0276,
        };
        assert_eq!(haversine_km(a, b), haversine_km(b, a));
    }

    #[test]
    fn result_has_one_decimal() {
        let a = GeoPoint { lat: 37.0, lng: 127.0 };
        let b = GeoPoint {
            lat: 37.031,
            lng: 127.017,
        };
        let d = haversine_km(a, b);
        assert_eq!((d * 10.0).round() / 10.0, d);
    }
}
