use crate::domain::model::Location;

/// Mean Earth radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Great-circle distance in miles between two points given in radians,
/// using the spherical law of cosines.
///
/// When rounding pushes the cosine sum above 1 the distance is reported as 0.
/// A zero result therefore means "negligible", not "same venue". Below -1 the
/// sum is clamped, so antipodal points come out as half the circumference.
pub fn geo_distance(from: Location, to: Location) -> f64 {
    if from == to {
        return 0.0;
    }

    let y = from.lat.sin() * to.lat.sin();
    let x = from.lat.cos() * to.lat.cos() * (to.lng - from.lng).cos();

    let c = x + y;
    if c > 1.0 {
        return 0.0;
    }

    c.max(-1.0).acos() * EARTH_RADIUS_MILES
}
