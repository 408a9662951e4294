//! Distances between decoded positions.

use libm::{atan2, cos, sin, sqrt};

/// Radius of the sphere approximating the earth, in metres.
pub const EARTH_RADIUS: f64 = 6_372_795.0;

/// Great-circle distance in metres between two positions in signed decimal
/// degrees.
///
/// The earth is treated as a sphere, so results may be off by up to 0.5%.
pub fn distance_between(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let delta = (lon1 - lon2).to_radians();
    let (sdlon, cdlon) = (sin(delta), cos(delta));

    let (lat1, lat2) = (lat1.to_radians(), lat2.to_radians());
    let (slat1, clat1) = (sin(lat1), cos(lat1));
    let (slat2, clat2) = (sin(lat2), cos(lat2));

    let a = clat1 * slat2 - slat1 * clat2 * cdlon;
    let b = clat2 * sdlon;
    let numer = sqrt(a * a + b * b);
    let denom = slat1 * slat2 + clat1 * clat2 * cdlon;

    atan2(numer, denom) * EARTH_RADIUS
}
