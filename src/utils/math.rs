use std::f64::consts::PI;

use super::constants::*;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

#[inline]
pub fn feet_to_meters(ft: f64) -> f64 {
    ft * FEET_TO_METERS
}

#[inline]
pub fn knots_to_mps(kt: f64) -> f64 {
    kt * KNOTS_TO_MPS
}

#[inline]
pub fn statute_miles_to_meters(sm: f64) -> f64 {
    sm * STATUTE_MILE_TO_METERS
}

#[inline]
pub fn rvr_to_statute_miles(rvr_ft: f64) -> f64 {
    rvr_ft / FEET_PER_STATUTE_MILE
}

#[inline]
pub fn nautical_miles_to_feet(nm: f64) -> f64 {
    nm * FEET_PER_NAUTICAL_MILE
}

/// Altitude above the touchdown zone [ft] on a glidepath of `angle_deg`
/// at `distance_nm` from touchdown.
#[inline]
pub fn glidepath_altitude_ft(distance_nm: f64, angle_deg: f64) -> f64 {
    deg_to_rad(angle_deg).tan() * distance_nm * FEET_PER_NAUTICAL_MILE
}

/// Inverse of [`glidepath_altitude_ft`]: distance [NM] at which the
/// glidepath passes through `altitude_ft`.
#[inline]
pub fn glidepath_distance_nm(altitude_ft: f64, angle_deg: f64) -> f64 {
    altitude_ft / (deg_to_rad(angle_deg).tan() * FEET_PER_NAUTICAL_MILE)
}

/// Ground speed expressed in nautical miles per millisecond.
#[inline]
pub fn knots_to_nm_per_ms(kt: f64) -> f64 {
    knots_to_mps(kt) / (METERS_PER_NAUTICAL_MILE * 1000.0)
}
