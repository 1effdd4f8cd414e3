// Unit conversion factors
pub const FEET_TO_METERS: f64 = 0.3048; // m/ft
pub const KNOTS_TO_MPS: f64 = 0.514444; // (m/s)/kt
pub const STATUTE_MILE_TO_METERS: f64 = 1609.344; // m/SM
pub const FEET_PER_STATUTE_MILE: f64 = 5280.0; // ft/SM
pub const FEET_PER_NAUTICAL_MILE: f64 = 6076.12; // ft/NM
pub const METERS_PER_NAUTICAL_MILE: f64 = 1852.0; // m/NM

// Glidepath
pub const GLIDESLOPE_DEG: f64 = 3.0;
pub const LANDING_HEIGHT_FT: f64 = 10.0; // animation ends at this height above the TDZ
pub const BREAKOUT_LEAD_TIME_S: f64 = 3.0; // sim seconds between start and breakout
pub const MIN_START_MARGIN_FT: f64 = 50.0; // start at least this far above the ceiling

// Approach speed limits [kt]
pub const MIN_APPROACH_SPEED_KT: f64 = 50.0;
pub const MAX_APPROACH_SPEED_KT: f64 = 200.0;
pub const DEFAULT_APPROACH_SPEED_KT: f64 = 120.0;

// Diagnostic clock acceleration used by automated end-to-end runs
pub const TEST_MODE_TIME_MULTIPLIER: f64 = 10.0;

// Runway geometry [ft]
pub const RUNWAY_LENGTH_FT: f64 = 10000.0;
pub const RUNWAY_WIDTH_FT: f64 = 150.0;
pub const TDZ_OFFSET_FT: f64 = 1000.0; // touchdown zone past threshold
pub const THRESHOLD_BAR_EXTENSION_FT: f64 = 90.0; // total, split across both sides
pub const ELEVATED_LIGHT_HEIGHT_FT: f64 = 2.0;
pub const INSET_LIGHT_HEIGHT_FT: f64 = 0.0;

// Flashers
pub const RABBIT_SWEEP_MS: u64 = 500; // one full sweep regardless of station count
pub const REIL_TOGGLE_MS: u64 = 250; // 2 Hz on/off

// PAPI thresholds [deg]
pub const PAPI_ALL_WHITE_DEG: f64 = 3.5;
pub const PAPI_SLIGHTLY_HIGH_DEG: f64 = 3.25;
pub const PAPI_SLIGHTLY_LOW_DEG: f64 = 2.75;
pub const PAPI_ALL_RED_DEG: f64 = 2.5;
pub const PAPI_LIGHT_COUNT: usize = 4;

// Fog
pub const RVR_FOG_START_FRACTION: f64 = 0.1;
pub const RVR_FOG_END_FRACTION: f64 = 0.8;
pub const SM_FOG_START_FRACTION: f64 = 0.3;
pub const SM_FOG_END_FRACTION: f64 = 1.0;
pub const CONTRAST_THRESHOLD_LN: f64 = 3.912; // -ln(0.02), Koschmieder
pub const IN_CLOUD_FOG_END_M: f64 = 60.0;
