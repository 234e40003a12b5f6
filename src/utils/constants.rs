pub const GRAVITY: f64 = 9.81; // m/s^2
pub const AIR_DENSITY: f64 = 1.2041; // kg/m^3, fixed for every aircraft
pub const OSWALD_EFFICIENCY: f64 = 1.10;
pub const KMH_TO_MS: f64 = 1.0 / 3.6;

// Step driver
pub const DEFAULT_STEP_SIZE: f64 = 0.02; // 50 Hz
pub const DEFAULT_MAX_SUBSTEPS: u32 = 50; // one simulated second per host frame
pub const STEP_TOLERANCE: f64 = 1e-9;

// Numeric guards
pub const MIN_AIRSPEED: f64 = 1e-6; // m/s
pub const NORMALIZATION_EPSILON: f64 = 1e-9;

// Controls
pub const THROTTLE_STEP: f64 = 0.01;
pub const MAX_DEFLECTION: f64 = 1.0;
