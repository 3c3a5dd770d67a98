//! Authoritative constants shared across the planner.

/// Ball radius in meters (pool ball on the reference table).
pub const BALL_R: f64 = 0.0125;

/// Magnitude below which a vector is treated as degenerate.
pub const EPS: f64 = 1e-9;

/// Slack applied to clearance and rail-bound comparisons.
pub const CLEARANCE_TOL: f64 = 1e-4;

/// Reference table size in meters (width, height).
pub const DEFAULT_TABLE: (f64, f64) = (0.73, 0.375);

/// Detections below this confidence are discarded.
pub const MIN_CONFIDENCE: f64 = 0.30;

/// Minimum center-to-center spacing for generated layouts.
pub const MIN_SEPARATION: f64 = 4.0 * BALL_R;
