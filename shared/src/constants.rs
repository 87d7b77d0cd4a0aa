pub const TRY_AGAIN_KEY: &str = "tryagain";
pub const TRY_AGAIN_THRESHOLD: f64 = 0.4;

pub const FULL_TURN: f64 = 360.0;
pub const EXTRA_ROTATIONS: u32 = 6;
pub const SPIN_DURATION_MS: f64 = 4500.0;

// cubic-bezier control points for the spin deceleration
pub const SPIN_EASING: (f64, f64, f64, f64) = (0.2, 0.8, 0.2, 1.0);

pub const WHEEL_SIZE_LARGE: u32 = 500;
pub const WHEEL_SIZE_SMALL: u32 = 320;
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const COMPACT_WHEEL_BELOW: u32 = 400;

pub const LABEL_RADIUS_RATIO: f64 = 0.72;

// Pointer offset (px from the wheel center) that reaches the full tilt
pub const TILT_RANGE_PX: f64 = 100.0;
pub const MAX_TILT_DEG: f64 = 5.0;

pub const PRIZE_DATA_ELEMENT_ID: &str = "prize-data";
