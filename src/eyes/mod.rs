pub mod pair;
pub mod palette;
pub mod scene;

pub use pair::EyePair;
pub use palette::Palette;
pub use scene::Scene;

use std::time::Duration;

pub const BASE_DIAMETER: f32 = 50.0;
pub const MAX_DIAMETER: f32 = 500.0;

/// Horizontal socket offset from the pair center, as a function of the
/// diameter mapped over [BASE_DIAMETER, MAX_DIAMETER].
pub const SOCKET_OFFSET_MIN: f32 = 30.0;
pub const SOCKET_OFFSET_MAX: f32 = 280.0;

pub const PUPIL_GRAVITY: f32 = 5.0;
pub const PUPIL_FRICTION: f32 = 0.98;
pub const JIGGLE_AMOUNT: f32 = 0.4;

/// Controls bounciness. -1 would be a perfect bounce.
pub const BOUNCE_FACTOR: f32 = -0.8;

/// Impact speed (L1 norm of the pupil velocity) above which a bounce
/// counts as hard.
pub const HARD_BOUNCE_SPEED: f32 = 50.0;

/// Pointer speed per frame above which a drag grows the main eye.
pub const FAST_DRAG_SPEED: f32 = 100.0;

pub const GROW_SMOOTHING: f32 = 0.05;
pub const DECAY_SMOOTHING: f32 = 0.005;

/// Stamps below this diameter are culled.
pub const CULL_DIAMETER: f32 = 1.0;

pub const SHRINK_DELAY: Duration = Duration::from_millis(1000);

/// Main eye stroke weight over [BASE_DIAMETER, MAX_DIAMETER].
pub const STROKE_MIN: f32 = 3.0;
pub const STROKE_MAX: f32 = 15.0;

pub const HOVER_COLOR: crate::graphics::Argb = 0xFF_FF_C8_00;
