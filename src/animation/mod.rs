pub mod interpolator;
pub mod ticker;

pub use interpolator::{
    angular_path, bearing_steps, normalize_bearing, travel_steps, MOVE_STEP_UNITS,
    TURN_STEP_DEGREES,
};
pub use ticker::Ticker;
