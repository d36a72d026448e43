//! State Management
//!
//! Plain value types behind the interactive widgets.

pub mod distance;

pub use distance::{DistanceStepper, DEFAULT_RADIUS_KM, MAX_RADIUS_KM, MIN_RADIUS_KM, STEP_KM};
