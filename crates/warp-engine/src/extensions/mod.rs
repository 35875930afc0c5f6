// extensions/mod.rs
//
// Math helpers shared by the simulators but not tied to either of them.

pub mod easing;

pub use easing::{Easing, ease_vec2, lerp, lerp_vec2, map_range};
