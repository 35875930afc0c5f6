//! Geometry kernel: shape outlines and 2D rotation. Pure functions only.

pub mod rotate;
pub mod shape;

pub use rotate::rotate_around;
pub use shape::{boundary_point, Shape};
