pub mod sampling;
pub mod steering;
