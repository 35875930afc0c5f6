pub mod draw_list;
pub mod surface;
pub mod viewport;

// Re-export key types for convenient access
pub use draw_list::{DrawList, DrawOp, LineInstance};
pub use surface::{BlendMode, Color, Surface};
pub use viewport::{BackingSize, Viewport, REFERENCE_DPI};
