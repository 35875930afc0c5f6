pub mod api;
pub mod core;
pub mod extensions;
pub mod field;
pub mod geometry;
pub mod input;
pub mod renderer;
pub mod swarm;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::animation::{step, Animation, AnimationSetup, EngineConfig, EngineContext, FromSetupJson};
pub use api::error::EngineError;
pub use api::types::{AnimationEvent, FieldPhase, WireEvent};
pub use crate::core::rng::Rng;
pub use crate::core::schedule::{Scheduler, TaskId};
pub use crate::core::time::{FixedTimestep, FrameClock};
pub use extensions::{ease_vec2, lerp, lerp_vec2, map_range, Easing};
pub use field::{FieldConfig, FieldTask, OrbitalField, Star};
pub use geometry::{boundary_point, rotate_around, Shape};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::{BackingSize, BlendMode, Color, DrawList, DrawOp, LineInstance, Surface, Viewport};
pub use swarm::{MorphPhase, MorphSwarm, Particle, SwarmConfig, SwarmTask};
pub use systems::steering::Kinematics;
