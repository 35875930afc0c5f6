pub mod animation;
pub mod error;
pub mod types;

pub use animation::{step, Animation, AnimationSetup, EngineConfig, EngineContext, FromSetupJson};
pub use error::EngineError;
pub use types::{AnimationEvent, FieldPhase, WireEvent};
