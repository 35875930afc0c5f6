pub mod rng;
pub mod schedule;
pub mod time;

pub use rng::Rng;
pub use schedule::{Scheduler, TaskId};
pub use time::{FixedTimestep, FrameClock};
