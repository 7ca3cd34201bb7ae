//! Order tracking simulation: a fixed sequence of four stages advanced by timers.

pub mod simulator;
pub mod tracker;

pub use simulator::{Tick, TrackingSettings, TrackingSnapshot, TrackingState, MINUTES_PER_STAGE};
pub use tracker::{spawn_tracker, TrackerHandle};
