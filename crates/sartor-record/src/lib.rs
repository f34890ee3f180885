//! # sartor-record
//!
//! Recording and telemetry for the Sartor engine: the playback frame
//! buffer, binary state snapshots, and structured simulation events
//! with pluggable sinks.
//!
//! The physics core writes into these types but never reads them back;
//! playback and analysis are strictly downstream concerns.

pub mod bus;
pub mod events;
pub mod frames;
pub mod sinks;
pub mod snapshot;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use frames::{Frame, FrameBuffer};
pub use sinks::{EventSink, TracingSink, VecSink};
pub use snapshot::StateSnapshot;
