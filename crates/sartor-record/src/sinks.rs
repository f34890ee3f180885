//! Event sinks: consumers on the far side of the bus.

use crate::events::SimulationEvent;

/// A consumer of simulation events.
///
/// Sinks are registered on the bus once and receive every event the
/// run emits. `handle` must not panic on unfamiliar event kinds.
pub trait EventSink: Send {
    fn handle(&mut self, event: &SimulationEvent);

    /// Called once when the run ends. Flush buffers, close files, etc.
    fn finalize(&mut self) {}

    fn name(&self) -> &str;
}

/// Buffers every event in memory. Used in tests to assert on what a
/// run emitted.
#[derive(Default)]
pub struct VecSink {
    pub events: Vec<SimulationEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &SimulationEvent) {
        self.events.push(event.clone());
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// Forwards events to `tracing` at a configurable level.
pub struct TracingSink {
    level: tracing::Level,
    seen: u64,
}

impl TracingSink {
    pub fn new(level: tracing::Level) -> Self {
        Self { level, seen: 0 }
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &SimulationEvent) {
        self.seen += 1;
        // `tracing` macros need a const level, so dispatch by hand.
        match self.level {
            tracing::Level::TRACE => {
                tracing::trace!(timestep = event.timestep, kind = ?event.kind, "sim event")
            }
            tracing::Level::DEBUG => {
                tracing::debug!(timestep = event.timestep, kind = ?event.kind, "sim event")
            }
            _ => tracing::info!(timestep = event.timestep, kind = ?event.kind, "sim event"),
        }
    }

    fn finalize(&mut self) {
        tracing::debug!(events = self.seen, "tracing sink done");
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
