//! Event dispatch: a small fan-out bus with pluggable sinks.
//!
//! Events emitted during a step are queued and delivered to every
//! registered sink when the driver flushes at the end of the step.
//! Keeping delivery out of the hot loop means sinks never stall the
//! integrator mid-step.

use std::collections::VecDeque;

use crate::events::SimulationEvent;
use crate::sinks::EventSink;

/// Fan-out event bus for run telemetry.
pub struct EventBus {
    pending: VecDeque<SimulationEvent>,
    sinks: Vec<Box<dyn EventSink>>,
    enabled: bool,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
            sinks: Vec::new(),
            enabled: true,
        }
    }

    /// Registers a sink. Sinks see every event emitted after this call.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Turns the bus on or off. While off, `emit` discards events.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Queues an event for the next flush.
    pub fn emit(&mut self, event: SimulationEvent) {
        if self.enabled {
            self.pending.push_back(event);
        }
    }

    /// Delivers every queued event to every sink, in emission order.
    pub fn flush(&mut self) {
        while let Some(event) = self.pending.pop_front() {
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
        }
    }

    /// Flushes any remaining events and lets each sink finish up.
    pub fn close(&mut self) {
        self.flush();
        for sink in &mut self.sinks {
            sink.finalize();
        }
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
