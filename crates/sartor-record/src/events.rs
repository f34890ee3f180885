//! Event types emitted by the simulation driver.

use serde::{Deserialize, Serialize};

/// One telemetry event, tagged with the step it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Step number (0-indexed).
    pub timestep: u32,
    pub kind: EventKind,
}

impl SimulationEvent {
    pub fn new(timestep: u32, kind: EventKind) -> Self {
        Self { timestep, kind }
    }
}

/// What happened.
///
/// Values carry just enough data for monitoring; full state lives in
/// frames and snapshots, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventKind {
    StepBegin {
        /// Target simulation time for this step (seconds).
        sim_time: f64,
    },
    StepEnd {
        /// Wall-clock duration of the step (seconds).
        wall_time: f64,
    },
    /// Collision resolution moved at least one vertex of a piece.
    CollisionResolved {
        piece: String,
        /// Vertices corrected this step.
        resolved_count: u32,
        /// Deepest penetration seen before correction (metres).
        max_penetration: f32,
    },
    /// Post-step kinetic energy, summed over all pieces.
    Energy { kinetic: f64 },
}
