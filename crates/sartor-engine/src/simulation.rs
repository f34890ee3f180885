//! Simulation driver.
//!
//! Orchestrates one or more independent pieces through repeated step
//! cycles: forces for all pieces, then integration and collision
//! resolution per piece, then a position snapshot into the frame
//! buffer. Pieces do not interact; iteration runs in sorted name
//! order so runs are reproducible.

use std::collections::BTreeMap;
use std::time::Instant;

use sartor_record::{
    EventBus, EventKind, EventSink, Frame, FrameBuffer, SimulationEvent, StateSnapshot,
};
use sartor_types::{SartorError, SartorResult};

use crate::collider::{Collider, ContactSummary};
use crate::config::PhysicsConfig;
use crate::piece::Piece;
use crate::{forces, integrator};

/// Runs a draping simulation and keeps track of piece positions.
pub struct Simulation {
    config: PhysicsConfig,
    pieces: BTreeMap<String, Piece>,
    colliders: Vec<Box<dyn Collider>>,
    frames: FrameBuffer,
    bus: EventBus,
    timestep: u32,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("config", &self.config)
            .field("timestep", &self.timestep)
            .finish_non_exhaustive()
    }
}

impl Simulation {
    /// Create a simulation over the given pieces.
    ///
    /// Validates the configuration and rejects duplicate piece names.
    /// The initial vertex layout is captured as frame 0 before any
    /// stepping.
    pub fn new(config: PhysicsConfig, pieces: Vec<Piece>) -> SartorResult<Self> {
        config.validate()?;

        let mut map = BTreeMap::new();
        for piece in pieces {
            if map.contains_key(&piece.name) {
                return Err(SartorError::DuplicatePiece(piece.name));
            }
            map.insert(piece.name.clone(), piece);
        }

        let mut sim = Self {
            config,
            pieces: map,
            colliders: Vec::new(),
            frames: FrameBuffer::new(),
            bus: EventBus::new(),
            timestep: 0,
        };
        sim.record_frame();
        Ok(sim)
    }

    /// Register a collider. All colliders run after integration,
    /// in registration order, followed by the ground clamp.
    pub fn add_collider(&mut self, collider: Box<dyn Collider>) {
        self.colliders.push(collider);
    }

    /// Register a telemetry sink.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.bus.add_sink(sink);
    }

    /// Advance all pieces by `nr_steps` discrete time increments.
    ///
    /// A non-finite position or velocity halts the run immediately
    /// with [`SartorError::NumericalInstability`]; the offending
    /// piece's state is not recorded into a frame.
    pub fn step(&mut self, nr_steps: u32) -> SartorResult<()> {
        for _ in 0..nr_steps {
            let start = Instant::now();
            let sim_time = f64::from(self.timestep) * f64::from(self.config.dt);
            self.bus
                .emit(SimulationEvent::new(self.timestep, EventKind::StepBegin { sim_time }));

            // Phase 1: net forces for every piece from the pre-step state.
            for piece in self.pieces.values_mut() {
                forces::accumulate(piece, &self.config);
            }

            // Phase 2: integrate, resolve collisions, clamp, verify.
            for piece in self.pieces.values_mut() {
                integrator::integrate(piece, &self.config);

                let mut summary = ContactSummary::default();
                for collider in &self.colliders {
                    summary.merge(collider.resolve(piece));
                }
                piece.clamp_above_ground();
                piece.check_finite()?;

                if summary.resolved_count > 0 {
                    self.bus.emit(SimulationEvent::new(
                        self.timestep,
                        EventKind::CollisionResolved {
                            piece: piece.name.clone(),
                            resolved_count: summary.resolved_count,
                            max_penetration: summary.max_penetration,
                        },
                    ));
                }
            }

            self.timestep += 1;
            self.record_frame();

            self.bus.emit(SimulationEvent::new(
                self.timestep - 1,
                EventKind::Energy {
                    kinetic: self.kinetic_energy(),
                },
            ));
            self.bus.emit(SimulationEvent::new(
                self.timestep - 1,
                EventKind::StepEnd {
                    wall_time: start.elapsed().as_secs_f64(),
                },
            ));
            self.bus.flush();
        }
        Ok(())
    }

    /// Snapshot every piece's positions into the frame buffer.
    fn record_frame(&mut self) {
        let mut frame = Frame::new();
        for (name, piece) in &self.pieces {
            frame.insert(name, piece.positions_flat());
        }
        self.frames.push(frame);
    }

    /// Number of recorded frames (initial state + one per step).
    pub fn frame_count(&self) -> usize {
        self.frames.frame_count()
    }

    /// Read-only access to the recorded frames.
    pub fn frames(&self) -> &FrameBuffer {
        &self.frames
    }

    /// Consumes the simulation, returning the frame buffer for playback.
    /// Remaining telemetry is flushed and sinks are finalized.
    pub fn into_frames(mut self) -> FrameBuffer {
        self.bus.close();
        self.frames
    }

    /// Read-only access to a piece by name.
    pub fn piece(&self, name: &str) -> Option<&Piece> {
        self.pieces.get(name)
    }

    /// Names of all pieces, in iteration (sorted) order.
    pub fn piece_names(&self) -> Vec<&str> {
        self.pieces.keys().map(String::as_str).collect()
    }

    /// The configuration this simulation runs with.
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Number of completed steps.
    pub fn steps_completed(&self) -> u32 {
        self.timestep
    }

    /// Total kinetic energy over all pieces.
    pub fn kinetic_energy(&self) -> f64 {
        self.pieces.values().map(Piece::kinetic_energy).sum()
    }

    /// Full kinematic snapshot of one piece at the current timestep,
    /// for replay and diff-based debugging.
    pub fn snapshot(&self, name: &str) -> Option<StateSnapshot> {
        let piece = self.pieces.get(name)?;
        Some(StateSnapshot::from_soa(
            self.timestep,
            f64::from(self.timestep) * f64::from(self.config.dt),
            name,
            &piece.pos_x,
            &piece.pos_y,
            &piece.pos_z,
            &piece.vel_x,
            &piece.vel_y,
            &piece.vel_z,
        ))
    }
}
