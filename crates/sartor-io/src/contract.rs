//! Simulation input/output contract types.
//!
//! These types define the I/O boundary of the Sartor draping engine.
//! They are serializable for CLI configuration and scene files.

use serde::{Deserialize, Serialize};
use sartor_engine::PhysicsConfig;
use sartor_mesh::TriangleMesh;
use sartor_types::constants;

/// Everything a draping run needs: pieces, optional body, parameters.
///
/// Contains everything needed to set up and execute a simulation:
/// the garment pieces, an optional avatar body, and run parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrapeInput {
    /// Garment pieces to drape. At least one; names must be unique.
    pub pieces: Vec<PieceInput>,

    /// The static avatar body the pieces collide against.
    /// `None` for free-fall and ground-drop scenarios.
    pub body: Option<TriangleMesh>,

    /// Run parameters.
    pub params: RunParams,
}

/// One garment piece: its mesh plus authoring-time placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PieceInput {
    /// Unique piece name; used as the key in recorded frames.
    pub name: String,

    /// Panel geometry in authored coordinates.
    pub mesh: TriangleMesh,

    /// World-space translation applied after unit conversion.
    #[serde(default)]
    pub offset: [f32; 3],
}

/// Parameters for a draping run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunParams {
    /// Number of discrete timesteps to execute.
    pub steps: u32,

    /// Uniform scale applied to the body mesh before collision setup.
    /// Authored avatars are larger than world scale.
    pub body_scale: f32,

    /// Physics constants passed straight to the engine.
    #[serde(default)]
    pub config: PhysicsConfig,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            steps: 500,
            body_scale: constants::AVATAR_SCALING,
            config: PhysicsConfig::default(),
        }
    }
}

/// Summary of a completed run, reported alongside the frame dump.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of timesteps executed.
    pub steps: u32,
    /// Number of recorded frames (initial state + one per step).
    pub frames: usize,
    /// Wall-clock duration of the stepping loop (seconds).
    pub wall_time_seconds: f64,
    /// Total kinetic energy at the final frame.
    pub final_kinetic_energy: f64,
    /// Piece names in frame order.
    pub pieces: Vec<String>,
}
