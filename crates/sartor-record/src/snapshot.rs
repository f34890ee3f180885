//! Per-piece state snapshots.
//!
//! A snapshot freezes one piece's kinematic state mid-run so it can be
//! saved, diffed against a later run, or used to seed a replay.

use serde::{Deserialize, Serialize};

/// Frozen kinematic state of a single piece.
///
/// Positions and velocities are interleaved `[x, y, z]` triples, one
/// per vertex, in vertex order. Serialized with `bincode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub timestep: u32,
    pub sim_time: f64,
    /// Name of the piece this state belongs to.
    pub piece: String,
    pub positions: Vec<f32>,
    pub velocities: Vec<f32>,
    pub vertex_count: usize,
}

impl StateSnapshot {
    /// Builds a snapshot from a piece's SoA buffers.
    ///
    /// All six slices must have the same length.
    #[allow(clippy::too_many_arguments)]
    pub fn from_soa(
        timestep: u32,
        sim_time: f64,
        piece: &str,
        pos_x: &[f32],
        pos_y: &[f32],
        pos_z: &[f32],
        vel_x: &[f32],
        vel_y: &[f32],
        vel_z: &[f32],
    ) -> Self {
        let interleave = |xs: &[f32], ys: &[f32], zs: &[f32]| -> Vec<f32> {
            xs.iter()
                .zip(ys)
                .zip(zs)
                .flat_map(|((&x, &y), &z)| [x, y, z])
                .collect()
        };

        Self {
            timestep,
            sim_time,
            piece: piece.to_string(),
            positions: interleave(pos_x, pos_y, pos_z),
            velocities: interleave(vel_x, vel_y, vel_z),
            vertex_count: pos_x.len(),
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, String> {
        bincode::serialize(self).map_err(|e| format!("snapshot encode failed: {e}"))
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, String> {
        bincode::deserialize(data).map_err(|e| format!("snapshot decode failed: {e}"))
    }
}
