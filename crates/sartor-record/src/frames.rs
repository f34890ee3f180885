//! Playback frame buffer.
//!
//! An append-only ordered sequence of per-step position snapshots,
//! one entry per completed step (plus the initial state). Consumed
//! by external animators/renderers; never read by the physics core.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Positions of every piece at one point in the simulation.
///
/// Keys are piece names; values are flat position triples
/// `[x0, y0, z0, x1, y1, z1, ...]`. A `BTreeMap` keeps piece
/// iteration order deterministic for playback and diffing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    /// Per-piece vertex positions.
    pub positions: BTreeMap<String, Vec<f32>>,
}

impl Frame {
    /// Creates an empty frame.
    pub fn new() -> Self {
        Self {
            positions: BTreeMap::new(),
        }
    }

    /// Records a piece's positions into this frame.
    pub fn insert(&mut self, name: &str, positions: Vec<f32>) {
        self.positions.insert(name.to_string(), positions);
    }

    /// Number of vertices recorded for the named piece, if present.
    pub fn vertex_count(&self, name: &str) -> Option<usize> {
        self.positions.get(name).map(|p| p.len() / 3)
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

/// Append-only buffer of frames, one per completed simulation step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameBuffer {
    frames: Vec<Frame>,
}

impl FrameBuffer {
    /// Creates an empty frame buffer.
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Appends a frame.
    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Total number of recorded frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Returns the frame at index `i`, if recorded.
    pub fn frame(&self, i: usize) -> Option<&Frame> {
        self.frames.get(i)
    }

    /// Returns the most recent frame, if any.
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Iterates over all frames in recording order.
    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }

    /// Serializes the whole buffer to compact binary format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, String> {
        bincode::serialize(self).map_err(|e| format!("Frame buffer serialization failed: {}", e))
    }

    /// Deserializes a buffer from binary format.
    pub fn from_bytes(data: &[u8]) -> Result<Self, String> {
        bincode::deserialize(data).map_err(|e| format!("Frame buffer deserialization failed: {}", e))
    }
}
