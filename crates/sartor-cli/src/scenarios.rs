//! Procedural drape scenarios.
//!
//! Three canonical setups for regression runs and quick demos:
//! 1. **Ground drop** — a flat panel falls onto the ground plane
//! 2. **Sphere drape** — a panel falls onto a sphere
//! 3. **Body drape** — two panels fall onto an avatar proxy

use glam::Vec3;
use sartor_engine::PhysicsConfig;
use sartor_io::{DrapeInput, PieceInput, RunParams};
use sartor_mesh::generators::{quad_grid, uv_sphere};

/// Which scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioKind {
    /// A panel falling onto the ground plane.
    GroundDrop,
    /// A panel draped over a sphere.
    SphereDrape,
    /// Two panels draped over an avatar proxy.
    BodyDrape,
}

impl ScenarioKind {
    /// Parses a scenario name from the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ground_drop" => Some(Self::GroundDrop),
            "sphere_drape" => Some(Self::SphereDrape),
            "body_drape" => Some(Self::BodyDrape),
            _ => None,
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GroundDrop => "ground_drop",
            Self::SphereDrape => "sphere_drape",
            Self::BodyDrape => "body_drape",
        }
    }
}

/// Scenario meshes are authored directly in world metres.
fn metre_scale_params(steps: u32) -> RunParams {
    RunParams {
        steps,
        body_scale: 1.0,
        config: PhysicsConfig {
            unit_scale: 1.0,
            ..Default::default()
        },
    }
}

/// Builds the input for a scenario.
pub fn build(kind: ScenarioKind) -> DrapeInput {
    match kind {
        ScenarioKind::GroundDrop => ground_drop(),
        ScenarioKind::SphereDrape => sphere_drape(),
        ScenarioKind::BodyDrape => body_drape(),
    }
}

/// A 1m × 1m panel at 10×10 resolution dropped from 0.4m.
fn ground_drop() -> DrapeInput {
    DrapeInput {
        pieces: vec![PieceInput {
            name: "panel".into(),
            mesh: quad_grid(10, 10, 1.0, 1.0),
            offset: [0.0, 0.4, 0.0],
        }],
        body: None,
        params: metre_scale_params(500),
    }
}

/// A 1.2m × 1.2m panel falling onto a 0.3m sphere raised off the ground.
fn sphere_drape() -> DrapeInput {
    let mut body = uv_sphere(0.3, 16, 32);
    body.offset_vertices(Vec3::new(0.0, 0.4, 0.0));

    DrapeInput {
        pieces: vec![PieceInput {
            name: "panel".into(),
            mesh: quad_grid(14, 14, 1.2, 1.2),
            offset: [0.0, 0.85, 0.0],
        }],
        body: Some(body),
        params: metre_scale_params(700),
    }
}

/// Front and back panels falling onto an ellipsoidal torso proxy.
fn body_drape() -> DrapeInput {
    // Torso proxy: a sphere stretched vertically, resting on the ground.
    let mut body = uv_sphere(0.2, 16, 32);
    for y in body.pos_y.iter_mut() {
        *y *= 2.2;
    }
    body.place_at_origin();

    DrapeInput {
        pieces: vec![
            PieceInput {
                name: "front".into(),
                mesh: quad_grid(12, 16, 0.6, 0.9),
                offset: [0.0, 0.95, 0.25],
            },
            PieceInput {
                name: "back".into(),
                mesh: quad_grid(12, 16, 0.6, 0.9),
                offset: [0.0, 0.95, -0.25],
            },
        ],
        body: Some(body),
        params: metre_scale_params(900),
    }
}
