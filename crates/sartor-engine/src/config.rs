//! Physics configuration.
//!
//! All physical constants live in one validated, immutable value that
//! is passed into piece and simulation constructors. Nothing in the
//! core reads process-wide state, so multiple simulations with
//! different parameters can run concurrently and tests stay
//! deterministic.

use serde::{Deserialize, Serialize};
use sartor_types::{constants, SartorError, SartorResult};

/// Physical constants for a simulation run.
///
/// Construct with [`PhysicsConfig::default`] and adjust fields, then
/// validate via [`PhysicsConfig::validate`] (the simulation constructor
/// does this for you).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Gravitational acceleration magnitude (m/s²), acting along −Y.
    pub gravity: f32,

    /// Timestep (seconds).
    pub dt: f32,

    /// Maximum vertex speed (m/s). Velocities are magnitude-clamped
    /// after integration; this bounds stiffness-induced blow-up from
    /// the explicit scheme.
    pub max_velocity: f32,

    /// Per-vertex mass (kg).
    pub vertex_mass: f32,

    /// Stretch (stress) force weighting.
    pub stress_weighting: f32,

    /// Relative deformation dead zone for stretch forces. An edge
    /// whose |L − L0| / L0 does not exceed this contributes zero force.
    pub stress_threshold: f32,

    /// Shear force weighting (quad diagonals).
    pub shear_weighting: f32,

    /// Relative deformation dead zone for shear forces.
    pub shear_threshold: f32,

    /// Bend force weighting.
    pub bend_weighting: f32,

    /// Dead zone on the sine-of-dihedral deviation for bend forces.
    pub bend_threshold: f32,

    /// Friction force per unit velocity (opposes current velocity).
    pub friction: f32,

    /// Multiplicative velocity damping per step (1.0 = none).
    pub damping: f32,

    /// Scale of authored garment coordinates per world metre.
    pub unit_scale: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: constants::GRAVITY,
            dt: constants::DEFAULT_DT,
            max_velocity: constants::MAX_VELOCITY,
            vertex_mass: constants::VERTEX_MASS,
            stress_weighting: constants::STRESS_WEIGHTING,
            stress_threshold: constants::STRESS_THRESHOLD,
            shear_weighting: constants::SHEAR_WEIGHTING,
            shear_threshold: constants::SHEAR_THRESHOLD,
            bend_weighting: constants::BEND_WEIGHTING,
            bend_threshold: constants::BEND_THRESHOLD,
            friction: constants::FRICTION_CONSTANT,
            damping: constants::VELOCITY_DAMPING,
            unit_scale: constants::CM_PER_M,
        }
    }
}

impl PhysicsConfig {
    /// Checks every constant is physically meaningful.
    ///
    /// Rejected here, at construction, rather than discovered
    /// mid-simulation.
    pub fn validate(&self) -> SartorResult<()> {
        if !(self.dt > 0.0) {
            return Err(SartorError::InvalidConfig(
                "Timestep dt must be positive".into(),
            ));
        }
        if self.dt > 1.0 {
            return Err(SartorError::InvalidConfig(
                "Timestep dt > 1.0 is unreasonably large".into(),
            ));
        }
        if self.gravity < 0.0 {
            return Err(SartorError::InvalidConfig(
                "Gravity magnitude must be non-negative".into(),
            ));
        }
        if !(self.max_velocity > 0.0) {
            return Err(SartorError::InvalidConfig(
                "Maximum velocity must be positive".into(),
            ));
        }
        if !(self.vertex_mass > 0.0) {
            return Err(SartorError::InvalidConfig(
                "Vertex mass must be positive".into(),
            ));
        }
        for (name, value) in [
            ("stress_weighting", self.stress_weighting),
            ("shear_weighting", self.shear_weighting),
            ("bend_weighting", self.bend_weighting),
            ("friction", self.friction),
        ] {
            if value < 0.0 {
                return Err(SartorError::InvalidConfig(format!(
                    "{} must be non-negative",
                    name
                )));
            }
        }
        for (name, value) in [
            ("stress_threshold", self.stress_threshold),
            ("shear_threshold", self.shear_threshold),
            ("bend_threshold", self.bend_threshold),
        ] {
            if value < 0.0 {
                return Err(SartorError::InvalidConfig(format!(
                    "{} must be non-negative",
                    name
                )));
            }
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(SartorError::InvalidConfig(
                "Damping must be in (0, 1]".into(),
            ));
        }
        if !(self.unit_scale > 0.0) {
            return Err(SartorError::InvalidConfig(
                "Unit scale must be positive".into(),
            ));
        }
        Ok(())
    }
}
