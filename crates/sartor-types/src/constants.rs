//! Physical constants and simulation defaults.

/// Gravitational acceleration (m/s²).
pub const GRAVITY: f32 = 9.81;

/// Default simulation timestep (seconds).
pub const DEFAULT_DT: f32 = 0.01;

/// Terminal velocity of a piece vertex (m/s). Explicit integration of
/// stiff springs needs a hard speed cap to stay bounded.
pub const MAX_VELOCITY: f32 = 0.5;

/// Default stretch (stress) force weighting.
pub const STRESS_WEIGHTING: f32 = 100.0;

/// Relative deformation below which stretch forces are not applied.
pub const STRESS_THRESHOLD: f32 = 0.001;

/// Default shear force weighting.
pub const SHEAR_WEIGHTING: f32 = 100.0;

/// Relative deformation below which shear forces are not applied.
pub const SHEAR_THRESHOLD: f32 = 0.001;

/// Default bend force weighting.
pub const BEND_WEIGHTING: f32 = 100.0;

/// Sine-of-dihedral deviation below which bend forces are not applied.
pub const BEND_THRESHOLD: f32 = 0.001;

/// Friction force per unit velocity.
pub const FRICTION_CONSTANT: f32 = 0.05;

/// Multiplicative velocity damping applied every step.
pub const VELOCITY_DAMPING: f32 = 0.9;

/// Garment pattern coordinates are authored in centimetres.
pub const CM_PER_M: f32 = 100.0;

/// Default per-vertex mass (kg).
pub const VERTEX_MASS: f32 = 1.0;

/// Default uniform scale applied to an avatar body mesh on load.
pub const AVATAR_SCALING: f32 = 0.5627;

/// Small offset left between a corrected vertex and the collision
/// surface so the next step does not immediately re-penetrate.
pub const SURFACE_OFFSET: f32 = 0.001;

/// Epsilon for floating-point comparisons.
pub const EPSILON: f32 = 1.0e-7;

/// Epsilon for degenerate triangle detection (area threshold).
pub const DEGENERATE_AREA_THRESHOLD: f32 = 1.0e-10;
