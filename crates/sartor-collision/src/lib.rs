//! # sartor-collision
//!
//! Collision detection and contact response against static obstacles.
//!
//! Three colliders implement the engine's [`Collider`](sartor_engine::Collider)
//! seam:
//!
//! - [`BodyCollider`] — a static triangulated surface (the avatar) with a
//!   uniform-grid acceleration structure built once at load time
//! - [`SphereCollider`] — analytic sphere, used in drape scenarios and tests
//! - [`GroundPlane`] — horizontal plane at a configurable height
//!
//! All contact response is discrete per-step projection: penetrating
//! vertices move to the surface along the outward normal and lose their
//! inward normal velocity component.

pub mod body;
pub mod grid;
pub mod ground;
pub mod sphere;
pub mod triangle;

pub use body::{BodyCollider, SurfaceHit};
pub use grid::TriangleGrid;
pub use ground::GroundPlane;
pub use sphere::SphereCollider;
