//! # `equidist`
//!
//! Near-equidistant point sets on a sphere or hemisphere, generated by
//! recursive geodesic subdivision of an icosahedron — a cheap, deterministic
//! approximation to the Thomson problem.
//!
//! ## What is this?
//!
//! The Thomson problem asks how to place N points on a sphere so they repel
//! each other as evenly as possible. Solving it exactly means global energy
//! minimization; this crate takes the well-known shortcut instead: start
//! from a regular icosahedron and recursively split every triangular face
//! into four, projecting each new vertex onto the unit sphere. The result is
//! a **near**-equidistant point set — good enough for fixture placement,
//! probing patterns, and sampling — produced in milliseconds.
//!
//! A second stage scales the unit vertices to a requested radius, optionally
//! cuts the set down to the upper hemisphere, attaches an endpoint per point
//! for drawing radial normal lines, and caps a prefix of the output for
//! expensive per-point host operations (coordinate frames). The crate is the
//! computational core only: the embedding host draws the points, lines, and
//! frames.
//!
//! ## Quick Start
//!
//! ```rust
//! use equidist::{FRAME_CAP, SphereMode, generate};
//!
//! // Two subdivision passes, upper hemisphere, with normal lines.
//! let upper = generate(1.0, 2, SphereMode::Hemisphere, true, FRAME_CAP).unwrap();
//!
//! for point in upper.points() {
//!     // Hand point.position (and point.normal_tip) to the host geometry API.
//!     assert!(point.position.y >= 0.0);
//! }
//!
//! // The full sphere at depth 2 carries 10·4² + 2 = 162 points.
//! let full = generate(1.0, 2, SphereMode::FullSphere, false, FRAME_CAP).unwrap();
//! assert_eq!(full.points().len(), 162);
//! assert!(full.frame_subset().len() <= FRAME_CAP);
//! ```
//!
//! ## Key Features
//!
//! - **Deterministic construction**: the same depth always yields the same
//!   vertex list, in the same order
//! - **Deduplicated subdivision**: a per-pass cache creates exactly one
//!   midpoint per distinct edge, so counts follow `10·4^d + 2` exactly
//! - **Stable output order**: projection preserves creation order and tags
//!   every output point with its source index
//! - **Fail-fast validation**: negative depth and non-positive radius are
//!   rejected up front with no partial output
//!
//! ## When to Use
//!
//! - Evenly spread probe/fixture points on a sphere or dome
//! - Feeding point (and normal line) geometry to a CAD or rendering host
//! - Any workload wanting `10·4^d + 2` well-spread sphere points fast
//!
//! ## When NOT to Use
//!
//! - Exact Thomson-problem solutions (this is an approximation by design)
//! - Mesh export — faces and edges are discarded; only vertex positions
//!   survive construction
//!
//! ## Algorithm
//!
//! Seed with the golden-ratio icosahedron (12 vertices, 20 faces). Each pass
//! replaces every face with four children, cutting each edge at its midpoint
//! re-projected onto the unit sphere; shared edges are split once via a
//! memo table keyed by the canonical endpoint pair. Projection then filters
//! on the unit y coordinate (hemisphere keeps y ≥ 0), scales by the radius,
//! and derives normal endpoints at 1.2× the radius along the same ray.

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod error;
mod icosphere;
mod midpoint_cache;
mod projector;

pub use error::InvalidArgument;
pub use icosphere::{IcosphereBuilder, build, vertex_count_at};
pub use projector::{
    FRAME_CAP, NORMAL_TIP_FACTOR, Projection, RenderPoint, SphereMode, generate, project,
};

/// Re-export glam types for convenience
pub mod math {
    pub use glam::DVec3;
}
