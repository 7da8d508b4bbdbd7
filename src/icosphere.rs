//! # Geodesic Icosphere Construction
//!
//! Builds a near-equidistant point set on the unit sphere by recursively
//! subdividing the triangular faces of a regular icosahedron. This is the
//! classic cheap approximation to the Thomson problem: the points are not
//! equidistant in the strict energy-minimizing sense, but every subdivision
//! level spreads them evenly enough for fixture placement, sampling, and
//! similar workloads.
//!
//! ## Algorithm Overview
//!
//! 1. **Seed**: the 12 vertices and 20 faces of a regular icosahedron from
//!    the golden-ratio construction
//! 2. **Subdivide**: each pass replaces every face with four by cutting each
//!    edge at its midpoint, projected back onto the unit sphere
//! 3. **Deduplicate**: adjacent faces share edges; a pass-scoped cache hands
//!    out each edge midpoint exactly once
//!
//! ## Complexity
//!
//! | Depth | Vertices     | Faces    |
//! |-------|--------------|----------|
//! | 0     | 12           | 20       |
//! | d     | `10·4^d + 2` | `20·4^d` |
//! | 6     | 40,962       | 81,920   |
//!
//! Vertices are normalized exactly once, at creation; existing vertices are
//! never touched again, so there is no drift across levels.

#![allow(clippy::cast_possible_truncation)]

use glam::DVec3;

use crate::error::InvalidArgument;
use crate::midpoint_cache::MidpointCache;

/// Unit-length tolerance for generated vertices.
pub(crate) const UNIT_EPSILON: f64 = 1e-9;

// Golden ratio
#[allow(clippy::unreadable_literal, clippy::excessive_precision)]
const PHI: f64 = 1.61803398874989484820458683436563811772030917980576286213544862270526046281890;

/// Index into the vertex list. Using a newtype prevents accidentally mixing
/// vertex indices with face or output positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct VertexIdx(pub u32);

impl VertexIdx {
    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

// Seed icosahedron: the cyclic permutations of (±1, ±φ, 0), normalized at
// load. This is the orientation the downstream hemisphere cut (on y) assumes.
#[rustfmt::skip]
const SEED_VERTICES: [[f64; 3]; 12] = [
    [-1.0,  PHI,  0.0],
    [ 1.0,  PHI,  0.0],
    [-1.0, -PHI,  0.0],
    [ 1.0, -PHI,  0.0],
    [ 0.0, -1.0,  PHI],
    [ 0.0,  1.0,  PHI],
    [ 0.0, -1.0, -PHI],
    [ 0.0,  1.0, -PHI],
    [ PHI,  0.0, -1.0],
    [ PHI,  0.0,  1.0],
    [-PHI,  0.0, -1.0],
    [-PHI,  0.0,  1.0],
];

// The standard 20-face winding for the seed above. Any triangulation covering
// the surface exactly once would do; this is the published table the seed
// layout comes with.
#[rustfmt::skip]
const SEED_FACES: [[u32; 3]; 20] = [
    [0, 11,  5], [0,  5,  1], [0,  1,  7], [0,  7, 10], [0, 10, 11],
    [1,  5,  9], [5, 11,  4], [11, 10, 2], [10, 7,  6], [7,  1,  8],
    [3,  9,  4], [3,  4,  2], [3,  2,  6], [3,  6,  8], [3,  8,  9],
    [4,  9,  5], [2,  4, 11], [6,  2, 10], [8,  6,  7], [9,  8,  1],
];

/// Number of unit vertices produced at the given recursion depth.
///
/// Each pass adds one midpoint per distinct edge, growing the count as
/// `10·4^d + 2`.
#[must_use]
pub const fn vertex_count_at(depth: u32) -> usize {
    10 * 4_usize.pow(depth) + 2
}

/// Incremental geodesic sphere builder.
///
/// Holds the growing vertex list, the current face set, and the pass-scoped
/// midpoint cache. [`build`] is the one-shot entry point; the struct is
/// exposed for callers that want to step subdivision passes by hand.
pub struct IcosphereBuilder {
    vertices: Vec<DVec3>,
    faces: Vec<[VertexIdx; 3]>,
    cache: MidpointCache,
}

impl IcosphereBuilder {
    /// Seed builder: the 12 icosahedron vertices and 20 faces, no passes run.
    #[must_use]
    pub fn new() -> Self {
        let vertices = SEED_VERTICES
            .iter()
            .map(|&[x, y, z]| DVec3::new(x, y, z).normalize())
            .collect();
        let faces = SEED_FACES
            .iter()
            .map(|&[i, j, k]| [VertexIdx(i), VertexIdx(j), VertexIdx(k)])
            .collect();

        Self {
            vertices,
            faces,
            cache: MidpointCache::new(),
        }
    }

    /// Run one subdivision pass: every face (v0, v1, v2) becomes the four
    /// faces (v0, a, c), (v1, b, a), (v2, c, b), (a, b, c), where a, b, c are
    /// the midpoints of edges (v0, v1), (v1, v2), (v2, v0).
    pub fn subdivide(&mut self) {
        // The cache must not leak midpoints into the next pass.
        self.cache.clear();

        let faces = std::mem::take(&mut self.faces);
        let mut next_faces = Vec::with_capacity(faces.len() * 4);

        for &[v0, v1, v2] in &faces {
            let a = self.midpoint(v0, v1);
            let b = self.midpoint(v1, v2);
            let c = self.midpoint(v2, v0);

            next_faces.extend([[v0, a, c], [v1, b, a], [v2, c, b], [a, b, c]]);
        }

        self.faces = next_faces;
    }

    /// Midpoint of edge (a, b), created on first request and memoized so the
    /// neighboring face reuses it. New vertices are normalized here, exactly
    /// once.
    fn midpoint(&mut self, a: VertexIdx, b: VertexIdx) -> VertexIdx {
        if let Some(idx) = self.cache.get(a, b) {
            return idx;
        }

        let mid = self.vertices[a.index()]
            .midpoint(self.vertices[b.index()])
            .normalize();
        debug_assert!((mid.length() - 1.0).abs() < UNIT_EPSILON);

        let idx = VertexIdx(self.vertices.len() as u32);
        self.vertices.push(mid);
        self.cache.insert(a, b, idx);
        idx
    }

    /// Unit vertices accumulated so far, in creation order.
    #[must_use]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Number of vertices accumulated so far.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces in the current tessellation.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Consume the builder, keeping only the vertex positions. Faces and the
    /// midpoint cache are dropped; this crate's consumers need positions only.
    #[must_use]
    pub fn into_vertices(self) -> Vec<DVec3> {
        self.vertices
    }
}

impl Default for IcosphereBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the unit-sphere vertex set for the given recursion depth.
///
/// Depth 0 is the bare icosahedron; each additional level quadruples the
/// faces and roughly quadruples the vertex count (see [`vertex_count_at`]).
/// Depth arrives as a signed integer because the embedding layer hands one
/// over; bounds beyond non-negativity belong to that layer.
///
/// # Errors
///
/// `InvalidArgument::NegativeRecursionDepth` if `recursion_depth < 0`; no
/// partial vertex list is produced.
pub fn build(recursion_depth: i32) -> Result<Vec<DVec3>, InvalidArgument> {
    let depth = u32::try_from(recursion_depth).map_err(|_| {
        InvalidArgument::NegativeRecursionDepth {
            depth: recursion_depth,
        }
    })?;

    let mut builder = IcosphereBuilder::new();
    for _ in 0..depth {
        builder.subdivide();
    }

    Ok(builder.into_vertices())
}

// Tests
