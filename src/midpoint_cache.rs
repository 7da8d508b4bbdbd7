//! Memo table for edge midpoints created during one subdivision pass.
//!
//! Adjacent faces share edges, so a naive face split would create every edge
//! midpoint twice. The cache maps an edge (as its canonically ordered
//! endpoint index pair) to the index of the midpoint vertex already created
//! for it:
//! 1. Canonicalize the endpoint pair to (min, max)
//! 2. Look the pair up; a hit returns the existing midpoint index
//! 3. On a miss the caller creates the vertex and records it here
//!
//! One cache serves exactly one subdivision pass; it is cleared between
//! passes and discarded when construction finishes.

use rustc_hash::FxHashMap;

use crate::icosphere::VertexIdx;

/// Memo table mapping a split edge to its midpoint vertex.
///
/// Uses `FxHashMap` for faster hashing (non-cryptographic, ~2-3x faster).
#[derive(Default)]
pub(crate) struct MidpointCache {
    midpoints: FxHashMap<(VertexIdx, VertexIdx), VertexIdx>,
}

impl MidpointCache {
    /// Create an empty cache.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Canonical ordering ensures (a, b) and (b, a) map to the same key.
    const fn canonical_edge(a: VertexIdx, b: VertexIdx) -> (VertexIdx, VertexIdx) {
        if a.0 < b.0 { (a, b) } else { (b, a) }
    }

    /// Returns the midpoint already created for edge (a, b), if any.
    #[must_use]
    pub(crate) fn get(&self, a: VertexIdx, b: VertexIdx) -> Option<VertexIdx> {
        self.midpoints.get(&Self::canonical_edge(a, b)).copied()
    }

    /// Record `midpoint` as the split vertex of edge (a, b).
    pub(crate) fn insert(&mut self, a: VertexIdx, b: VertexIdx, midpoint: VertexIdx) {
        self.midpoints.insert(Self::canonical_edge(a, b), midpoint);
    }

    /// Forget all edges so the cache can serve the next pass.
    pub(crate) fn clear(&mut self) {
        self.midpoints.clear();
    }

    /// Number of distinct edges recorded so far.
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.midpoints.len()
    }
}
