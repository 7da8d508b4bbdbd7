//! # Point Projection and Hemisphere Filtering
//!
//! Turns the unit-sphere vertex set into the render-ready output the host
//! geometry layer consumes: positions scaled to the requested radius, an
//! optional second endpoint per point for drawing normal lines, and a capped
//! prefix for per-point coordinate-frame generation.
//!
//! Filtering happens on the *unit* y coordinate, before scaling, with the
//! fixed axis and threshold the original construction was oriented for.

use glam::DVec3;

use crate::error::InvalidArgument;
use crate::icosphere;

/// Canonical cap on the number of points that receive a coordinate frame.
///
/// Frame construction is an expensive per-point host operation; at depth 6
/// the full sphere carries 40k+ points, so the host only frames a prefix.
pub const FRAME_CAP: usize = 1000;

/// Radial offset factor for the normal line endpoint.
///
/// The "normal" handed to the host is not a unit direction but a second
/// point 20% farther out along the same ray from the origin; the host draws
/// a line between the two. This only works because every input vertex lies
/// on a sphere centered at the origin — a deliberate simplification of the
/// original tool, preserved as part of the interface contract.
pub const NORMAL_TIP_FACTOR: f64 = 1.2;

/// Which part of the sphere survives filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SphereMode {
    /// Keep vertices whose unit-sphere y coordinate is ≥ 0.
    Hemisphere,
    /// Keep every vertex.
    FullSphere,
}

impl SphereMode {
    /// Inclusion ceiling on the unit-sphere y coordinate. Unit vectors never
    /// dip below y = −1, so the full-sphere ceiling excludes nothing.
    const fn ceiling(self) -> f64 {
        match self {
            Self::Hemisphere => 0.0,
            Self::FullSphere => -1.0,
        }
    }
}

/// One output point, scaled to the requested radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderPoint {
    /// Position on the radius-r sphere.
    pub position: DVec3,
    /// Endpoint of the normal line at `NORMAL_TIP_FACTOR · radius`, present
    /// when normals were requested.
    pub normal_tip: Option<DVec3>,
    /// Position of the source vertex in its creation order.
    pub index: usize,
}

/// Result of projecting a vertex set: the render sequence plus the capped
/// frame prefix.
#[derive(Clone, Debug)]
pub struct Projection {
    points: Vec<RenderPoint>,
    frame_len: usize,
}

impl Projection {
    /// All render points, in source-vertex order.
    #[must_use]
    pub fn points(&self) -> &[RenderPoint] {
        &self.points
    }

    /// Prefix of [`points`](Self::points) eligible for coordinate-frame
    /// generation: `min(frame_cap, points.len())` entries, never resampled
    /// or reordered.
    #[must_use]
    pub fn frame_subset(&self) -> &[RenderPoint] {
        &self.points[..self.frame_len]
    }

    /// Consume the projection, keeping the point list.
    #[must_use]
    pub fn into_points(self) -> Vec<RenderPoint> {
        self.points
    }
}

/// Project unit-sphere vertices onto the radius-`radius` sphere.
///
/// A vertex is included iff its unit y coordinate clears the mode's ceiling
/// (0 for [`SphereMode::Hemisphere`], unconditional for
/// [`SphereMode::FullSphere`]). Included vertices keep their relative order;
/// each output records the index it had in `vertices`. An empty result is
/// valid, not an error.
///
/// # Errors
///
/// `InvalidArgument::NonPositiveRadius` if `radius` is not finite or not
/// strictly positive.
pub fn project(
    vertices: &[DVec3],
    radius: f64,
    mode: SphereMode,
    want_normals: bool,
    frame_cap: usize,
) -> Result<Projection, InvalidArgument> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(InvalidArgument::NonPositiveRadius { radius });
    }

    let ceiling = mode.ceiling();
    let mut points = Vec::with_capacity(vertices.len());

    for (index, &v) in vertices.iter().enumerate() {
        if v.y >= ceiling {
            points.push(RenderPoint {
                position: v * radius,
                normal_tip: want_normals.then(|| v * (NORMAL_TIP_FACTOR * radius)),
                index,
            });
        }
    }

    let frame_len = frame_cap.min(points.len());
    Ok(Projection { points, frame_len })
}

/// Build the icosphere at `recursion_depth` and project it in one call.
///
/// Equivalent to [`build`](crate::build) followed by [`project`]; this is
/// the path an embedding host takes when the user confirms their inputs.
///
/// # Errors
///
/// `InvalidArgument` as for [`build`](crate::build) and [`project`].
pub fn generate(
    radius: f64,
    recursion_depth: i32,
    mode: SphereMode,
    want_normals: bool,
    frame_cap: usize,
) -> Result<Projection, InvalidArgument> {
    let vertices = icosphere::build(recursion_depth)?;
    project(&vertices, radius, mode, want_normals, frame_cap)
}

// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icosphere::build;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_hemisphere_excludes_lower_vertices() {
        let vertices = build(2).unwrap();
        let projection = project(&vertices, 1.0, SphereMode::Hemisphere, false, FRAME_CAP).unwrap();

        let expected = vertices.iter().filter(|v| v.y >= 0.0).count();
        assert_eq!(projection.points().len(), expected);
        for point in projection.points() {
            assert!(vertices[point.index].y >= 0.0);
        }
    }

    #[test]
    fn test_full_sphere_excludes_nothing() {
        let vertices = build(2).unwrap();
        let projection = project(&vertices, 1.0, SphereMode::FullSphere, false, FRAME_CAP).unwrap();

        assert_eq!(projection.points().len(), vertices.len());
    }

    #[test]
    fn test_positions_scale_to_radius() {
        let radius = 2.5;
        let vertices = build(2).unwrap();
        let projection = project(&vertices, radius, SphereMode::FullSphere, false, 0).unwrap();

        for point in projection.points() {
            assert!((point.position.length() - radius).abs() < EPSILON * radius);
            assert!(point.normal_tip.is_none());
        }
    }

    #[test]
    fn test_normal_tips_sit_at_offset_radius() {
        let radius = 3.0;
        let vertices = build(1).unwrap();
        let projection = project(&vertices, radius, SphereMode::FullSphere, true, 0).unwrap();

        for point in projection.points() {
            let tip = point.normal_tip.expect("normals were requested");
            assert!((tip.length() - NORMAL_TIP_FACTOR * radius).abs() < EPSILON * radius);
            // Tip lies on the same ray from the origin as the point itself.
            assert!(tip.cross(point.position).length() < EPSILON * radius * radius);
        }
    }

    #[test]
    fn test_output_preserves_source_order() {
        let vertices = build(1).unwrap();
        let projection = project(&vertices, 1.0, SphereMode::Hemisphere, false, FRAME_CAP).unwrap();

        let points = projection.points();
        for pair in points.windows(2) {
            assert!(pair[0].index < pair[1].index);
        }
        for point in points {
            assert!((point.position - vertices[point.index]).length() < EPSILON);
        }
    }

    #[test]
    fn test_frame_subset_is_a_capped_prefix() {
        let vertices = build(2).unwrap();

        let projection = project(&vertices, 1.0, SphereMode::FullSphere, false, 10).unwrap();
        assert_eq!(projection.frame_subset().len(), 10);
        assert_eq!(projection.frame_subset(), &projection.points()[..10]);

        // A cap beyond the point count degrades to the whole sequence.
        let projection = project(&vertices, 1.0, SphereMode::FullSphere, false, 100_000).unwrap();
        assert_eq!(projection.frame_subset().len(), projection.points().len());

        let projection = project(&vertices, 1.0, SphereMode::FullSphere, false, 0).unwrap();
        assert!(projection.frame_subset().is_empty());
    }

    #[test]
    fn test_depth_one_hemisphere_fixture() {
        // Depth 1 yields 42 unit vertices in this orientation: 8 of the 12
        // seed vertices and 17 of the 30 edge midpoints have y ≥ 0, with the
        // equatorial (y = 0) ring landing exactly on the ceiling.
        let vertices = build(1).unwrap();
        assert_eq!(vertices.len(), 42);

        let projection = project(&vertices, 1.0, SphereMode::Hemisphere, false, FRAME_CAP).unwrap();
        assert_eq!(projection.points().len(), 25);

        let seed_survivors = projection
            .points()
            .iter()
            .filter(|p| p.index < 12)
            .count();
        assert_eq!(seed_survivors, 8);
    }

    #[test]
    fn test_bad_radius_is_rejected() {
        let vertices = build(0).unwrap();

        for radius in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = project(&vertices, radius, SphereMode::FullSphere, false, FRAME_CAP)
                .unwrap_err();
            assert!(matches!(err, InvalidArgument::NonPositiveRadius { .. }));
        }
    }

    #[test]
    fn test_empty_input_is_a_valid_empty_output() {
        let projection = project(&[], 1.0, SphereMode::Hemisphere, true, FRAME_CAP).unwrap();

        assert!(projection.points().is_empty());
        assert!(projection.frame_subset().is_empty());
    }

    #[test]
    fn test_generate_matches_the_manual_pipeline() {
        let by_hand = {
            let vertices = build(2).unwrap();
            project(&vertices, 1.5, SphereMode::Hemisphere, true, FRAME_CAP).unwrap()
        };
        let one_shot = generate(1.5, 2, SphereMode::Hemisphere, true, FRAME_CAP).unwrap();

        assert_eq!(one_shot.points(), by_hand.points());
        assert_eq!(one_shot.frame_subset().len(), by_hand.frame_subset().len());
    }

    #[test]
    fn test_generate_propagates_argument_errors() {
        assert!(matches!(
            generate(1.0, -3, SphereMode::FullSphere, false, FRAME_CAP),
            Err(InvalidArgument::NegativeRecursionDepth { depth: -3 })
        ));
        assert!(matches!(
            generate(-1.0, 1, SphereMode::FullSphere, false, FRAME_CAP),
            Err(InvalidArgument::NonPositiveRadius { .. })
        ));
    }
}
