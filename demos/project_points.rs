//! Walkthrough binary printing point counts across the supported depth range.
//! Run with: cargo run --example project_points
//! Profile with: cargo flamegraph --profile release-with-debug --example project_points

use equidist::{FRAME_CAP, SphereMode, build, project, vertex_count_at};

fn main() {
    const RADIUS: f64 = 2.0;

    for depth in 0..=6 {
        let vertices = build(depth).expect("depth is non-negative");
        assert_eq!(vertices.len(), vertex_count_at(depth.unsigned_abs()));

        let hemisphere = project(&vertices, RADIUS, SphereMode::Hemisphere, true, FRAME_CAP)
            .expect("radius is positive");
        let full = project(&vertices, RADIUS, SphereMode::FullSphere, false, FRAME_CAP)
            .expect("radius is positive");

        println!(
            "depth {}: {} vertices, {} on the hemisphere, {} framed, {} on the full sphere",
            depth,
            vertices.len(),
            hemisphere.points().len(),
            hemisphere.frame_subset().len(),
            full.points().len(),
        );
    }
}
