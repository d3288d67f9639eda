//! Property-based tests for planar outline extraction.
//!
//! These tests pose synthetic patches on randomly oriented planes and
//! verify that the pipeline invariants hold for every pose.
//!
//! Run with: cargo test -p mesh-outline --test proptest_outline

use mesh_outline::{
    FitConfig, HalfEdgeMesh, ImportConfig, MeshImporter, MeshPatch, Plane, PlaneFrame,
    SurfacePoint, extract_boundary_loops, fit_plane, project_boundary,
};
use nalgebra::{Point3, Vector3};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Generate a unit normal, rejecting near-zero raw vectors.
fn arb_unit_normal() -> impl Strategy<Value = Vector3<f64>> {
    prop::array::uniform3(-1.0..1.0f64)
        .prop_filter("normal must have usable length", |v| {
            (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt() > 0.1
        })
        .prop_map(|[x, y, z]| Vector3::new(x, y, z).normalize())
}

/// Plane offsets within a workspace-sized range.
fn arb_offset() -> impl Strategy<Value = f64> {
    -5.0..5.0f64
}

/// Anchor points anywhere near the workspace.
fn arb_anchor() -> impl Strategy<Value = Point3<f64>> {
    prop::array::uniform3(-10.0..10.0f64).prop_map(|[x, y, z]| Point3::new(x, y, z))
}

// =============================================================================
// Fixtures
// =============================================================================

/// A 5x5 grid of points lying exactly on the given plane.
fn grid_on_plane(plane: &Plane) -> Vec<Point3<f64>> {
    let pose = PlaneFrame::from_plane(plane, Point3::origin());
    let mut points = Vec::new();
    for i in 0..5 {
        for j in 0..5 {
            let u = f64::from(i) - 2.0;
            let v = f64::from(j) - 2.0;
            points.push(pose.to_world_point(Point3::new(u, v, 0.0)));
        }
    }
    points
}

/// A 3x3 square patch with a unit square hole, posed on the plane.
fn annulus_on_plane(plane: &Plane) -> MeshPatch {
    let pose = PlaneFrame::from_plane(plane, Point3::origin());
    let corners = [
        (0.0, 0.0),
        (3.0, 0.0),
        (3.0, 3.0),
        (0.0, 3.0),
        (1.0, 1.0),
        (2.0, 1.0),
        (2.0, 2.0),
        (1.0, 2.0),
    ];
    let points = corners
        .iter()
        .map(|&(u, v)| {
            SurfacePoint::new(pose.to_world_point(Point3::new(u, v, 0.0)))
                .with_normal(plane.normal)
        })
        .collect();
    let faces = vec![
        vec![0, 1, 5],
        vec![0, 5, 4],
        vec![1, 2, 6],
        vec![1, 6, 5],
        vec![2, 3, 7],
        vec![2, 7, 6],
        vec![3, 0, 4],
        vec![3, 4, 7],
    ];
    MeshPatch::new(points, faces)
}

// =============================================================================
// Plane fit properties
// =============================================================================

proptest! {
    /// The fit recovers a known plane for any pose, and the recovered
    /// orientation follows the prior's sign.
    #[test]
    fn fit_recovers_random_planes(
        normal in arb_unit_normal(),
        offset in arb_offset(),
        flip in any::<bool>(),
    ) {
        let plane = Plane::new(normal, offset).expect("unit normal");
        let points = grid_on_plane(&plane);
        let prior = if flip { -plane.normal } else { plane.normal };

        let config = FitConfig::new().with_seed(42);
        let fit = fit_plane(&points, prior, &config);
        prop_assert!(fit.is_ok());

        let fit = fit.unwrap();
        prop_assert_eq!(fit.inliers.len(), points.len());
        prop_assert!(fit.plane.normal.dot(&prior) > 0.999);
        for point in &points {
            prop_assert!(fit.plane.distance(*point) < 1e-6);
        }
    }

    /// Frames are right-handed orthonormal with the normal as z axis
    /// and their origin on the plane.
    #[test]
    fn frames_are_orthonormal_for_any_pose(
        normal in arb_unit_normal(),
        offset in arb_offset(),
        anchor in arb_anchor(),
    ) {
        let plane = Plane::new(normal, offset).expect("unit normal");
        let frame = PlaneFrame::from_plane(&plane, anchor);

        let x = frame.x_axis();
        let y = frame.y_axis();
        let z = frame.z_axis();
        prop_assert!((x.norm() - 1.0).abs() < 1e-10);
        prop_assert!((y.norm() - 1.0).abs() < 1e-10);
        prop_assert!((z.norm() - 1.0).abs() < 1e-10);
        prop_assert!(x.dot(&y).abs() < 1e-10);
        prop_assert!(x.dot(&z).abs() < 1e-10);
        prop_assert!(y.dot(&z).abs() < 1e-10);
        prop_assert!((x.cross(&y) - z).norm() < 1e-10);
        prop_assert!((z - plane.normal).norm() < 1e-10);
        prop_assert!(plane.distance(frame.origin()) < 1e-9);
    }

    /// Round trip: mapping a projected boundary point back through the
    /// frame recovers the plane projection of the original vertex.
    #[test]
    fn projection_round_trips_for_any_pose(
        normal in arb_unit_normal(),
        offset in arb_offset(),
    ) {
        let plane = Plane::new(normal, offset).expect("unit normal");
        let pose = PlaneFrame::from_plane(&plane, Point3::origin());
        let corners = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        let positions: Vec<Point3<f64>> = corners
            .iter()
            .map(|&(u, v)| pose.to_world_point(Point3::new(u, v, 0.0)))
            .collect();
        let faces = vec![vec![0, 1, 2], vec![0, 2, 3]];

        let mesh = HalfEdgeMesh::from_faces(&positions, &faces).expect("valid mesh");
        let loops = extract_boundary_loops(&mesh);
        prop_assert_eq!(loops.len(), 1);

        let frame = PlaneFrame::from_plane(&plane, positions[0]);
        let polygon = project_boundary(&loops[0], &mesh, &plane, &frame);
        prop_assert_eq!(polygon.len(), 4);

        for (k, &id) in loops[0].half_edges.iter().enumerate() {
            let world = mesh.position(mesh.half_edge(id).origin);
            let local = polygon.points[k];
            let back = frame.to_world_point(Point3::new(local.x, local.y, 0.0));
            prop_assert!((back - plane.project(world)).norm() < 1e-9);
        }
    }

    /// A square patch with a hole always imports to one outer boundary
    /// and one hole with opposite winding signs, whatever the pose.
    #[test]
    fn annulus_winding_is_pose_invariant(
        normal in arb_unit_normal(),
        offset in arb_offset(),
    ) {
        let plane = Plane::new(normal, offset).expect("unit normal");
        let patch = annulus_on_plane(&plane);

        let importer = MeshImporter::with_config(ImportConfig::new().with_seed(42));
        let result = importer.import(&patch);
        prop_assert!(result.is_ok());

        let result = result.unwrap();
        prop_assert_eq!(result.boundary_count(), 2);
        prop_assert_eq!(
            result.boundaries.iter().filter(|b| b.is_outer()).count(),
            1
        );
        prop_assert_eq!(result.holes().count(), 1);
        prop_assert!(
            result.boundaries[0].signed_area() * result.boundaries[1].signed_area() < 0.0
        );
    }
}

// =============================================================================
// Deterministic cases
// =============================================================================

#[test]
fn watertight_mesh_has_no_boundary_loops() {
    let positions = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    ];
    let faces = vec![
        vec![0, 2, 1],
        vec![0, 1, 3],
        vec![0, 3, 2],
        vec![1, 2, 3],
    ];
    let mesh = HalfEdgeMesh::from_faces(&positions, &faces).unwrap();
    assert!(extract_boundary_loops(&mesh).is_empty());
}

#[test]
fn flat_annulus_areas_are_exact() {
    let plane = Plane::new(Vector3::z(), 0.0).unwrap();
    let patch = annulus_on_plane(&plane);
    let importer = MeshImporter::with_config(ImportConfig::new().with_seed(42));
    let result = importer.import(&patch).unwrap();

    let outer = result.outer_boundary().unwrap();
    let hole = result.holes().next().unwrap();
    assert!((outer.signed_area() - 9.0).abs() < 1e-9);
    assert!((hole.signed_area() + 1.0).abs() < 1e-9);
    assert!((outer.perimeter() - 12.0).abs() < 1e-9);
    assert!((hole.perimeter() - 4.0).abs() < 1e-9);
}
