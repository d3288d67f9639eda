//! Projection of boundary loops into plane-local 2D polygons.

use crate::boundary::BoundaryLoop;
use crate::frame::PlaneFrame;
use crate::half_edge::HalfEdgeMesh;
use crate::plane::Plane;
use crate::polygon::{PolygonBoundary, PolygonPoint};

/// How far off the plane a projected point may sit in local
/// coordinates before the design assumption is considered violated.
const LOCAL_PLANE_TOLERANCE: f64 = 1e-3;

/// Project a boundary loop onto the plane and into the local frame.
///
/// Each half-edge contributes its origin vertex: the vertex is
/// projected orthogonally onto the plane and mapped into the frame,
/// where its local z coordinate is zero up to rounding and is dropped.
/// The polygon inherits the loop's winding.
#[must_use]
pub fn project_boundary(
    boundary: &BoundaryLoop,
    mesh: &HalfEdgeMesh,
    plane: &Plane,
    frame: &PlaneFrame,
) -> PolygonBoundary {
    let mut points = Vec::with_capacity(boundary.half_edges.len());

    for &id in &boundary.half_edges {
        let world = mesh.position(mesh.half_edge(id).origin);
        let local = frame.to_local_point(plane.project(world));
        debug_assert!(
            local.z.abs() < LOCAL_PLANE_TOLERANCE,
            "projected point should lie in the local plane, got z = {}",
            local.z
        );
        points.push(PolygonPoint::new(local.x, local.y));
    }

    PolygonBoundary::new(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::extract_boundary_loops;
    use approx::assert_relative_eq;
    use nalgebra::{Point3, Vector3};

    fn annulus_mesh() -> HalfEdgeMesh {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
            Point3::new(3.0, 3.0, 0.0),
            Point3::new(0.0, 3.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(2.0, 1.0, 0.0),
            Point3::new(2.0, 2.0, 0.0),
            Point3::new(1.0, 2.0, 0.0),
        ];
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
        HalfEdgeMesh::from_faces(&positions, &faces).unwrap()
    }

    #[test]
    fn annulus_projects_to_opposite_windings() {
        let mesh = annulus_mesh();
        let plane = Plane::new(Vector3::z(), 0.0).unwrap();
        let frame = PlaneFrame::from_plane(&plane, Point3::new(1.5, 1.5, 0.0));

        let loops = extract_boundary_loops(&mesh);
        assert_eq!(loops.len(), 2);

        let polygons: Vec<PolygonBoundary> = loops
            .iter()
            .map(|boundary| project_boundary(boundary, &mesh, &plane, &frame))
            .collect();

        let outer = polygons.iter().find(|p| p.is_outer()).unwrap();
        let hole = polygons.iter().find(|p| p.is_hole()).unwrap();
        assert_relative_eq!(outer.signed_area(), 9.0, epsilon = 1e-12);
        assert_relative_eq!(hole.signed_area(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn projection_round_trips_through_the_frame() {
        let mesh = annulus_mesh();
        // Slightly tilted, so projection actually moves the vertices
        let plane = Plane::new(Vector3::new(0.01, -0.02, 1.0), -0.0003).unwrap();
        let frame = PlaneFrame::from_plane(&plane, Point3::new(1.5, 1.5, 0.0));

        let loops = extract_boundary_loops(&mesh);
        for boundary in &loops {
            let polygon = project_boundary(boundary, &mesh, &plane, &frame);
            for (k, &id) in boundary.half_edges.iter().enumerate() {
                let world = mesh.position(mesh.half_edge(id).origin);
                let local = polygon.points[k];
                let back = frame.to_world_point(Point3::new(local.x, local.y, 0.0));
                assert_relative_eq!((back - plane.project(world)).norm(), 0.0, epsilon = 1e-12);
            }
        }
    }
}
