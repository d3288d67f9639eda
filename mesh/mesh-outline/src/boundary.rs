//! Boundary loop extraction.
//!
//! Walks the twin-less half-edges of a mesh into closed loops. Each
//! loop is ordered: the destination of one half-edge is the origin of
//! the next. A closed mesh simply yields no loops.

use hashbrown::{HashMap, HashSet};
use tracing::{debug, info, warn};

use crate::half_edge::HalfEdgeMesh;

/// An ordered loop of boundary half-edges.
///
/// The winding follows the face connectivity: with faces wound
/// counter-clockwise around the surface normal, the outer loop comes
/// out counter-clockwise and interior hole loops clockwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryLoop {
    /// Half-edge ids in walk order.
    pub half_edges: Vec<u32>,
}

impl BoundaryLoop {
    /// Number of half-edges (and vertices) in the loop.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.half_edges.len()
    }
}

/// Extract all boundary loops of a mesh.
///
/// Starting from each unvisited boundary half-edge, the walk repeatedly
/// jumps to the boundary half-edge leaving the current destination
/// vertex until it returns to the start. A mesh without boundary
/// (watertight) yields an empty list; that is not an error.
///
/// A walk that cannot continue is abandoned with a warning, and
/// fragments shorter than a triangle are discarded.
#[must_use]
pub fn extract_boundary_loops(mesh: &HalfEdgeMesh) -> Vec<BoundaryLoop> {
    let boundary: Vec<u32> = mesh.boundary_half_edges().collect();
    if boundary.is_empty() {
        debug!("Mesh is closed, no boundary loops");
        return Vec::new();
    }
    debug!("Found {} boundary half-edges", boundary.len());

    // On a manifold rim every boundary vertex has exactly one outgoing
    // boundary half-edge.
    let mut outgoing: HashMap<u32, u32> = HashMap::with_capacity(boundary.len());
    for &id in &boundary {
        outgoing.insert(mesh.half_edge(id).origin, id);
    }

    let mut visited: HashSet<u32> = HashSet::with_capacity(boundary.len());
    let mut loops = Vec::new();

    for &start in &boundary {
        if visited.contains(&start) {
            continue;
        }

        let mut half_edges = Vec::new();
        let mut current = start;
        loop {
            visited.insert(current);
            half_edges.push(current);

            let vertex = mesh.destination(current);
            let Some(&next) = outgoing.get(&vertex) else {
                warn!(
                    "Boundary walk stalled at vertex {} with no outgoing boundary half-edge",
                    vertex
                );
                break;
            };
            if next == start {
                break;
            }
            if visited.contains(&next) {
                warn!("Boundary walk revisited half-edge {} before closing", next);
                break;
            }
            current = next;
        }

        if half_edges.len() >= 3 {
            loops.push(BoundaryLoop { half_edges });
        } else {
            warn!(
                "Discarding a degenerate boundary fragment of {} half-edges",
                half_edges.len()
            );
        }
    }

    let sizes: Vec<usize> = loops.iter().map(BoundaryLoop::edge_count).collect();
    info!("Detected {} boundary loops, sizes: {:?}", loops.len(), sizes);

    loops
}
