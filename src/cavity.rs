use num_traits::real::Real;
use smallvec::SmallVec;

use crate::{Point, errors::TriangulationError, idx::{Arena, Idx}, triangle::Triangle};

/// One edge of a cavity boundary: the directed edge `from -> to` of a removed triangle, and the surviving
/// triangle on the other side of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BoundaryEdge<C: Real> {
    pub from: Idx<Point<C>>,
    pub to: Idx<Point<C>>,
    pub outside: Option<Idx<Triangle<C>>>,
}

/// The triangles whose circumcircle contains an inserted point, and the closed loop of edges around them.
pub(crate) struct Cavity<C: Real> {
    pub triangles: SmallVec<[Idx<Triangle<C>>; 16]>,
    pub boundary: SmallVec<[BoundaryEdge<C>; 16]>,
}

impl<C: Real> Cavity<C> {
    pub fn find(ts: &Arena<Triangle<C>>, ps: &[Point<C>], p: &Point<C>) -> Result<Self, TriangulationError> {
        let mut triangles = SmallVec::new();
        for (ti, t) in ts.iter() {
            if p.in_circumcircle_of(t.corners(ps))? {
                triangles.push(ti);
            }
        }
        Self::enclose(ts, triangles)
    }

    /// Finds the boundary around `triangles`, which must be live triangles of `ts`.
    pub fn enclose(ts: &Arena<Triangle<C>>, triangles: SmallVec<[Idx<Triangle<C>>; 16]>) -> Result<Self, TriangulationError> {
        let mut in_cavity = vec![false; ts.slot_count()];
        for ti in triangles.iter() {
            in_cavity[ti.usize()] = true;
        }

        let boundary = walk_boundary(ts, &triangles, &in_cavity)?;

        Ok(Self {
            triangles,
            boundary,
        })
    }

    /// A cavity with no vertex strictly inside it has exactly two more boundary edges than triangles.
    pub fn is_simple(&self) -> bool {
        self.boundary.len() == self.triangles.len() + 2
    }
}

/// Walks the edges of the cavity in winding order, crossing into neighboring cavity triangles and recording
/// every edge whose neighbor lies outside. Stops once the first recorded edge comes around again.
///
/// Every triangle of a connected cavity has a corner on its boundary, so the walk sweeps through all of them.
/// Any triangle left unvisited belongs to another component.
fn walk_boundary<C: Real>(ts: &Arena<Triangle<C>>, triangles: &[Idx<Triangle<C>>], in_cavity: &[bool]) -> Result<SmallVec<[BoundaryEdge<C>; 16]>, TriangulationError> {
    let mut ti = *triangles.first().ok_or(TriangulationError::EmptyCavity)?;
    let mut edge = 0;
    let mut boundary: SmallVec<[BoundaryEdge<C>; 16]> = SmallVec::new();

    let mut visited = vec![false; in_cavity.len()];
    visited[ti.usize()] = true;
    let mut reached = 1;

    // Each (triangle, edge) state lies on a single cycle, so two laps bound any walk which closes
    let max_steps = 6 * triangles.len() + 2;
    for _ in 0..max_steps {
        let t = &ts[ti];
        match t.neighbor(edge).filter(|tn| in_cavity[tn.usize()]) {
            Some(ti_next) => {
                let arrived = ts[ti_next].neighbor_position(ti).ok_or_else(|| TriangulationError::internal(format!("{} neighbors {}, but not the reverse", ti, ti_next)))?;
                ti = ti_next;
                edge = (arrived + 1) % 3;
                if !visited[ti.usize()] {
                    visited[ti.usize()] = true;
                    reached += 1;
                }
            }
            None => {
                let (from, to) = t.edge(edge);
                let entry = BoundaryEdge { from, to, outside: t.neighbor(edge) };
                if boundary.first() == Some(&entry) {
                    if reached < triangles.len() {
                        return Err(TriangulationError::DisconnectedCavity { reached, triangles: triangles.len() });
                    }
                    return Ok(boundary);
                }
                log::trace!("Cavity boundary edge {} -> {}", from, to);
                boundary.push(entry);
                edge = (edge + 1) % 3;
            }
        }
    }

    Err(TriangulationError::BoundaryWalkNonTermination { steps: max_steps })
}
