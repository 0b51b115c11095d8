use std::fmt;

use num_traits::real::Real;

use crate::{Point, errors::InternalError, idx::{Idx, IdxDisplay}};

/// Three vertices in a fixed winding, and the triangles across each edge.
///
/// `neighbors[i]` shares the edge opposite `vertices[i]`, i.e. `(vertices[i + 1], vertices[i + 2])` (mod 3).
/// `None` marks an edge of the frame.
#[derive(Debug)]
pub(crate) struct Triangle<C: Real> {
    vertices: [Idx<Point<C>>; 3],
    neighbors: [Option<Idx<Triangle<C>>>; 3],
}

impl<C: Real> fmt::Display for Triangle<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [v0, v1, v2] = self.vertices;
        write!(f, "({}, {}, {})", v0, v1, v2)
    }
}

impl<C: Real> IdxDisplay for Triangle<C> {
    fn fmt(f: &mut fmt::Formatter<'_>, idx: usize) -> fmt::Result {
        write!(f, "t{}", idx)
    }
}

impl<C: Real> Triangle<C> {
    pub fn new(v0: Idx<Point<C>>, v1: Idx<Point<C>>, v2: Idx<Point<C>>) -> Self {
        Self {
            vertices: [v0, v1, v2],
            neighbors: [None; 3],
        }
    }

    pub fn vertices(&self) -> [Idx<Point<C>>; 3] { self.vertices }

    pub fn neighbor(&self, i: usize) -> Option<Idx<Triangle<C>>> { self.neighbors[i] }

    pub fn set_neighbor(&mut self, i: usize, ti: Option<Idx<Triangle<C>>>) {
        self.neighbors[i] = ti;
    }

    /// The directed edge opposite `vertices[i]`, following the winding
    pub fn edge(&self, i: usize) -> (Idx<Point<C>>, Idx<Point<C>>) {
        (self.vertices[(i + 1) % 3], self.vertices[(i + 2) % 3])
    }

    /// The neighbor slot which refers to `ti`
    pub fn neighbor_position(&self, ti: Idx<Triangle<C>>) -> Option<usize> {
        self.neighbors.iter().position(|&n| n == Some(ti))
    }

    /// Sets the neighbor across the directed edge `from -> to`, which must appear in this triangle's winding.
    pub fn set_neighbor_across_edge(&mut self, from: Idx<Point<C>>, to: Idx<Point<C>>, ti: Idx<Triangle<C>>) -> Result<(), InternalError> {
        for i in 0..3 {
            if self.vertices[i] == from && self.vertices[(i + 1) % 3] == to {
                self.neighbors[(i + 2) % 3] = Some(ti);
                return Ok(());
            }
        }
        Err(InternalError::new(format!("Edge {} -> {} does not belong to triangle {} (new neighbor {})", from, to, self, ti)))
    }

    pub fn corners<'a>(&self, points: &'a [Point<C>]) -> [&'a Point<C>; 3] {
        let [v0, v1, v2] = self.vertices;
        [&points[v0], &points[v1], &points[v2]]
    }
}
