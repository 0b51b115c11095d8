//! Incremental Delaunay triangulation with the Bowyer-Watson algorithm.
//!
//! A [Triangulation] covers a fixed rectangular frame with two triangles. Points inserted into the frame are
//! triangulated one at a time, keeping the mesh Delaunay after every insertion: no triangle's circumcircle
//! contains an inserted point. [Triangulation::export] flattens the mesh into coordinate and index arrays
//! for plotting.
//!
//! Progress is reported through the [log](https://docs.rs/log) facade. With the `debugging` feature, the mesh can
//! also be written to SVG after every insertion; see the `debug` module for its environment variables.

mod idx;
mod math;
mod point;
mod triangle;
mod cavity;
mod triangulation;
mod outputs;
mod errors;

#[cfg(feature = "debugging")]
pub mod debug;

#[cfg(any(test, feature = "benchmarking"))]
pub mod tests;

pub use errors::{TriangulationError, InternalError, Predicate};
pub use math::{dot, cross};
pub use point::Point;
pub use triangulation::Triangulation;
pub use outputs::*;

pub use num_traits::real::Real;
