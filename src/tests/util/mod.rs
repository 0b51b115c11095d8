pub mod points;
mod mesh;

pub use mesh::{canonical_triangles, delaunay_violations, insert_all, total_area};
