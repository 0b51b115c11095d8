use ordered_float::OrderedFloat;

use crate::{Point, Triangulation, TriangulationError, dot, point::circumcircle};

type TriangleKey = [(OrderedFloat<f64>, OrderedFloat<f64>); 3];

pub fn insert_all(triangulation: &mut Triangulation<f64>, points: &[(f64, f64)]) -> Result<(), TriangulationError> {
    for &(x, y) in points {
        triangulation.insert_point(x, y)?;
    }
    Ok(())
}

/// Every live triangle as its sorted corner coordinates, the whole list sorted.
/// Meshes with the same triangles compare equal whatever their labels or winding.
pub fn canonical_triangles(triangulation: &Triangulation<f64>) -> Vec<TriangleKey> {
    let mut keys: Vec<TriangleKey> = triangulation.triangles()
        .map(|corners| {
            let mut key = [(OrderedFloat(0.), OrderedFloat(0.)); 3];
            for (k, p) in key.iter_mut().zip(corners.iter()) {
                *k = (OrderedFloat(p.x()), OrderedFloat(p.y()));
            }
            key.sort();
            key
        })
        .collect();
    keys.sort();
    keys
}

pub fn total_area(triangulation: &Triangulation<f64>) -> f64 {
    triangulation.triangles()
        .map(|[a, b, c]| ((b.x() - a.x()) * (c.y() - a.y()) - (b.y() - a.y()) * (c.x() - a.x())).abs() / 2.)
        .sum()
}

/// Every (triangle, vertex) pair where the vertex lies strictly inside the triangle's circumcircle,
/// beyond a relative tolerance for rounding
pub fn delaunay_violations(triangulation: &Triangulation<f64>) -> Vec<([Point<f64>; 3], Point<f64>)> {
    let mut violations = Vec::new();
    for corners in triangulation.triangles() {
        let (center, radius_squared) = circumcircle(corners).expect("Degenerate triangle in mesh");
        for p in triangulation.points() {
            if corners.iter().any(|&c| c == p) {
                continue;
            }
            let offset = *p - center;
            if dot(&offset, &offset) < radius_squared * (1. - 1e-9) {
                let [a, b, c] = corners;
                violations.push(([*a, *b, *c], *p));
            }
        }
    }
    violations
}
