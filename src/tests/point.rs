use crate::{Point, Predicate, TriangulationError, cross, dot};

fn right_triangle() -> [Point<f64>; 3] {
    [Point::new(0., 0.), Point::new(4., 0.), Point::new(0., 4.)]
}

fn corners(t: &[Point<f64>; 3]) -> [&Point<f64>; 3] {
    [&t[0], &t[1], &t[2]]
}

#[test]
fn contained_interior() {
    let t = right_triangle();
    assert!(Point::new(1., 1.).contained_in(corners(&t)).unwrap());
    assert!(Point::new(0.5, 3.).contained_in(corners(&t)).unwrap());
}

#[test]
fn contained_edges() {
    let t = right_triangle();
    // Edges through the first corner are inside
    assert!(Point::new(2., 0.).contained_in(corners(&t)).unwrap());
    assert!(Point::new(0., 2.).contained_in(corners(&t)).unwrap());
    assert!(Point::new(0., 0.).contained_in(corners(&t)).unwrap());
    // The opposite edge is not
    assert!(!Point::new(2., 2.).contained_in(corners(&t)).unwrap());
}

#[test]
fn contained_exterior() {
    let t = right_triangle();
    assert!(!Point::new(5., 5.).contained_in(corners(&t)).unwrap());
    assert!(!Point::new(-1., 1.).contained_in(corners(&t)).unwrap());
    assert!(!Point::new(1., -1.).contained_in(corners(&t)).unwrap());
}

#[test]
fn contained_ignores_winding() {
    let [a, b, c] = right_triangle();
    let reversed = [a, c, b];
    assert!(Point::new(1., 1.).contained_in(corners(&reversed)).unwrap());
    assert!(!Point::new(5., 5.).contained_in(corners(&reversed)).unwrap());
}

#[test]
fn contained_degenerate() {
    let t = [Point::new(0., 0.), Point::new(1., 1.), Point::new(2., 2.)];
    match Point::new(1., 0.).contained_in(corners(&t)) {
        Err(TriangulationError::GeometricDegeneracy(Predicate::Containment)) => (),
        other => panic!("Expected a containment degeneracy, got {:?}", other),
    }
}

#[test]
fn circumcircle() {
    let t = right_triangle();
    // Center (2, 2), squared radius 8
    assert!(Point::new(2., 2.).in_circumcircle_of(corners(&t)).unwrap());
    assert!(Point::new(3.9, 3.9).in_circumcircle_of(corners(&t)).unwrap());
    assert!(!Point::new(5., 5.).in_circumcircle_of(corners(&t)).unwrap());
    assert!(!Point::new(-1., 5.).in_circumcircle_of(corners(&t)).unwrap());
}

#[test]
fn circumcircle_boundary_is_inside() {
    let t = right_triangle();
    assert!(Point::new(4., 4.).in_circumcircle_of(corners(&t)).unwrap());
    for corner in t.iter() {
        assert!(corner.in_circumcircle_of(corners(&t)).unwrap());
    }
}

#[test]
fn circumcircle_degenerate() {
    let t = [Point::new(0., 0.), Point::new(1., 1.), Point::new(2., 2.)];
    match Point::new(1., 0.).in_circumcircle_of(corners(&t)) {
        Err(TriangulationError::GeometricDegeneracy(Predicate::Circumcircle)) => (),
        other => panic!("Expected a circumcircle degeneracy, got {:?}", other),
    }
}

#[test]
fn arithmetic_drops_z() {
    let a = Point::with_z(1., 2., 3.);
    let b = Point::with_z(4., 5., 6.);
    assert_eq!(a + b, Point::new(5., 7.));
    assert_eq!(b - a, Point::new(3., 3.));
    assert_eq!(a * 2., Point::new(2., 4.));
    assert_eq!(2f64 * a, a * 2.);
}

#[test]
fn products_use_z() {
    let x = Point::with_z(1., 0., 0.);
    let y = Point::with_z(0., 1., 0.);
    assert_eq!(cross(&x, &y), Point::with_z(0., 0., 1.));
    assert_eq!(cross(&y, &x), Point::with_z(0., 0., -1.));
    assert_eq!(dot(&Point::with_z(1., 2., 3.), &Point::with_z(4., 5., 6.)), 32.);
}

#[test]
fn format() {
    let p = Point::new(1.5f64, 99.);
    assert_eq!(p.to_string(), "(1.5, 99)");
    assert_eq!(Point::from((1.5, 99.)), p);
    assert_eq!(Point::from([1.5, 99.]), p);
}
