use std::{fmt, ops};

use num_traits::real::Real;

use crate::{errors::{Predicate, TriangulationError}, idx::IdxDisplay, math::{cross, dot, half}};

/// A point in the plane.
///
/// `z` only takes part in [dot](crate::dot) and [cross](crate::cross). The arithmetic operators are two-dimensional and
/// produce points with `z == 0`.
///
/// Points have no value identity inside a [Triangulation](crate::Triangulation): two inserted points with equal
/// coordinates remain two distinct vertices.
#[derive(Clone, Copy, PartialEq)]
pub struct Point<C: Real> {
    pub(crate) x: C,
    pub(crate) y: C,
    pub(crate) z: C,
}

impl<C: Real> Point<C> {
    pub fn new(x: C, y: C) -> Self {
        Self::with_z(x, y, C::zero())
    }

    pub fn with_z(x: C, y: C, z: C) -> Self {
        Self { x, y, z }
    }

    #[inline(always)]
    pub fn x(&self) -> C { self.x }
    #[inline(always)]
    pub fn y(&self) -> C { self.y }
    #[inline(always)]
    pub fn z(&self) -> C { self.z }

    /// Barycentric containment test against the triangle `corners`.
    ///
    /// Points on the `corners[0]`-`corners[1]` and `corners[0]`-`corners[2]` edges are contained, points on the
    /// `corners[1]`-`corners[2]` edge are not.
    pub fn contained_in(&self, corners: [&Point<C>; 3]) -> Result<bool, TriangulationError> {
        let [v0, v1, v2] = corners;
        let b = *v1 - *v0;
        let c = *v2 - *v0;
        let d = *self - *v0;

        let det = c.x * b.y - c.y * b.x;
        if det == C::zero() {
            return Err(TriangulationError::GeometricDegeneracy(Predicate::Containment));
        }
        let u = (d.x * b.y - d.y * b.x) / det;
        let v = (c.x * d.y - c.y * d.x) / det;

        Ok(u >= C::zero() && v >= C::zero() && u + v < C::one())
    }

    /// Tests whether this point lies inside or exactly on the circumcircle of the triangle `corners`.
    pub fn in_circumcircle_of(&self, corners: [&Point<C>; 3]) -> Result<bool, TriangulationError> {
        let (center, radius_squared) = circumcircle(corners)?;
        let offset = *self - center;
        Ok(dot(&offset, &offset) <= radius_squared)
    }
}

/// Circumcenter and squared circumradius, from the cross product form of the circumcircle equations
pub(crate) fn circumcircle<C: Real>(corners: [&Point<C>; 3]) -> Result<(Point<C>, C), TriangulationError> {
    let [v0, v1, v2] = corners;
    let a = *v0 - *v2;
    let b = *v1 - *v2;

    let z = cross(&a, &b);
    let zz = dot(&z, &z);
    if zz == C::zero() {
        return Err(TriangulationError::GeometricDegeneracy(Predicate::Circumcircle));
    }

    let aa = dot(&a, &a);
    let bb = dot(&b, &b);
    let center = cross(&(b * aa - a * bb), &z) * (half::<C>() / zz) + *v2;
    let ab = a - b;
    let radius_squared = half::<C>() * half::<C>() * aa * bb * dot(&ab, &ab) / zz;

    Ok((center, radius_squared))
}

impl<C: Real> ops::Add for Point<C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<C: Real> ops::Sub for Point<C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<C: Real> ops::Mul<C> for Point<C> {
    type Output = Self;

    fn mul(self, rhs: C) -> Self::Output {
        Self::new(rhs * self.x, rhs * self.y)
    }
}

macro_rules! impl_scalar_mul {
    ($($c:ty),*) => {
        $(
            impl ops::Mul<Point<$c>> for $c {
                type Output = Point<$c>;

                fn mul(self, rhs: Point<$c>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64);

impl<C: Real> fmt::Debug for Point<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("Point");
        if let Some(x) = self.x.to_f64() {
            tuple.field(&x);
        }
        if let Some(y) = self.y.to_f64() {
            tuple.field(&y);
        }
        if self.z != C::zero() {
            if let Some(z) = self.z.to_f64() {
                tuple.field(&z);
            }
        }
        tuple.finish()
    }
}

impl<C: Real + fmt::Display> fmt::Display for Point<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<C: Real> IdxDisplay for Point<C> {
    fn fmt(f: &mut fmt::Formatter<'_>, idx: usize) -> fmt::Result {
        write!(f, "p{}", idx)
    }
}

impl<C: Real> From<(C, C)> for Point<C> {
    fn from((x, y): (C, C)) -> Self {
        Self::new(x, y)
    }
}

impl<C: Real> From<[C; 2]> for Point<C> {
    fn from([x, y]: [C; 2]) -> Self {
        Self::new(x, y)
    }
}
