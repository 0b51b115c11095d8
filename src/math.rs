use num_traits::real::Real;

use crate::Point;

/// Dot product over all three coordinates, `z` included
pub fn dot<C: Real>(a: &Point<C>, b: &Point<C>) -> C {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Cross product over all three coordinates, `z` included
pub fn cross<C: Real>(a: &Point<C>, b: &Point<C>) -> Point<C> {
    Point::with_z(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

pub(crate) fn half<C: Real>() -> C {
    C::one() / (C::one() + C::one())
}
