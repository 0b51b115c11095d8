use std::{error, fmt};

use backtrace::Backtrace;

/// The geometric test which encountered a zero-area triangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// The barycentric containment test ([Point::contained_in](crate::Point::contained_in))
    Containment,
    /// The circumcircle test ([Point::in_circumcircle_of](crate::Point::in_circumcircle_of))
    Circumcircle,
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Containment => "containment",
            Self::Circumcircle => "circumcircle",
        })
    }
}

/// Describes an error which occurred while inserting into or querying a [Triangulation](crate::Triangulation)
#[derive(Debug)]
#[non_exhaustive]
pub enum TriangulationError {
    /// A collinear or zero-area triangle made a geometric test divide by zero.
    GeometricDegeneracy(Predicate),
    /// The inserted point lies outside every circumcircle of the mesh, which only happens for points outside the frame.
    EmptyCavity,
    /// The cavity boundary did not close into a loop within the given number of steps.
    BoundaryWalkNonTermination {
        /// Number of walk steps taken before giving up
        steps: usize,
    },
    /// The cavity boundary closed around only some of the triangles whose circumcircle holds the point, so the
    /// cavity is not connected through shared edges and cannot be re-triangulated as one fan.
    DisconnectedCavity {
        /// Number of cavity triangles the boundary walk passed through
        reached: usize,
        /// Number of triangles whose circumcircle holds the point
        triangles: usize,
    },
    /// The adjacency invariant of the mesh was violated. This is a bug, not an input error.
    /// The [Triangulation](crate::Triangulation) is poisoned afterwards.
    MeshInconsistency(InternalError),
    /// An earlier insertion failed with [TriangulationError::MeshInconsistency], and the mesh can no longer be modified.
    Poisoned,
}

impl TriangulationError {
    #[cold]
    #[inline(always)]
    pub(crate) fn internal(msg: impl Into<String>) -> Self {
        Self::MeshInconsistency(InternalError::new(msg))
    }
}

impl fmt::Display for TriangulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GeometricDegeneracy(predicate) => write!(f, "Degenerate triangle encountered in the {} test", predicate),
            Self::EmptyCavity => write!(f, "Point lies outside every circumcircle of the mesh"),
            Self::BoundaryWalkNonTermination { steps } => write!(f, "Cavity boundary did not close after {} steps", steps),
            Self::DisconnectedCavity { reached, triangles } => write!(f, "Cavity boundary encloses only {} of {} triangles", reached, triangles),
            Self::MeshInconsistency(error) => fmt::Display::fmt(error, f),
            Self::Poisoned => write!(f, "Triangulation was poisoned by an earlier mesh inconsistency"),
        }
    }
}

impl error::Error for TriangulationError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::MeshInconsistency(error) => Some(error),
            _ => None,
        }
    }
}

impl From<InternalError> for TriangulationError {
    fn from(e: InternalError) -> Self {
        Self::MeshInconsistency(e)
    }
}

#[derive(Debug)]
pub struct InternalError {
    pub msg: String,
    pub backtrace: Backtrace,
}

impl InternalError {
    #[cold]
    #[inline(always)]
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            backtrace: Backtrace::new_unresolved(),
        }
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{:?}", self.msg, self.backtrace)
    }
}

impl error::Error for InternalError { }
