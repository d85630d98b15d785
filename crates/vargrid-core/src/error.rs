//! Error types for variable containers and model assembly.

use vargrid_expr::LinearExprError;
use vargrid_solver::SolverError;

/// Misuse of a variable group or table. Raised at the point of access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// Wrong number of indices for the group's fixed dimension count.
    DimensionMismatch { expected: usize, got: usize },
    /// Index outside the declared size of a level.
    IndexOutOfRange {
        level: usize,
        index: usize,
        size: usize,
    },
    /// `scalar()` on a group with one or more dimensions.
    NotScalar { dims: usize },
    /// Indexed access on a scalar group.
    NotGroup { got: usize },
    /// Table slot read before it was set.
    UnsetSlot { key: &'static str },
}

impl IndexError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            IndexError::DimensionMismatch { .. } => "INDEX_DIMENSION_MISMATCH",
            IndexError::IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
            IndexError::NotScalar { .. } => "INDEX_NOT_SCALAR",
            IndexError::NotGroup { .. } => "INDEX_NOT_GROUP",
            IndexError::UnsetSlot { .. } => "TABLE_UNSET_SLOT",
        }
    }
}

impl std::fmt::Display for IndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexError::DimensionMismatch { expected, got } => write!(
                f,
                "[{}] Expected {} indices, got {}",
                self.code(),
                expected,
                got
            ),
            IndexError::IndexOutOfRange { level, index, size } => write!(
                f,
                "[{}] Index {} at level {} is outside [0, {})",
                self.code(),
                index,
                level,
                size
            ),
            IndexError::NotScalar { dims } => write!(
                f,
                "[{}] scalar() called on a group with {} dimensions",
                self.code(),
                dims
            ),
            IndexError::NotGroup { got } => write!(
                f,
                "[{}] Scalar variable indexed with {} indices",
                self.code(),
                got
            ),
            IndexError::UnsetSlot { key } => {
                write!(f, "[{}] Table slot '{}' was never set", self.code(), key)
            }
        }
    }
}

impl std::error::Error for IndexError {}

/// Any failure while assembling a model.
///
/// Container misuse and solver-boundary failures share one type so model
/// code can use `?` on table lookups and solver calls alike.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    Index(IndexError),
    Expr(LinearExprError),
    /// Failure reported by the solver, passed through unchanged.
    Solver(SolverError),
}

impl BuildError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            BuildError::Index(err) => err.code(),
            BuildError::Expr(err) => err.code(),
            BuildError::Solver(err) => err.code(),
        }
    }
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::Index(err) => err.fmt(f),
            BuildError::Expr(err) => err.fmt(f),
            BuildError::Solver(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::Index(err) => Some(err),
            BuildError::Expr(err) => Some(err),
            BuildError::Solver(err) => Some(err),
        }
    }
}

impl From<IndexError> for BuildError {
    fn from(err: IndexError) -> Self {
        BuildError::Index(err)
    }
}

impl From<LinearExprError> for BuildError {
    fn from(err: LinearExprError) -> Self {
        BuildError::Expr(err)
    }
}

impl From<SolverError> for BuildError {
    fn from(err: SolverError) -> Self {
        BuildError::Solver(err)
    }
}
