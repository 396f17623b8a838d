use thiserror::Error;

/// Top-level error type for the polyspace kernel.
#[derive(Debug, Error)]
pub enum PolyspaceError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised while building or querying geometric primitives.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid polygon: {0}")]
    InvalidPolygon(String),

    #[error("invalid circle: {0}")]
    InvalidCircle(String),

    #[error("index {index} is out of range for {len} elements")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors raised by the C-space operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("inscribed circle undefined: center lies {radius} from the nearest edge, not inside")]
    InscribedCircleUndefined { radius: f64 },
}

/// Convenience type alias for results using [`PolyspaceError`].
pub type Result<T> = std::result::Result<T, PolyspaceError>;
