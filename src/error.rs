use thiserror::Error;

/// Top-level error type for the protractor crate.
#[derive(Debug, Error)]
pub enum ProtractorError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),

    #[error(transparent)]
    Measure(#[from] MeasureError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to arc tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Errors raised by the measurement board.
#[derive(Debug, Error)]
pub enum MeasureError {
    #[error("measurement not found")]
    MeasurementNotFound,

    #[error("pending point index {index} is out of range (pending: {len})")]
    PendingIndexOutOfRange { index: usize, len: usize },

    #[error("invalid board configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience type alias for results using [`ProtractorError`].
pub type Result<T> = std::result::Result<T, ProtractorError>;
