use thiserror::Error;
pub type Result<T> = std::result::Result<T, InterpolationError>;
/// Errors raised while building or evaluating an Akima interpolant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpolationError {
    /// x is not strictly increasing, or two nodes are closer than `MIN_SPACING`.
    #[error("x must be strictly increasing: spacing {spacing:e} ending at x[{index}]")]
    DegenerateInput { index: usize, spacing: f64 },
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
    #[error("at least 3 samples are required along the interpolation axis, got {len}")]
    UndersizedInput { len: usize },
    #[error("invalid axis {axis} for array with {ndim} dimension(s)")]
    InvalidAxis { axis: isize, ndim: usize },
    #[error("invalid strided layout: {0}")]
    InvalidLayout(String),
    #[error("query {query} outside interpolation domain [{min}, {max}]")]
    OutOfBounds { query: f64, min: f64, max: f64 },
    /// A failure inside one lane of a multi-dimensional interpolation.
    #[error("slice {index}: {source}")]
    Slice {
        index: usize,
        #[source]
        source: Box<InterpolationError>,
    },
}
impl InterpolationError {
    pub(crate) fn in_slice(self, index: usize) -> Self {
        InterpolationError::Slice { index, source: Box::new(self) }
    }
    /// The underlying error with any slice wrapper removed.
    pub fn root(&self) -> &InterpolationError {
        match self {
            InterpolationError::Slice { source, .. } => source.root(),
            other => other,
        }
    }
}
