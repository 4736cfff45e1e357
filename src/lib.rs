//! Akima sub-spline interpolation of 1-D sequences and of n-dimensional
//! arrays along one axis.
//!
//! ```
//! use akima::interpolate;
//!
//! let y = interpolate(&[0.0, 1.0, 2.0], &[0.0, 0.0, 1.0], &[0.5, 1.5]).unwrap();
//! assert!((y[0] + 0.125).abs() < 1e-12);
//! assert!((y[1] - 0.375).abs() < 1e-12);
//! ```
pub mod consts;
pub mod error;
pub mod slice;
pub mod spline;
pub mod strided;
pub mod utils;
use ndarray::{Array1, ArrayView1};
pub use consts::{AKIMA_CONFIG, AkimaConfig};
pub use error::{InterpolationError, Result};
pub use slice::{Execution, interpolate_along_axis, interpolate_along_axis_with, resolve_axis};
pub use spline::{AkimaSpline, Scratch, SegmentCursor, build_and_evaluate};
pub use strided::StridedLayout;
/// Interpolate one sequence `y(x)` at `x_new` (non-decreasing).
pub fn interpolate(x: &[f64], y: &[f64], x_new: &[f64]) -> Result<Vec<f64>> {
    let mut out = Array1::zeros(x_new.len());
    let mut scratch = Scratch::for_len(x.len());
    build_and_evaluate(
        ArrayView1::from(x),
        ArrayView1::from(y),
        ArrayView1::from(x_new),
        out.view_mut(),
        &mut scratch,
    )?;
    Ok(out.to_vec())
}
