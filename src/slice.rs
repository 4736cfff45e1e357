use ndarray::parallel::prelude::*;
use ndarray::{Array, ArrayView, ArrayView1, ArrayViewMut, Axis, Dimension};
use tracing::{debug, warn};
use crate::consts::{AKIMA_CONFIG, AkimaConfig, MIN_SAMPLES};
use crate::error::{InterpolationError, Result};
use crate::spline::{Scratch, build_and_evaluate};
/// How the lanes of a multi-dimensional array are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Execution {
    Sequential,
    /// Spread lanes over the rayon pool once there are at least `min_slices` of them.
    Parallel { min_slices: usize },
}
impl Execution {
    pub fn from_config(config: &AkimaConfig) -> Self {
        if config.parallel {
            Execution::Parallel { min_slices: config.min_parallel_slices }
        } else {
            Execution::Sequential
        }
    }
    fn is_parallel_for(&self, slices: usize) -> bool {
        match *self {
            Execution::Sequential => false,
            Execution::Parallel { min_slices } => slices > 1 && slices >= min_slices,
        }
    }
}
/// Map an optional, possibly negative axis onto `0..ndim`; `None` is the last axis.
pub fn resolve_axis(axis: Option<isize>, ndim: usize) -> Result<usize> {
    let requested = axis.unwrap_or(-1);
    let resolved = if requested < 0 { requested + ndim as isize } else { requested };
    if resolved < 0 || resolved >= ndim as isize {
        return Err(InterpolationError::InvalidAxis { axis: requested, ndim });
    }
    Ok(resolved as usize)
}
/// Interpolate every 1-D lane of `data` along `axis` from the `x` grid onto `x_new`.
///
/// With `out == None` a new array, shaped like `data` with `x_new.len()` along
/// `axis`, is returned. Otherwise the results are written into `out` and
/// `None` is returned. Scheduling follows [`AKIMA_CONFIG`].
pub fn interpolate_along_axis<D: Dimension>(
    x: ArrayView1<f64>,
    data: ArrayView<f64, D>,
    x_new: ArrayView1<f64>,
    axis: Option<isize>,
    out: Option<ArrayViewMut<f64, D>>,
) -> Result<Option<Array<f64, D>>> {
    interpolate_along_axis_with(x, data, x_new, axis, out, Execution::from_config(&AKIMA_CONFIG))
}
/// [`interpolate_along_axis`] with explicit scheduling.
///
/// All shapes are validated before any lane is computed. The first failing
/// lane aborts the call; its error is wrapped in [`InterpolationError::Slice`]
/// with the lane's row-major ordinal. Lanes other than the failing one may or
/// may not have been written by then.
pub fn interpolate_along_axis_with<D: Dimension>(
    x: ArrayView1<f64>,
    data: ArrayView<f64, D>,
    x_new: ArrayView1<f64>,
    axis: Option<isize>,
    out: Option<ArrayViewMut<f64, D>>,
    execution: Execution,
) -> Result<Option<Array<f64, D>>> {
    let ndim = data.ndim();
    if ndim == 0 {
        return Err(InterpolationError::ShapeMismatch(
            "data must have at least one dimension".to_string(),
        ));
    }
    let axis = Axis(resolve_axis(axis, ndim)?);
    let n = data.len_of(axis);
    if n < MIN_SAMPLES {
        return Err(InterpolationError::UndersizedInput { len: n });
    }
    if x.len() != n {
        return Err(InterpolationError::ShapeMismatch(format!(
            "x has {} samples but data has {} along axis {}",
            x.len(),
            n,
            axis.index()
        )));
    }
    let mut shape = data.raw_dim();
    shape[axis.index()] = x_new.len();
    match out {
        Some(mut out) => {
            if out.ndim() != ndim {
                return Err(InterpolationError::ShapeMismatch(format!(
                    "output has {} dimension(s), data has {}",
                    out.ndim(),
                    ndim
                )));
            }
            if out.raw_dim() != shape {
                return Err(InterpolationError::ShapeMismatch(format!(
                    "output shape {:?} does not match expected {:?}",
                    out.shape(),
                    shape.slice()
                )));
            }
            run_slices(x, data, x_new, out.view_mut(), axis, execution)?;
            Ok(None)
        }
        None => {
            let mut result = Array::zeros(shape);
            run_slices(x, data, x_new, result.view_mut(), axis, execution)?;
            Ok(Some(result))
        }
    }
}
fn run_slices<D: Dimension>(
    x: ArrayView1<f64>,
    data: ArrayView<f64, D>,
    x_new: ArrayView1<f64>,
    mut out: ArrayViewMut<f64, D>,
    axis: Axis,
    execution: Execution,
) -> Result<()> {
    let n = x.len();
    let slices = data.len() / n;
    let parallel = execution.is_parallel_for(slices);
    debug!(
        "Interpolating {} slice(s) along axis {}: {} -> {} points (parallel: {})",
        slices,
        axis.index(),
        n,
        x_new.len(),
        parallel
    );
    let result = if parallel {
        let lanes: Vec<_> = data.lanes(axis).into_iter().zip(out.lanes_mut(axis)).collect();
        lanes
            .into_par_iter()
            .enumerate()
            .try_for_each_init(
                || Scratch::for_len(n),
                |scratch, (index, (lane, out_lane))| {
                    build_and_evaluate(x, lane, x_new, out_lane, scratch).map_err(|e| e.in_slice(index))
                },
            )
    } else {
        let mut scratch = Scratch::for_len(n);
        data.lanes(axis)
            .into_iter()
            .zip(out.lanes_mut(axis))
            .enumerate()
            .try_for_each(|(index, (lane, out_lane))| {
                build_and_evaluate(x, lane, x_new, out_lane, &mut scratch).map_err(|e| e.in_slice(index))
            })
    };
    if let Err(e) = &result {
        warn!("Interpolation aborted: {}", e);
    }
    result
}
