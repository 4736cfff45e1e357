//! Akima's local cubic interpolation of a single x/y sequence.
//!
//! H. Akima, "A new method of interpolation and smooth curve fitting based on
//! local procedures", J. ACM 17(4), 589-602, 1970.
//!
//! The interpolant is built in five passes over a [`Scratch`] buffer:
//! secant slopes, two extrapolated slopes past each end, weighted derivative
//! at every node, per-segment cubic coefficients, and finally evaluation of
//! the queries with a forward-only [`SegmentCursor`].
pub mod cursor;
pub mod interp;
pub mod scratch;
pub use cursor::SegmentCursor;
pub use interp::AkimaSpline;
pub use scratch::{Scratch, Tables};
use ndarray::{ArrayView1, ArrayViewMut1, Zip};
use crate::consts::{MIN_SAMPLES, MIN_SPACING, WEIGHT_EPS};
use crate::error::{InterpolationError, Result};
/// Interpolate `y(x)` at `x_new`, writing the values into `out`.
///
/// `x` must be strictly increasing with gaps of at least [`MIN_SPACING`], and
/// `x_new` should be non-decreasing (see [`SegmentCursor`]). Queries outside
/// `[x[0], x[n-1]]` are evaluated on the first or last segment's cubic.
/// NaN and infinite inputs are not rejected and propagate into `out`.
pub fn build_and_evaluate(
    x: ArrayView1<f64>,
    y: ArrayView1<f64>,
    x_new: ArrayView1<f64>,
    mut out: ArrayViewMut1<f64>,
    scratch: &mut Scratch,
) -> Result<()> {
    let n = x.len();
    if y.len() != n {
        return Err(InterpolationError::ShapeMismatch(format!(
            "x has {} samples but y has {}",
            n,
            y.len()
        )));
    }
    if out.len() != x_new.len() {
        return Err(InterpolationError::ShapeMismatch(format!(
            "{} query positions but output holds {}",
            x_new.len(),
            out.len()
        )));
    }
    let mut tables = scratch.tables(n)?;
    build(x, y, &mut tables)?;
    let mut cursor = SegmentCursor::new(n);
    Zip::from(&x_new).and(&mut out).for_each(|&query, value| {
        let i = cursor.advance_to(&x, query);
        *value = cubic_at(&tables, i, query - x[i]);
    });
    Ok(())
}
/// Fill `tables` with the segment coefficients of the interpolant through `(x, y)`.
///
/// On return `constant`, `slopes`, `quadratic` and `cubic` hold the 0th to 3rd
/// order coefficients of segments `0..n-1`. `y.len()` must equal `x.len()`.
pub(crate) fn build(x: ArrayView1<f64>, y: ArrayView1<f64>, tables: &mut Tables<'_>) -> Result<()> {
    let n = x.len();
    if n < MIN_SAMPLES {
        return Err(InterpolationError::UndersizedInput { len: n });
    }
    secant_slopes(x, y, tables.slopes)?;
    let leading = extrapolate_slopes(x, y, tables.slopes);
    smooth_derivatives(leading, &mut tables.slopes[..=n]);
    segment_coefficients(x, y, tables);
    Ok(())
}
#[inline(always)]
pub(crate) fn cubic_at(tables: &Tables<'_>, i: usize, t: f64) -> f64 {
    tables.constant[i] + t * (tables.slopes[i] + t * (tables.quadratic[i] + t * tables.cubic[i]))
}
fn secant_slopes(x: ArrayView1<f64>, y: ArrayView1<f64>, slopes: &mut [f64]) -> Result<()> {
    for i in 0..x.len() - 1 {
        let h = x[i + 1] - x[i];
        if h < MIN_SPACING {
            return Err(InterpolationError::DegenerateInput { index: i + 1, spacing: h });
        }
        slopes[i] = (y[i + 1] - y[i]) / h;
    }
    Ok(())
}
/// Extend the slope table by two virtual nodes on each side.
///
/// The virtual x positions repeat the spacing of the nearest real interval
/// pair, and their y values continue the slope trend quadratically. The two
/// trailing slopes are stored at `slopes[n-1]` and `slopes[n]`; the two leading
/// ones (outermost first) are returned.
fn extrapolate_slopes(x: ArrayView1<f64>, y: ArrayView1<f64>, slopes: &mut [f64]) -> (f64, f64) {
    let n = x.len();
    let (x0, x1) = (x[0], x[1]);
    let left1 = x0 + x1 - x[2];
    let left0 = left1 + x0 - x1;
    let y_left1 = (x0 - left1) * (slopes[1] - 2.0 * slopes[0]) + y[0];
    let g1 = (y[0] - y_left1) / (x0 - left1);
    let y_left0 = (left1 - left0) * (slopes[0] - 2.0 * g1) + y_left1;
    let g0 = (y_left1 - y_left0) / (left1 - left0);
    let (xa, xb) = (x[n - 2], x[n - 1]);
    let right0 = xb + xa - x[n - 3];
    let right1 = right0 + xb - xa;
    let yb = y[n - 1];
    let y_right0 = (2.0 * slopes[n - 2] - slopes[n - 3]) * (right0 - xb) + yb;
    slopes[n - 1] = (y_right0 - yb) / (right0 - xb);
    let y_right1 = (2.0 * slopes[n - 1] - slopes[n - 2]) * (right1 - right0) + y_right0;
    slopes[n] = (y_right1 - y_right0) / (right1 - right0);
    (g0, g1)
}
/// Replace `slopes[i]` with the derivative at node `i`, for every node.
///
/// The extended slope sequence is `leading.0, leading.1, slopes[0..=n]`, and
/// node `i` is bracketed by its entries `i + 1` and `i + 2`. Each slot is
/// overwritten only after it has been read as the bracket of node `i`.
fn smooth_derivatives(leading: (f64, f64), slopes: &mut [f64]) {
    let nodes = slopes.len() - 1;
    let (mut t1, mut t2, mut t3) = (leading.0, leading.1, slopes[0]);
    for i in 0..nodes {
        let t0 = t1;
        t1 = t2;
        t2 = t3;
        t3 = slopes[i + 1];
        slopes[i] = weighted_derivative(t0, t1, t2, t3);
    }
}
/// Akima's blend of the two slopes `t1`, `t2` meeting at a node.
#[inline(always)]
fn weighted_derivative(t0: f64, t1: f64, t2: f64, t3: f64) -> f64 {
    let d0 = (t3 - t2).abs();
    let d1 = (t1 - t0).abs();
    if d0 + d1 < WEIGHT_EPS {
        0.5 * (t1 + t2)
    } else {
        (d0 * t1 + d1 * t2) / (d0 + d1)
    }
}
fn segment_coefficients(x: ArrayView1<f64>, y: ArrayView1<f64>, tables: &mut Tables<'_>) {
    for i in 0..x.len() - 1 {
        let h = x[i + 1] - x[i];
        let secant = (y[i + 1] - y[i]) / h;
        let (g0, g1) = (tables.slopes[i], tables.slopes[i + 1]);
        tables.constant[i] = y[i];
        tables.quadratic[i] = (3.0 * secant - 2.0 * g0 - g1) / h;
        tables.cubic[i] = (g0 + g1 - 2.0 * secant) / (h * h);
    }
}
