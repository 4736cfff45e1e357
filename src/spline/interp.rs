use ndarray::ArrayView1;
use crate::error::{InterpolationError, Result};
use super::{Scratch, SegmentCursor, build};
/// An Akima interpolant built once and sampled any number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct AkimaSpline {
    x: Vec<f64>,
    coeffs: Vec<[f64; 4]>,
}
impl AkimaSpline {
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self> {
        let n = x.len();
        if y.len() != n {
            return Err(InterpolationError::ShapeMismatch(format!(
                "x has {} samples but y has {}",
                n,
                y.len()
            )));
        }
        let mut scratch = Scratch::for_len(n);
        let mut tables = scratch.tables(n)?;
        build(ArrayView1::from(x), ArrayView1::from(y), &mut tables)?;
        let coeffs = (0..n - 1)
            .map(|i| [tables.constant[i], tables.slopes[i], tables.quadratic[i], tables.cubic[i]])
            .collect();
        Ok(Self { x: x.to_vec(), coeffs })
    }
    pub fn nodes(&self) -> usize {
        self.x.len()
    }
    pub fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }
    /// `[c0, c1, c2, c3]` of segment `i`, for `t = x - x[i]`.
    pub fn coefficients(&self, i: usize) -> Option<[f64; 4]> {
        self.coeffs.get(i).copied()
    }
    /// Segment a fresh forward scan would pick for `query`.
    #[inline]
    fn segment_of(&self, query: f64) -> usize {
        let below = self.x.partition_point(|&k| k < query);
        below.saturating_sub(1).min(self.coeffs.len() - 1)
    }
    #[inline(always)]
    fn value(&self, i: usize, query: f64) -> f64 {
        let [c0, c1, c2, c3] = self.coeffs[i];
        let t = query - self.x[i];
        c0 + t * (c1 + t * (c2 + t * c3))
    }
    /// Evaluate at a single position; out-of-domain queries use the end segments.
    pub fn eval(&self, query: f64) -> f64 {
        self.value(self.segment_of(query), query)
    }
    /// Batch evaluation with a forward-only cursor; `t_slice` should be non-decreasing.
    #[inline(always)]
    pub fn sample_with_slice(&self, t_slice: &[f64]) -> Vec<f64> {
        let knots = ArrayView1::from(&self.x[..]);
        let mut cursor = SegmentCursor::new(self.x.len());
        let mut result = Vec::with_capacity(t_slice.len());
        for &t in t_slice {
            let i = cursor.advance_to(&knots, t);
            result.push(self.value(i, t));
        }
        result
    }
    /// Evaluate every query, rejecting any outside `[x[0], x[n-1]]`.
    pub fn sample_within_bounds(&self, t_slice: &[f64]) -> Result<Vec<f64>> {
        let (min, max) = self.domain();
        if let Some(&query) = t_slice.iter().find(|&&t| !(t >= min && t <= max)) {
            return Err(InterpolationError::OutOfBounds { query, min, max });
        }
        Ok(t_slice.iter().map(|&t| self.eval(t)).collect())
    }
}
