//! Describing a 1-D sequence that lives inside a flat host buffer.
//!
//! A host that owns raw `f64` storage (a foreign array object, a memory-mapped
//! file, an interleaved record buffer) describes each sequence by the offset
//! of its first element, the distance between consecutive elements and the
//! element count. [`StridedLayout`] turns that triple into an ndarray view so
//! the interpolation core never touches raw offsets.
use ndarray::{ArrayView1, ArrayViewMut1, Axis, Ix1, ShapeBuilder};
use crate::error::{InterpolationError, Result};
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StridedLayout {
    pub offset: usize,
    /// Element distance between consecutive items, in units of `f64`.
    pub stride: isize,
    pub len: usize,
}
impl StridedLayout {
    pub fn new(offset: usize, stride: isize, len: usize) -> Self {
        Self { offset, stride, len }
    }
    pub fn contiguous(len: usize) -> Self {
        Self::new(0, 1, len)
    }
    /// Lowest buffer index touched and the absolute stride, after bounds checks.
    fn span(&self, buffer_len: usize) -> Result<(usize, usize)> {
        if self.len == 0 {
            return Ok((0, 1));
        }
        if self.stride == 0 && self.len > 1 {
            return Err(InterpolationError::InvalidLayout(format!(
                "zero stride with {} elements",
                self.len
            )));
        }
        let step = self.stride.unsigned_abs();
        let reach = (self.len - 1)
            .checked_mul(step)
            .ok_or_else(|| InterpolationError::InvalidLayout("stride overflow".to_string()))?;
        let (low, high) = if self.stride >= 0 {
            let high = self.offset.checked_add(reach).ok_or_else(|| {
                InterpolationError::InvalidLayout("offset overflow".to_string())
            })?;
            (self.offset, high)
        } else {
            let low = self.offset.checked_sub(reach).ok_or_else(|| {
                InterpolationError::InvalidLayout(format!(
                    "{} elements with stride {} run before the start of the buffer",
                    self.len, self.stride
                ))
            })?;
            (low, self.offset)
        };
        if high >= buffer_len {
            return Err(InterpolationError::InvalidLayout(format!(
                "element index {} out of bounds for buffer of length {}",
                high, buffer_len
            )));
        }
        Ok((low, step.max(1)))
    }
    pub fn view<'a>(&self, buffer: &'a [f64]) -> Result<ArrayView1<'a, f64>> {
        let (low, step) = self.span(buffer.len())?;
        if self.len == 0 {
            return Ok(ArrayView1::from(&buffer[..0]));
        }
        let mut view = ArrayView1::from_shape(Ix1(self.len).strides(Ix1(step)), &buffer[low..])
            .map_err(|e| InterpolationError::InvalidLayout(e.to_string()))?;
        if self.stride < 0 {
            view.invert_axis(Axis(0));
        }
        Ok(view)
    }
    pub fn view_mut<'a>(&self, buffer: &'a mut [f64]) -> Result<ArrayViewMut1<'a, f64>> {
        let (low, step) = self.span(buffer.len())?;
        if self.len == 0 {
            return Ok(ArrayViewMut1::from(&mut buffer[..0]));
        }
        let mut view = ArrayViewMut1::from_shape(Ix1(self.len).strides(Ix1(step)), &mut buffer[low..])
            .map_err(|e| InterpolationError::InvalidLayout(e.to_string()))?;
        if self.stride < 0 {
            view.invert_axis(Axis(0));
        }
        Ok(view)
    }
}
