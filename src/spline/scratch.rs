use crate::error::{InterpolationError, Result};
/// Working storage for one build: four tables of `n + 1` values in one allocation.
#[derive(Debug, Clone, Default)]
pub struct Scratch {
    buffer: Vec<f64>,
}
/// Named views into a [`Scratch`] buffer for a sequence of `n` nodes.
///
/// `slopes` first holds the secant slopes (interior ones followed by the two
/// trailing extrapolated ones) and is then smoothed in place into the node
/// derivatives. Its last entry keeps the outer trailing slope.
#[derive(Debug)]
pub struct Tables<'a> {
    pub constant: &'a mut [f64],
    pub quadratic: &'a mut [f64],
    pub cubic: &'a mut [f64],
    pub slopes: &'a mut [f64],
}
impl Scratch {
    #[inline]
    pub const fn required_len(nodes: usize) -> usize {
        4 * nodes + 4
    }
    pub fn for_len(nodes: usize) -> Self {
        Self { buffer: vec![0.0; Self::required_len(nodes)] }
    }
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }
    pub fn reset(&mut self) {
        self.buffer.fill(0.0);
    }
    /// Grow the buffer so it can serve sequences of `nodes` samples.
    pub fn reserve_for(&mut self, nodes: usize) {
        let required = Self::required_len(nodes);
        if self.buffer.len() < required {
            self.buffer.resize(required, 0.0);
        }
    }
    pub fn tables(&mut self, nodes: usize) -> Result<Tables<'_>> {
        let required = Self::required_len(nodes);
        if self.buffer.len() < required {
            return Err(InterpolationError::ShapeMismatch(format!(
                "scratch buffer holds {} values, {} nodes need {}",
                self.buffer.len(),
                nodes,
                required
            )));
        }
        let width = nodes + 1;
        let (constant, rest) = self.buffer[..required].split_at_mut(width);
        let (quadratic, rest) = rest.split_at_mut(width);
        let (cubic, slopes) = rest.split_at_mut(width);
        Ok(Tables { constant, quadratic, cubic, slopes })
    }
}
