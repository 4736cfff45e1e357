use ndarray::{ArrayBase, Data, Ix1};
/// Forward-only segment selector used by batch evaluation.
///
/// The cursor starts before the first segment and only ever moves right: a
/// query below the previous one is evaluated on the segment the cursor has
/// already reached. Queries must be non-decreasing for the geometrically
/// correct segment to be picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentCursor {
    /// Index of the node right of the current segment; 0 before the first advance.
    next: usize,
    last_segment: usize,
}
impl SegmentCursor {
    /// Cursor over the `nodes - 1` segments of a sequence with `nodes >= 2` samples.
    pub fn new(nodes: usize) -> Self {
        Self { next: 0, last_segment: nodes.saturating_sub(2) }
    }
    pub fn segment(&self) -> Option<usize> {
        self.next.checked_sub(1)
    }
    pub fn last_segment(&self) -> usize {
        self.last_segment
    }
    /// Move right past every node strictly below `query`, stopping at the last
    /// segment, and return the segment to evaluate.
    #[inline]
    pub fn advance_to<S>(&mut self, knots: &ArrayBase<S, Ix1>, query: f64) -> usize
    where
        S: Data<Elem = f64>,
    {
        while self.next <= self.last_segment && query > knots[self.next] {
            self.next += 1;
        }
        if self.next == 0 {
            self.next = 1;
        }
        self.next - 1
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;
    #[test]
    fn test_ascending_queries() {
        let x = arr1(&[0.0, 1.0, 2.0, 3.0]);
        let mut cursor = SegmentCursor::new(x.len());
        assert_eq!(cursor.segment(), None);
        assert_eq!(cursor.advance_to(&x, 0.5), 0);
        assert_eq!(cursor.advance_to(&x, 1.0), 0);
        assert_eq!(cursor.advance_to(&x, 1.5), 1);
        assert_eq!(cursor.advance_to(&x, 2.9), 2);
        assert_eq!(cursor.segment(), Some(2));
    }
    #[test]
    fn test_below_domain_forces_first_segment() {
        let x = arr1(&[0.0, 1.0, 2.0]);
        let mut cursor = SegmentCursor::new(x.len());
        assert_eq!(cursor.advance_to(&x, -10.0), 0);
        assert_eq!(cursor.advance_to(&x, 0.0), 0);
    }
    #[test]
    fn test_clamped_to_last_segment() {
        let x = arr1(&[0.0, 1.0, 2.0, 3.0, 4.0]);
        let mut cursor = SegmentCursor::new(x.len());
        assert_eq!(cursor.last_segment(), 3);
        assert_eq!(cursor.advance_to(&x, 100.0), 3);
        assert_eq!(cursor.advance_to(&x, 200.0), 3);
    }
    #[test]
    fn test_never_moves_backward() {
        let x = arr1(&[0.0, 1.0, 2.0, 3.0, 4.0]);
        let mut cursor = SegmentCursor::new(x.len());
        assert_eq!(cursor.advance_to(&x, 3.5), 3);
        // a low query after a high one keeps the segment already reached
        assert_eq!(cursor.advance_to(&x, 0.5), 3);
        assert_eq!(cursor.advance_to(&x, -1.0), 3);
    }
    #[test]
    fn test_nan_query_does_not_advance() {
        let x = arr1(&[0.0, 1.0, 2.0]);
        let mut cursor = SegmentCursor::new(x.len());
        assert_eq!(cursor.advance_to(&x, f64::NAN), 0);
        assert_eq!(cursor.advance_to(&x, 1.5), 1);
    }
}
