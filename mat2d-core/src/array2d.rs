use std::ops::{Index, IndexMut};

use num_traits::Zero;

/// A two-dimensional array stored as a single contiguous allocation in
/// row-major order: `data[row * cols + col]`.
///
/// Nested `Vec<Vec<f64>>` storage would pay for one heap allocation per
/// row plus a pointer chase on every access; a flat buffer avoids both.
/// Indexing is plain offset arithmetic, so bounds policy lives with the
/// caller ([`Matrix`](crate::Matrix) validates at its public boundary
/// before delegating here).
#[derive(Debug, Clone, PartialEq)]
pub struct Array2D {
    /// Elements in row-major order. Empty exactly when a dimension is zero.
    data: Vec<f64>,
    /// Recorded size as a `(rows, cols)` pair.
    size: (usize, usize),
}

impl Array2D {
    /// Creates a zero-initialized array with the given dimensions.
    ///
    /// A zero `rows` or `cols` yields an empty buffer; the size pair is
    /// recorded as given.
    pub fn new(rows: usize, cols: usize) -> Self {
        Array2D {
            data: vec![f64::zero(); rows * cols],
            size: (rows, cols),
        }
    }

    /// Returns the dimensions as a `(rows, cols)` pair.
    pub fn size(&self) -> (usize, usize) {
        self.size
    }

    pub fn rows(&self) -> usize {
        self.size.0
    }

    pub fn cols(&self) -> usize {
        self.size.1
    }

    pub fn is_square(&self) -> bool {
        self.size.0 == self.size.1
    }

    /// Number of stored elements (`rows * cols`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Reads the element at the 0-based `(row, col)` position.
    pub fn at(&self, row: usize, col: usize) -> f64 {
        debug_assert!(row < self.size.0 && col < self.size.1);
        self.data[row * self.size.1 + col]
    }

    /// Mutable access to the element at the 0-based `(row, col)` position.
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut f64 {
        debug_assert!(row < self.size.0 && col < self.size.1);
        &mut self.data[row * self.size.1 + col]
    }
}

/// Flat access into the underlying row-major sequence, for whole-buffer
/// iteration without re-deriving `(row, col)` pairs.
impl Index<usize> for Array2D {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Array2D {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::Array2D;

    #[test]
    fn test_new_is_zero_filled() {
        let array = Array2D::new(3, 4);
        assert_eq!(array.size(), (3, 4));
        assert_eq!(array.len(), 12);
        for i in 0..array.len() {
            assert_eq!(array[i], 0.0);
        }
    }

    #[test]
    fn test_new_with_zero_dimension() {
        let array = Array2D::new(0, 5);
        assert_eq!(array.size(), (0, 5));
        assert_eq!(array.len(), 0);

        let array = Array2D::new(5, 0);
        assert_eq!(array.size(), (5, 0));
        assert_eq!(array.len(), 0);
    }

    #[test]
    fn test_pair_and_flat_indexing_agree() {
        let mut array = Array2D::new(2, 3);
        *array.at_mut(0, 0) = 1.0;
        *array.at_mut(0, 2) = 2.0;
        *array.at_mut(1, 1) = 3.0;

        // Row-major layout: (r, c) maps to r * cols + c.
        assert_eq!(array[0], 1.0);
        assert_eq!(array[2], 2.0);
        assert_eq!(array[4], 3.0);
        assert_eq!(array.at(1, 1), 3.0);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut original = Array2D::new(2, 2);
        *original.at_mut(0, 0) = 7.0;

        let mut copy = original.clone();
        *copy.at_mut(0, 0) = 9.0;
        *copy.at_mut(1, 1) = 5.0;

        assert_eq!(original.at(0, 0), 7.0);
        assert_eq!(original.at(1, 1), 0.0);
        assert_eq!(copy.at(0, 0), 9.0);
    }

    #[test]
    fn test_equality_is_elementwise() {
        let mut a = Array2D::new(2, 2);
        let mut b = Array2D::new(2, 2);
        assert_eq!(a, b);

        *a.at_mut(1, 0) = 4.0;
        assert_ne!(a, b);

        *b.at_mut(1, 0) = 4.0;
        assert_eq!(a, b);

        // Same element count, different shape.
        let c = Array2D::new(1, 4);
        let d = Array2D::new(4, 1);
        assert_ne!(c, d);
    }
}
