use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use num_traits::Zero;

use crate::array2d::Array2D;
use crate::error::MatrixError;

/// A dense matrix of `f64` values, to be used for linear algebra.
///
/// A `Matrix` owns exactly one [`Array2D`] as its internal
/// representation; the flat row-major layout never leaks through the
/// public surface. Element access is **1-based** at this boundary
/// (`(1, 1)` is the top-left element), matching the convention of the
/// equation-solving call sites, and is translated to 0-based buffer
/// offsets internally after validation.
///
/// A default-constructed `Matrix` is *blank*: it owns no buffer at all.
/// Every operation on a blank matrix fails with
/// [`MatrixError::InvalidState`] instead of touching storage.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Matrix {
    contents: Option<Array2D>,
}

impl Matrix {
    /// Creates a blank matrix owning no storage.
    pub fn blank() -> Self {
        Matrix { contents: None }
    }

    /// Creates a zero-initialized matrix with the given dimensions.
    ///
    /// A zero `rows` or `cols` is legal and produces a degenerate but
    /// populated matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        Matrix {
            contents: Some(Array2D::new(rows, cols)),
        }
    }

    /// Returns true when this matrix owns no storage.
    pub fn is_blank(&self) -> bool {
        self.contents.is_none()
    }

    fn buffer(&self) -> Result<&Array2D, MatrixError> {
        self.contents.as_ref().ok_or(MatrixError::InvalidState)
    }

    /// Validates a 1-based `(row, col)` pair against the buffer's size.
    fn check_bounds(buffer: &Array2D, row: usize, col: usize) -> Result<(), MatrixError> {
        let (rows, cols) = buffer.size();
        if row == 0 || col == 0 || row > rows || col > cols {
            return Err(MatrixError::OutOfRange {
                row,
                col,
                rows,
                cols,
            });
        }
        Ok(())
    }

    fn require_same_size(
        lhs: &Array2D,
        rhs: &Array2D,
        operation: &str,
    ) -> Result<(), MatrixError> {
        if lhs.size() != rhs.size() {
            return Err(MatrixError::DimensionMismatch(format!(
                "cannot {} a {}x{} matrix and a {}x{} matrix",
                operation,
                lhs.rows(),
                lhs.cols(),
                rhs.rows(),
                rhs.cols()
            )));
        }
        Ok(())
    }

    /// Returns this matrix's size as a `(rows, cols)` pair.
    pub fn size(&self) -> Result<(usize, usize), MatrixError> {
        Ok(self.buffer()?.size())
    }

    /// Reads the element at the 1-based `(row, col)` position.
    pub fn get(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        let buffer = self.buffer()?;
        Self::check_bounds(buffer, row, col)?;
        Ok(buffer.at(row - 1, col - 1))
    }

    /// Mutable access to the element at the 1-based `(row, col)`
    /// position. Assignment through the returned reference alters this
    /// matrix in place.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut f64, MatrixError> {
        let buffer = self.contents.as_mut().ok_or(MatrixError::InvalidState)?;
        Self::check_bounds(buffer, row, col)?;
        Ok(buffer.at_mut(row - 1, col - 1))
    }

    /// Writes `value` at the 1-based `(row, col)` position.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), MatrixError> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Resizes this matrix in place to the given dimensions.
    ///
    /// Elements inside both the old and the new bounds are preserved.
    /// When shrinking, rows are discarded from the bottom and columns
    /// from the right; when growing, new rows and columns start at
    /// zero. Returns `&mut Self` to permit chaining.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<&mut Self, MatrixError> {
        let old = self.buffer()?;
        let old_size = old.size();

        let mut resized = Array2D::new(rows, cols);
        for row in 0..old.rows().min(rows) {
            for col in 0..old.cols().min(cols) {
                *resized.at_mut(row, col) = old.at(row, col);
            }
        }

        log::debug!("resized matrix from {:?} to {:?}", old_size, (rows, cols));
        self.contents = Some(resized);
        Ok(self)
    }

    /// Returns the element-wise sum of this matrix and `rhs`.
    ///
    /// Both matrices must have identical dimensions.
    pub fn add(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        let lhs = self.buffer()?;
        let rhs = rhs.buffer()?;
        Self::require_same_size(lhs, rhs, "add")?;

        let mut out = Array2D::new(lhs.rows(), lhs.cols());
        for i in 0..out.len() {
            out[i] = lhs[i] + rhs[i];
        }
        Ok(Matrix {
            contents: Some(out),
        })
    }

    /// Returns the element-wise difference of this matrix and `rhs`.
    ///
    /// Both matrices must have identical dimensions.
    pub fn sub(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        let lhs = self.buffer()?;
        let rhs = rhs.buffer()?;
        Self::require_same_size(lhs, rhs, "subtract")?;

        let mut out = Array2D::new(lhs.rows(), lhs.cols());
        for i in 0..out.len() {
            out[i] = lhs[i] - rhs[i];
        }
        Ok(Matrix {
            contents: Some(out),
        })
    }

    /// Returns the matrix product `self * rhs`.
    ///
    /// Requires `self.cols == rhs.rows`; the result has shape
    /// `(self.rows, rhs.cols)`.
    pub fn mul(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        let lhs = self.buffer()?;
        let rhs = rhs.buffer()?;
        if lhs.cols() != rhs.rows() {
            return Err(MatrixError::DimensionMismatch(format!(
                "cannot multiply a {}x{} matrix by a {}x{} matrix",
                lhs.rows(),
                lhs.cols(),
                rhs.rows(),
                rhs.cols()
            )));
        }

        let mut out = Array2D::new(lhs.rows(), rhs.cols());
        for row in 0..lhs.rows() {
            for col in 0..rhs.cols() {
                let mut acc = 0.0;
                for k in 0..lhs.cols() {
                    acc += lhs.at(row, k) * rhs.at(k, col);
                }
                *out.at_mut(row, col) = acc;
            }
        }
        Ok(Matrix {
            contents: Some(out),
        })
    }

    /// Divides every element by the scalar `divisor`.
    ///
    /// A zero divisor is not trapped; it produces infinities or NaN
    /// per IEEE 754 semantics, just as scalar division would.
    pub fn div_scalar(&self, divisor: f64) -> Result<Matrix, MatrixError> {
        let buffer = self.buffer()?;
        let mut out = Array2D::new(buffer.rows(), buffer.cols());
        for i in 0..out.len() {
            out[i] = buffer[i] / divisor;
        }
        Ok(Matrix {
            contents: Some(out),
        })
    }

    /// Divides this matrix by `rhs`, defined as `self * rhs.inverse()`.
    ///
    /// This is the inverse-multiply reading of matrix division used for
    /// equation solving: `B.divide(A)` solves `A·x = B` for 1x1
    /// systems. It is *not* an element-wise quotient.
    pub fn divide(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.mul(&rhs.inverse()?)
    }

    /// Returns the inverse of this matrix.
    ///
    /// Only square matrices of order 1 or 2 are supported:
    /// `[x]` inverts to `[1/x]`, and `[[a, b], [c, d]]` inverts to the
    /// adjugate over the determinant `ad - bc`. A matrix that is not
    /// square, has order greater than 2, or has an exactly zero
    /// determinant fails with [`MatrixError::NotInvertible`].
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        let buffer = self.buffer()?;
        if !buffer.is_square() {
            return Err(MatrixError::NotInvertible(format!(
                "a {}x{} matrix is not square",
                buffer.rows(),
                buffer.cols()
            )));
        }

        match buffer.rows() {
            1 => {
                let x = buffer.at(0, 0);
                if x.is_zero() {
                    return Err(MatrixError::NotInvertible(
                        "1x1 matrix with a zero element is singular".to_string(),
                    ));
                }
                let mut out = Array2D::new(1, 1);
                *out.at_mut(0, 0) = 1.0 / x;
                Ok(Matrix {
                    contents: Some(out),
                })
            }
            2 => {
                let a = buffer.at(0, 0);
                let b = buffer.at(0, 1);
                let c = buffer.at(1, 0);
                let d = buffer.at(1, 1);

                let det = a * d - b * c;
                log::debug!("2x2 determinant: {det}");
                if det.is_zero() {
                    return Err(MatrixError::NotInvertible(
                        "determinant is zero".to_string(),
                    ));
                }

                let mut out = Array2D::new(2, 2);
                *out.at_mut(0, 0) = d / det;
                *out.at_mut(0, 1) = -b / det;
                *out.at_mut(1, 0) = -c / det;
                *out.at_mut(1, 1) = a / det;
                Ok(Matrix {
                    contents: Some(out),
                })
            }
            order => Err(MatrixError::NotInvertible(format!(
                "inversion is only supported up to order 2, got order {order}"
            ))),
        }
    }

    /// Returns the transpose of this matrix: a new `(cols, rows)`
    /// matrix where every element is flipped across the main diagonal.
    /// A double transpose reproduces the original matrix.
    pub fn transpose(&self) -> Result<Matrix, MatrixError> {
        let buffer = self.buffer()?;
        let mut out = Array2D::new(buffer.cols(), buffer.rows());
        for row in 0..buffer.rows() {
            for col in 0..buffer.cols() {
                *out.at_mut(col, row) = buffer.at(row, col);
            }
        }
        Ok(Matrix {
            contents: Some(out),
        })
    }
}

/// Renders one bracketed line per row with tab-separated columns,
/// each row terminated by a single newline:
///
/// ```text
/// [1	2]
/// [3	4]
/// ```
///
/// A blank matrix (and a populated matrix with zero rows) renders as
/// nothing at all.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(buffer) = &self.contents else {
            return Ok(());
        };
        for row in 0..buffer.rows() {
            write!(f, "[")?;
            for col in 0..buffer.cols() {
                if col > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{}", buffer.at(row, col))?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

// Operator sugar over the fallible methods, for call sites that have
// already established their shapes. The `Result`-returning methods are
// the primary surface.

/// Element-wise sum.
///
/// # Panics
///
/// Panics when the operands are blank or differently sized.
impl Add for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: &Matrix) -> Matrix {
        Matrix::add(self, rhs).unwrap_or_else(|e| panic!("matrix addition failed: {e}"))
    }
}

/// Element-wise difference.
///
/// # Panics
///
/// Panics when the operands are blank or differently sized.
impl Sub for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &Matrix) -> Matrix {
        Matrix::sub(self, rhs).unwrap_or_else(|e| panic!("matrix subtraction failed: {e}"))
    }
}

/// Matrix product.
///
/// # Panics
///
/// Panics when the operands are blank or incompatibly shaped.
impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        Matrix::mul(self, rhs).unwrap_or_else(|e| panic!("matrix multiplication failed: {e}"))
    }
}

/// Scalar division.
///
/// # Panics
///
/// Panics when the matrix is blank.
impl Div<f64> for &Matrix {
    type Output = Matrix;

    fn div(self, divisor: f64) -> Matrix {
        self.div_scalar(divisor)
            .unwrap_or_else(|e| panic!("scalar division failed: {e}"))
    }
}
