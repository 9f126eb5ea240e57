use mat2d_core::Matrix;

/// Tolerance used by the equation demos when comparing answers.
pub const DEFAULT_THRESHOLD: f64 = 0.00001;

/// Tests two doubles for approximate equality within `+/- threshold`.
pub fn is_approx_eq(lhs: f64, rhs: f64, threshold: f64) -> bool {
    lhs < rhs + threshold && lhs > rhs - threshold
}

/// Tests two matrices for approximate equality, element by element.
/// Differently sized matrices (or blank ones) are never approximately
/// equal.
pub fn is_approx_eq_matrix(lhs: &Matrix, rhs: &Matrix, threshold: f64) -> bool {
    let (Ok(lhs_size), Ok(rhs_size)) = (lhs.size(), rhs.size()) else {
        return false;
    };
    if lhs_size != rhs_size {
        return false;
    }

    for row in 1..=lhs_size.0 {
        for col in 1..=lhs_size.1 {
            let (Ok(a), Ok(b)) = (lhs.get(row, col), rhs.get(row, col)) else {
                return false;
            };
            if !is_approx_eq(a, b, threshold) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::{is_approx_eq, is_approx_eq_matrix, DEFAULT_THRESHOLD};
    use mat2d_core::Matrix;

    #[test]
    fn test_is_approx_eq() {
        assert!(is_approx_eq(1.0, 1.0, DEFAULT_THRESHOLD));
        assert!(is_approx_eq(1.0, 1.0 + 1e-6, DEFAULT_THRESHOLD));
        assert!(!is_approx_eq(1.0, 1.0 + 1e-4, DEFAULT_THRESHOLD));
    }

    #[test]
    fn test_matrix_comparison_rejects_shape_mismatch() {
        let a = Matrix::new(2, 1);
        let b = Matrix::new(1, 2);
        assert!(!is_approx_eq_matrix(&a, &b, DEFAULT_THRESHOLD));
        assert!(!is_approx_eq_matrix(&a, &Matrix::blank(), DEFAULT_THRESHOLD));
    }

    #[test]
    fn test_matrix_comparison_is_elementwise() {
        let mut a = Matrix::new(1, 2);
        let mut b = Matrix::new(1, 2);
        a.set(1, 1, 0.5).unwrap();
        b.set(1, 1, 0.5 + 1e-7).unwrap();
        assert!(is_approx_eq_matrix(&a, &b, DEFAULT_THRESHOLD));

        b.set(1, 2, 0.1).unwrap();
        assert!(!is_approx_eq_matrix(&a, &b, DEFAULT_THRESHOLD));
    }
}
