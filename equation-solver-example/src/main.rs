mod helpers;

use std::error::Error;

use helpers::{is_approx_eq_matrix, DEFAULT_THRESHOLD};
use mat2d_core::{Matrix, MatrixError};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    run_test(solve_equation_one)?;
    run_test(solve_equation_two)?;
    run_test(solve_equation_three)?;
    run_test(solve_equation_four)?;

    log::info!("all equation demos completed");
    Ok(())
}

/// Runs a solver function and reports success or failure on stdout.
///
/// A solver returning an error means the equation setup itself was
/// invalid; that propagates out of `main` and terminates the program.
fn run_test(test_function: fn() -> Result<bool, MatrixError>) -> Result<(), MatrixError> {
    println!("========================================");
    let test_passed = test_function()?;

    println!();
    if test_passed {
        println!("Test passed!");
    } else {
        println!("!!! Test was not successful! !!!");
    }
    println!("========================================");
    Ok(())
}

/// Solves `6 = 2x` using basic algebra. The answer is `x = 3`.
fn solve_equation_one() -> Result<bool, MatrixError> {
    println!("TEST01: Solve a single linear equation.");

    // right-hand side
    let mut a = Matrix::new(1, 1); // coefficient matrix
    a.set(1, 1, 2.0)?;
    println!("\t\tMatrix A:\n{a}");

    // left-hand side
    let mut b = Matrix::new(1, 1); // "other-side" matrix
    b.set(1, 1, 6.0)?;
    println!("\t\tMatrix B:\n{b}");

    let mut x_ans = Matrix::new(1, 1);
    x_ans.set(1, 1, 3.0)?;
    println!("\t\tAnswer:\n{x_ans}");

    Ok(b.divide(&a)? == x_ans)
}

/// Solves `7 = 2x + 1` using basic algebra. The answer is `x = 3`.
fn solve_equation_two() -> Result<bool, MatrixError> {
    println!("TEST02: Solve a linear equation with more arithmetic.");

    // right-hand side
    let mut a = Matrix::new(1, 1); // coefficient matrix
    a.set(1, 1, 2.0)?;
    println!("\t\tMatrix A:\n{a}");

    let mut c = Matrix::new(1, 1); // constants matrix
    c.set(1, 1, 1.0)?;
    println!("\t\tMatrix c:\n{c}");

    // left-hand side
    let mut b = Matrix::new(1, 1); // "other-side" matrix
    b.set(1, 1, 7.0)?;
    println!("\t\tMatrix B:\n{b}");

    // correct answer
    let mut answer = Matrix::new(1, 1);
    answer.set(1, 1, 3.0)?;
    println!("\t\tAnswer:\n{answer}");

    // Move the constant over, then divide out the coefficient.
    let b = b.sub(&c)?;
    Ok(b.divide(&a)? == answer)
}

/// Solves the system
///
/// ```text
/// 7 = 4*x1 + 9*x2
/// 3 = 5*x1 + 2*x2
/// ```
///
/// by converting it to the matrix equality `Ax = B` and multiplying by
/// the inverse to get `x = (A^-1)B`. The answer is `x1 = 13/37`,
/// `x2 = 23/37`.
fn solve_equation_three() -> Result<bool, MatrixError> {
    println!("TEST03: Solve a system of equations.");

    // right-hand side
    let mut a = Matrix::new(2, 2); // coefficient matrix
    a.set(1, 1, 4.0)?;
    a.set(1, 2, 9.0)?;
    a.set(2, 1, 5.0)?;
    a.set(2, 2, 2.0)?;
    println!("\t\tMatrix A:\n{a}");

    // left-hand side
    let mut b = Matrix::new(2, 1); // "other-side" matrix
    b.set(1, 1, 7.0)?;
    b.set(2, 1, 3.0)?;
    println!("\t\tMatrix B:\n{b}");

    // correct answer
    let mut x_ans = Matrix::new(2, 1);
    x_ans.set(1, 1, 13.0 / 37.0)?;
    x_ans.set(2, 1, 23.0 / 37.0)?;
    println!("\t\tAnswer:\n{x_ans}");

    // Attempt to solve the equation.
    let x = a.inverse()?.mul(&b)?;
    Ok(is_approx_eq_matrix(&x, &x_ans, DEFAULT_THRESHOLD))
}

/// Solves the same system as TEST03, with complications: every matrix
/// starts at the wrong size and is resized before use, `A` is filled
/// through a clone of a donor matrix (which is trashed afterwards to
/// prove the copy was deep), and `B` starts life as a row vector that
/// is transposed into a column vector.
fn solve_equation_four() -> Result<bool, MatrixError> {
    println!("TEST04: Solve a system of equations in a contrived way.");

    // right-hand side
    let mut a = Matrix::new(1, 1); // coefficient matrix
    a.resize(2, 2)?;

    let mut a_vals = Matrix::new(2, 2); // separate matrix with the desired values
    a_vals.set(1, 1, 4.0)?;
    a_vals.set(1, 2, 9.0)?;
    a_vals.set(2, 1, 5.0)?;
    a_vals.set(2, 2, 2.0)?;

    a.clone_from(&a_vals);
    println!("\t\tMatrix A:\n{a}");

    // If the clone did what it was supposed to, this cannot affect `a`.
    let (rows, cols) = a_vals.size()?;
    for row in 1..=rows {
        for col in 1..=cols {
            a_vals.set(row, col, 9001.0)?;
        }
    }

    // left-hand side
    let mut b = Matrix::new(1, 2); // "other-side" matrix, as a row vector
    b.set(1, 1, 7.0)?;
    b.set(1, 2, 3.0)?;

    let b = b.transpose()?; // flip it into a column vector
    println!("\t\tMatrix B:\n{b}");

    // correct answer
    let mut x_ans = Matrix::new(2, 1);
    x_ans.set(1, 1, 13.0 / 37.0)?;
    x_ans.set(2, 1, 23.0 / 37.0)?;
    println!("\t\tAnswer:\n{x_ans}");

    // Attempt to solve the equation.
    let x = a.inverse()?.mul(&b)?;
    Ok(is_approx_eq_matrix(&x, &x_ans, DEFAULT_THRESHOLD))
}
