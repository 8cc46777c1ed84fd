//! Least-squares solver for small dense regression problems.
//!
//! Columns are optionally scaled to unit norm and the system is reduced by a
//! Householder QR decomposition. The normal equations `X'X b = X'y` are never
//! formed, so the condition number seen by the solver is that of `X`, not its
//! square.

use nalgebra::{DMatrix, DVector};

use crate::common::bass_error::{BassError, Result};

/// Solve `min ||X b - y||` for a tall design matrix `X`.
///
/// Fails with [`BassError::DegenerateData`] if a column has zero norm, if a
/// diagonal entry of `R` is at most `rank_tolerance` times the largest one, or
/// if the solution is not finite.
pub fn solve_least_squares(
    x: &DMatrix<f64>,
    y: &DVector<f64>,
    rank_tolerance: f64,
    scale_columns: bool,
) -> Result<DVector<f64>> {
    let (nrows, ncols) = x.shape();
    if nrows < ncols {
        return Err(BassError::DegenerateData(format!(
            "underdetermined system: {} rows for {} unknowns",
            nrows, ncols
        )));
    }
    if y.len() != nrows {
        return Err(BassError::DegenerateData(format!(
            "response length {} does not match {} design rows",
            y.len(),
            nrows
        )));
    }

    let mut design = x.clone();
    let mut norms = vec![1.0; ncols];
    for (j, norm) in norms.iter_mut().enumerate() {
        let col_norm = design.column(j).norm();
        if !col_norm.is_finite() || col_norm == 0.0 {
            return Err(BassError::DegenerateData(format!(
                "design column {} has zero or non-finite norm",
                j
            )));
        }
        if scale_columns {
            design.column_mut(j).unscale_mut(col_norm);
            *norm = col_norm;
        }
    }

    let qr = design.qr();
    let r = qr.r();
    let q = qr.q();

    let diag_max = r.diagonal().iter().fold(0.0_f64, |acc, d| acc.max(d.abs()));
    for (j, d) in r.diagonal().iter().enumerate() {
        if d.abs() <= rank_tolerance * diag_max {
            return Err(BassError::DegenerateData(format!(
                "design matrix is rank deficient (|R[{j},{j}]| = {:e})",
                d.abs()
            )));
        }
    }

    let qty = q.transpose() * y;
    let mut beta = r
        .solve_upper_triangular(&qty)
        .ok_or_else(|| BassError::DegenerateData("triangular solve failed".to_string()))?;

    for (b, norm) in beta.iter_mut().zip(&norms) {
        *b /= norm;
    }

    if beta.iter().any(|b| !b.is_finite()) {
        return Err(BassError::DegenerateData(
            "least-squares solution is not finite".to_string(),
        ));
    }
    Ok(beta)
}
