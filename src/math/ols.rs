//! Closed-form ordinary least squares for a single predictor.
//!
//! The roll model is linear in one transformed variable (diameter squared),
//! so the regression never needs a matrix solver. The textbook closed form
//! is exact here:
//!
//! ```text
//! slope     = Σ(x - x̄)(y - ȳ) / Σ(x - x̄)²
//! intercept = ȳ - slope * x̄
//! r²        = 1 - SS_res / SS_tot
//! ```
//!
//! Degeneracy is a caller-visible condition, not a panic: when the predictor
//! has zero variance the slope formula divides by zero and we return `None`.

use crate::domain::LinearFit;

/// Fit `y = slope * x + intercept` by unweighted OLS.
///
/// Returns `None` when the predictor has zero variance (all `x` identical,
/// including the single-point case) or when the inputs are empty/mismatched.
pub fn fit_line(xs: &[f64], ys: &[f64]) -> Option<LinearFit> {
    if xs.is_empty() || xs.len() != ys.len() {
        return None;
    }

    let n = xs.len() as f64;
    let x_mean = xs.iter().sum::<f64>() / n;
    let y_mean = ys.iter().sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - x_mean;
        sxx += dx * dx;
        sxy += dx * (y - y_mean);
    }

    if sxx == 0.0 || !sxx.is_finite() || !sxy.is_finite() {
        return None;
    }

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;

    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let e = y - (slope * x + intercept);
        ss_res += e * e;
        let d = y - y_mean;
        ss_tot += d * d;
    }

    // Constant y with a varying predictor is an exact horizontal line:
    // SS_res and SS_tot are both zero, so report a perfect fit.
    let r_squared = if ss_tot == 0.0 {
        1.0
    } else {
        1.0 - ss_res / ss_tot
    };

    Some(LinearFit {
        slope,
        intercept,
        r_squared,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_point_fit_is_exact() {
        // Any line through two distinct x-values is an exact fit.
        let xs = [0.0016, 0.0144];
        let ys = [0.0, 20.0];

        let fit = fit_line(&xs, &ys).unwrap();
        let expected_slope = 20.0 / (0.0144 - 0.0016);
        assert!((fit.slope - expected_slope).abs() < 1e-6);
        assert!((fit.r_squared - 1.0).abs() < 1e-12);
    }

    #[test]
    fn recovers_known_line_with_residuals() {
        // y = 3x + 1 with symmetric noise that averages out.
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [1.1, 3.9, 7.1, 9.9];

        let fit = fit_line(&xs, &ys).unwrap();
        assert!((fit.slope - 2.96).abs() < 1e-9);
        assert!((fit.intercept - 1.06).abs() < 1e-9);
        assert!(fit.r_squared > 0.99 && fit.r_squared <= 1.0);
    }

    #[test]
    fn zero_variance_predictor_is_degenerate() {
        let xs = [2.0, 2.0, 2.0];
        let ys = [1.0, 2.0, 3.0];
        assert!(fit_line(&xs, &ys).is_none());
    }

    #[test]
    fn single_point_is_degenerate() {
        assert!(fit_line(&[1.0], &[1.0]).is_none());
    }

    #[test]
    fn constant_target_is_perfect_horizontal_line() {
        let xs = [1.0, 2.0, 3.0];
        let ys = [5.0, 5.0, 5.0];

        let fit = fit_line(&xs, &ys).unwrap();
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.intercept, 5.0);
        assert_eq!(fit.r_squared, 1.0);
    }
}
