//! Decimal rounding for published results.
//!
//! The two model outputs are reported at fixed precisions (caliper to 4
//! decimal places, length to 1), so rounding lives here rather than being
//! scattered through formatting code.

/// Round `value` to `decimals` decimal places, half away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_requested_precision() {
        assert_eq!(round_to(0.50265, 4), 0.5027);
        assert_eq!(round_to(1234.5678, 1), 1234.6);
        assert_eq!(round_to(-2.4445, 3), -2.445);
    }

    #[test]
    fn zero_decimals_rounds_to_integer() {
        assert_eq!(round_to(2.5, 0), 3.0);
    }
}
