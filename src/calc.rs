// src/calc.rs
//! Small numeric helpers used by the `calc` subcommand.

use tracing::warn;

/// Threshold at which the squared ratio is reduced with a square root.
const SQRT_THRESHOLD: f64 = 10.0;

/// Evaluate `x² / y` with a couple of branches on the result.
///
/// - `x > 0` and `y != 0`: returns `sqrt(x²/y)` when that ratio is at least
///   10, otherwise twice the ratio.
/// - `x <= 0` or `y == 0`: logs a warning and returns `0.0`.
/// - anything else returns `-1.0`. Both comparisons are false only when an
///   input is NaN.
pub fn calculate_complex_expression(x: f64, y: f64) -> f64 {
    if x > 0.0 && y != 0.0 {
        let result = x.powi(2) / y;
        if result >= SQRT_THRESHOLD {
            result.sqrt()
        } else {
            result * 2.0
        }
    } else if x <= 0.0 || y == 0.0 {
        warn!(x, y, "Invalid input: x must be positive and y non-zero");
        0.0
    } else {
        -1.0
    }
}

/// Double every even value, keeping input order.
pub fn process_data(values: &[i64]) -> Vec<i64> {
    values.iter().filter(|v| *v % 2 == 0).map(|v| v * 2).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    /// Writer that appends formatted log lines to a shared buffer
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    /// Run `f` with a WARN-level subscriber and return what it logged
    fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .finish();

        let result = tracing::subscriber::with_default(subscriber, f);
        (result, buffer.contents())
    }

    #[test]
    fn test_process_data_doubles_evens() {
        assert_eq!(process_data(&[1, 2, 3, 4, 5, 6]), vec![4, 8, 12]);
    }

    #[test]
    fn test_process_data_keeps_order_and_negatives() {
        assert_eq!(process_data(&[6, -2, 7, 0]), vec![12, -4, 0]);
        assert!(process_data(&Vec::new()).is_empty());
        assert!(process_data(&[1, 3, 5]).is_empty());
    }

    #[test]
    fn test_large_ratio_takes_square_root() {
        // 25 / 2.5 = 10, exactly on the threshold
        let value = calculate_complex_expression(5.0, 2.5);
        assert!((value - 10.0_f64.sqrt()).abs() < 1e-12);

        // 25 / 2 = 12.5
        let value = calculate_complex_expression(5.0, 2.0);
        assert!((value - 12.5_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_small_ratio_is_doubled() {
        // 4 / 4 = 1
        assert_eq!(calculate_complex_expression(2.0, 4.0), 2.0);
        // negative y keeps the ratio below the threshold
        assert_eq!(calculate_complex_expression(3.0, -1.0), -18.0);
    }

    #[test]
    fn test_invalid_inputs_return_zero() {
        assert_eq!(calculate_complex_expression(-1.0, 0.0), 0.0);
        assert_eq!(calculate_complex_expression(0.0, 5.0), 0.0);
        assert_eq!(calculate_complex_expression(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_invalid_inputs_warn_once() {
        let (value, logs) = capture_warnings(|| calculate_complex_expression(-1.0, 0.0));
        assert_eq!(value, 0.0);
        assert_eq!(logs.matches("WARN").count(), 1, "logs: {}", logs);
        assert!(logs.contains("Invalid input"));
    }

    #[test]
    fn test_valid_inputs_do_not_warn() {
        let (value, logs) = capture_warnings(|| calculate_complex_expression(5.0, 2.5));
        assert!((value - 10.0_f64.sqrt()).abs() < 1e-12);
        assert!(logs.is_empty(), "unexpected logs: {}", logs);
    }

    #[test]
    fn test_nan_input_falls_through() {
        assert_eq!(calculate_complex_expression(f64::NAN, 1.0), -1.0);
        // NaN y passes the first guard and poisons the ratio
        assert!(calculate_complex_expression(1.0, f64::NAN).is_nan());
    }
}
