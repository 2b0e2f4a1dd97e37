#[doc = "Converts a backend latency value in microseconds into milliseconds."]
pub fn convert_micros_to_millis(micros: f64) -> f64 {
    micros / 1000.0
}

#[doc = "Formats a microsecond duration as a millisecond string with two decimals, e.g. `12.35ms`."]
pub fn format_micros_as_millis(micros: i64) -> String {
    format!("{:.2}ms", convert_micros_to_millis(micros as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentile_scaling() {
        assert_eq!(convert_micros_to_millis(1500.0), 1.5);
        assert_eq!(convert_micros_to_millis(0.0), 0.0);
    }

    #[test]
    fn test_millis_formatting() {
        assert_eq!(format_micros_as_millis(123456), "123.46ms");
        assert_eq!(format_micros_as_millis(1000), "1.00ms");
        assert_eq!(format_micros_as_millis(0), "0.00ms");
    }
}
