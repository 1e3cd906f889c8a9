//! Trimmed-decimal formatting for LaTeX dimension values

/// Format a number with up to six decimal places, removing trailing zeros
/// and a trailing dot, so `0.100000` becomes `0.1` and `72.000000` becomes
/// `72`.
pub fn format_num(v: f64) -> String {
    let s = format!("{:.6}", v);
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_trailing_zeros() {
        assert_eq!(format_num(0.1), "0.1");
        assert_eq!(format_num(0.25), "0.25");
    }

    #[test]
    fn test_trims_trailing_dot() {
        assert_eq!(format_num(72.0), "72");
        assert_eq!(format_num(0.0), "0");
    }

    #[test]
    fn test_keeps_significant_decimals() {
        assert_eq!(format_num(0.123456), "0.123456");
        assert_eq!(format_num(33.75), "33.75");
    }
}
