/// Running sum of a sequence, `out[i] = sum(values[0..=i])`
pub fn cumulative_sum(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .scan(0.0, |acc, &v| {
            *acc += v;
            Some(*acc)
        })
        .collect()
}

/// Check if every element is greater than or equal to its predecessor
pub fn is_non_decreasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[1] >= w[0])
}

/// Parse a trimmed numeric field; `None` for anything that is not a finite number
pub fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cumulative_sum() {
        assert_eq!(
            cumulative_sum(&[10.0, 15.0, 20.0, 25.0, 30.0]),
            vec![10.0, 25.0, 45.0, 70.0, 100.0]
        );
        assert!(cumulative_sum(&[]).is_empty());
    }

    #[test]
    fn test_is_non_decreasing() {
        assert!(is_non_decreasing(&[1.0, 1.0, 2.0]));
        assert!(!is_non_decreasing(&[1.0, 0.5]));
        assert!(is_non_decreasing(&[]));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 1.23 "), Some(1.23));
        assert_eq!(parse_number("Sales"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }
}
