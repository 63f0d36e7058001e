// Format an integer count with thousands separators
pub fn format_count(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let mut count = 0;

    for c in s.chars().rev() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(c);
        count += 1;
    }

    result.chars().rev().collect()
}

// Format a duration in seconds, dropping the fraction when it is whole
pub fn format_seconds(seconds: f64) -> String {
    if seconds.fract() == 0.0 {
        format!("{} seconds", format_count(seconds as u64))
    } else {
        format!("{:.1} seconds", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(20000), "20,000");
        assert_eq!(format_count(40_000_000), "40,000,000");
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(0.0), "0 seconds");
        assert_eq!(format_seconds(3600.0), "3,600 seconds");
        assert_eq!(format_seconds(120.5), "120.5 seconds");
    }
}
