/// Compact counter: 50000 -> "50.0K", 1234567 -> "1.2M".
pub fn format_count(value: i64) -> String {
    let v = value as f64;
    if value >= 1_000_000 {
        format!("{:.1}M", v / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", v / 1_000.0)
    } else {
        value.to_string()
    }
}

/// Avatar initials: first letters of the first and last word, otherwise the
/// first two characters. "U" when there is no name.
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    match words.as_slice() {
        [] => "U".to_string(),
        [single] => single.chars().take(2).collect::<String>().to_uppercase(),
        [first, .., last] => first
            .chars()
            .take(1)
            .chain(last.chars().take(1))
            .collect::<String>()
            .to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(50_000), "50.0K");
        assert_eq!(format_count(1_260), "1.3K");
        assert_eq!(format_count(1_500_000), "1.5M");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Maria Elena Popescu"), "MP");
        assert_eq!(initials("ana"), "AN");
        assert_eq!(initials("  "), "U");
        assert_eq!(initials("X"), "X");
    }
}
