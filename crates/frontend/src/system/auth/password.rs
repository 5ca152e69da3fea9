#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// One point each for: 8+ chars, 12+ chars, mixed case, a digit, a symbol.
    /// `None` for an empty password (no indicator).
    pub fn evaluate(password: &str) -> Option<Self> {
        if password.is_empty() {
            return None;
        }

        let len = password.chars().count();
        let score = [
            len >= 8,
            len >= 12,
            password.chars().any(|c| c.is_ascii_lowercase())
                && password.chars().any(|c| c.is_ascii_uppercase()),
            password.chars().any(|c| c.is_ascii_digit()),
            password.chars().any(|c| !c.is_ascii_alphanumeric()),
        ]
        .iter()
        .filter(|hit| **hit)
        .count();

        Some(match score {
            0..=2 => PasswordStrength::Weak,
            3..=4 => PasswordStrength::Medium,
            _ => PasswordStrength::Strong,
        })
    }

    pub fn class(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "weak",
            PasswordStrength::Medium => "medium",
            PasswordStrength::Strong => "strong",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_levels() {
        assert_eq!(PasswordStrength::evaluate(""), None);
        assert_eq!(PasswordStrength::evaluate("abc"), Some(PasswordStrength::Weak));
        assert_eq!(PasswordStrength::evaluate("abcdefgh1"), Some(PasswordStrength::Weak));
        assert_eq!(PasswordStrength::evaluate("Abcdefgh1"), Some(PasswordStrength::Medium));
        assert_eq!(PasswordStrength::evaluate("Abcdefgh1!"), Some(PasswordStrength::Medium));
        assert_eq!(PasswordStrength::evaluate("Abcdefghijk1!"), Some(PasswordStrength::Strong));
    }

    #[test]
    fn test_non_ascii_counts_as_symbol() {
        // length 8, symbol
        assert_eq!(PasswordStrength::evaluate("parolăăă"), Some(PasswordStrength::Weak));
    }
}
