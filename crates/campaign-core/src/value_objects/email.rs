//! Email normalization
//!
//! Emails are unique case-insensitively; they are lowercased once at every
//! write/lookup boundary so the store only ever sees the canonical form.

/// Normalize an email address to its canonical stored form
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("Jane.Roe@Example.COM"), "jane.roe@example.com");
        assert_eq!(normalize_email("  jane@example.com "), "jane@example.com");
    }
}
