use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

/// Person-name rule: blank is accepted, otherwise letters only, max 15 chars.
///
/// Blank passing here lets the same predicate serve mandatory and optional
/// fields; mandatory fields are kept non-blank by the record-level rules.
pub fn validate_name(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || (value.chars().all(|c| c.is_alphabetic()) && value.chars().count() <= 15) {
        Ok(())
    } else {
        Err(ValidationError::new("name.invalid"))
    }
}

/// Phone rule: blank, or decimal digits only and max 10 of them.
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || (value.chars().all(|c| c.is_ascii_digit()) && value.len() <= 10) {
        Ok(())
    } else {
        Err(ValidationError::new("phone.invalid"))
    }
}

/// Email rule: blank, or `local@domain.tld` with an alphabetic TLD of 2+ chars.
pub fn validate_email_str(value: &str) -> Result<(), ValidationError> {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@]+@[^@]+\.[A-Za-z]{2,}$").unwrap();
    }
    if value.is_empty() || EMAIL_RE.is_match(value) { Ok(()) } else { Err(ValidationError::new("email.invalid")) }
}

/// Bounded-integer rule: base-10 parse plus inclusive [min, max] check.
/// A value that does not parse is invalid, never a propagated error.
pub fn validate_number_in_range(value: &str, min: i64, max: i64) -> Result<(), ValidationError> {
    match value.parse::<i64>() {
        Ok(n) if n >= min && n <= max => Ok(()),
        _ => Err(ValidationError::new("number.out.of.range")),
    }
}

/// Bounded-length rule: at most `max` characters.
pub fn validate_max_len(value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() <= max { Ok(()) } else { Err(ValidationError::new("text.over.len")) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rule() {
        assert!(validate_name("").is_ok());
        assert!(validate_name("Mario").is_ok());
        assert!(validate_name("Gianmarcantonio").is_ok()); // exactly 15
        assert!(validate_name("Gianmarcantonio1").is_err()); // digit
        assert!(validate_name("Massimilianetto x").is_err()); // space
        assert!(validate_name("Nometroppolungoo").is_err()); // 16 letters
        // isalpha semantics are unicode-aware
        assert!(validate_name("Niccolò").is_ok());
    }

    #[test]
    fn test_phone_rule() {
        assert!(validate_phone("").is_ok());
        assert!(validate_phone("3331234567").is_ok()); // exactly 10
        assert!(validate_phone("33312345678").is_err()); // 11 digits
        assert!(validate_phone("333123456a").is_err());
        assert!(validate_phone("+393331234").is_err()); // no plus prefix
    }

    #[test]
    fn test_email_rule() {
        assert!(validate_email_str("").is_ok());
        assert!(validate_email_str("mario.rossi@example.com").is_ok());
        assert!(validate_email_str("a@b.it").is_ok());
        assert!(validate_email_str("senza-chiocciola.it").is_err());
        assert!(validate_email_str("a@b").is_err()); // no dot in domain
        assert!(validate_email_str("a@b.1x").is_err()); // tld must be alphabetic
    }

    #[test]
    fn test_number_in_range_boundaries() {
        assert!(validate_number_in_range("20", 20, 400).is_ok());
        assert!(validate_number_in_range("19", 20, 400).is_err());
        assert!(validate_number_in_range("400", 20, 400).is_ok());
        assert!(validate_number_in_range("401", 20, 400).is_err());
        assert!(validate_number_in_range("abc", 20, 400).is_err());
        assert!(validate_number_in_range("", 20, 400).is_err());
    }

    #[test]
    fn test_max_len_rule() {
        assert!(validate_max_len("", 300).is_ok());
        assert!(validate_max_len(&"x".repeat(300), 300).is_ok());
        assert!(validate_max_len(&"x".repeat(301), 300).is_err());
        // counted in characters, not bytes
        assert!(validate_max_len(&"è".repeat(300), 300).is_ok());
    }
}
