use regex::Regex;

use crate::types::BLOOD_TYPES;

pub fn is_valid_email(email: &str) -> bool {
    let email_regex = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap();
    email_regex.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    // Optional leading +, 8-15 digits, spaces and dashes allowed
    let phone_regex = Regex::new(r"^\+?[0-9][0-9 \-]{6,13}[0-9]$").unwrap();
    phone_regex.is_match(phone)
}

pub fn is_valid_blood_type(blood_type: &str) -> bool {
    BLOOD_TYPES.contains(&blood_type)
}

pub fn is_strong_password(password: &str) -> bool {
    // At least 8 characters, contains uppercase, lowercase, number
    if password.len() < 8 {
        return false;
    }

    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_numeric());

    has_upper && has_lower && has_digit
}

pub fn non_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_emails() {
        assert!(is_valid_email("donor@example.com"));
        assert!(is_valid_email("first.last+tag@clinic.org"));
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(!is_valid_email("donor@"));
        assert!(!is_valid_email("no-at-sign.example.com"));
        assert!(!is_valid_email("donor@host"));
    }

    #[test]
    fn phone_allows_prefix_and_separators() {
        assert!(is_valid_phone("+40 721 234 567"));
        assert!(is_valid_phone("0721234567"));
        assert!(!is_valid_phone("12ab34"));
        assert!(!is_valid_phone("123"));
    }

    #[test]
    fn blood_type_must_be_one_of_eight() {
        assert!(is_valid_blood_type("O-"));
        assert!(is_valid_blood_type("AB+"));
        assert!(!is_valid_blood_type("C+"));
        assert!(!is_valid_blood_type("o-"));
    }

    #[test]
    fn password_strength_needs_mixed_classes() {
        assert!(is_strong_password("Donation1"));
        assert!(!is_strong_password("short1A"));
        assert!(!is_strong_password("alllowercase1"));
        assert!(!is_strong_password("NODIGITSHERE"));
    }

    #[test]
    fn blank_detection_trims_whitespace() {
        assert!(non_blank("x"));
        assert!(!non_blank("   "));
        assert!(!non_blank(""));
    }
}
