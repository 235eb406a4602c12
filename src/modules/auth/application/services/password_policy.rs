// Password strength policy for registration and password change.
//
// Unlike most validators here, this one aggregates every violation it
// finds instead of failing on the first, so the caller can surface the
// full list in one field-keyed response.
use regex::Regex;
use std::sync::OnceLock;

const MIN_LENGTH: usize = 8;
const MAX_LENGTH: usize = 128;

// A short head of the usual leaked-password lists; enough to catch the
// worst offenders without shipping a wordlist file.
const COMMON_PASSWORDS: &[&str] = &[
    "password", "password1", "password123", "12345678", "123456789", "1234567890", "qwerty123",
    "qwertyuiop", "iloveyou", "admin123", "letmein1", "welcome1", "sunshine", "football",
    "princess", "dragon123", "monkey123", "baseball", "superman", "trustno1",
];

fn numeric_only() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+$").expect("numeric regex"))
}

pub struct PasswordPolicy;

impl PasswordPolicy {
    /// Returns every violated rule; empty means the password passes.
    pub fn validate(password: &str, username: &str, email: &str) -> Vec<String> {
        let mut violations = Vec::new();

        if password.len() < MIN_LENGTH {
            violations.push(format!(
                "This password is too short. It must contain at least {} characters.",
                MIN_LENGTH
            ));
        }
        if password.len() > MAX_LENGTH {
            violations.push("This password is too long.".to_string());
        }
        if numeric_only().is_match(password) {
            violations.push("This password is entirely numeric.".to_string());
        }
        if COMMON_PASSWORDS.contains(&password.to_lowercase().as_str()) {
            violations.push("This password is too common.".to_string());
        }
        if Self::too_similar(password, username) {
            violations.push("The password is too similar to the username.".to_string());
        } else if Self::too_similar(password, email.split('@').next().unwrap_or_default()) {
            violations.push("The password is too similar to the email address.".to_string());
        }

        violations
    }

    /// Case-insensitive containment either way, for attributes of
    /// meaningful length.
    fn too_similar(password: &str, attribute: &str) -> bool {
        if attribute.len() < 4 {
            return false;
        }
        let p = password.to_lowercase();
        let a = attribute.to_lowercase();
        p.contains(&a) || a.contains(&p)
    }
}
