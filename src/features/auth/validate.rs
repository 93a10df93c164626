//! Pre-flight form validation. Failures produce per-field messages and
//! block submission; nothing here touches the network.

/// Minimum password length enforced at registration for early UX feedback.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validation message for an email field, if any.
pub fn email_error(email: &str) -> Option<String> {
    if email.is_empty() {
        return Some("Email is required".to_string());
    }
    if !is_valid_email(email) {
        return Some("Email is invalid".to_string());
    }
    None
}

/// Basic `local@host.tld` shape: non-empty pieces, a dot in the domain,
/// no whitespace. Deliverability is the server's problem.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty() && !host.is_empty() && !tld.is_empty()
}

/// Strips non-digits and truncates to six characters. Applied on every
/// keystroke of the OTP field, so the submit-time check only has to count.
pub fn sanitize_otp(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(6).collect()
}

/// Validation message for the OTP code field, if any.
pub fn otp_error(code: &str) -> Option<String> {
    if code.is_empty() {
        return Some("OTP code is required".to_string());
    }
    if code.len() != 6 || !code.chars().all(|ch| ch.is_ascii_digit()) {
        return Some("OTP code must be 6 digits".to_string());
    }
    None
}

/// Validation message for a login password field, if any.
pub fn password_error(password: &str) -> Option<String> {
    if password.trim().is_empty() {
        return Some("Password is required".to_string());
    }
    None
}

/// Registration password rules: required plus a minimum length.
pub fn new_password_error(password: &str) -> Option<String> {
    if password.trim().is_empty() {
        return Some("Password is required".to_string());
    }
    if password.len() < MIN_PASSWORD_LENGTH {
        return Some(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        ));
    }
    None
}

/// Confirmation field must be present and match the password.
pub fn confirm_password_error(password: &str, confirm: &str) -> Option<String> {
    if confirm.is_empty() {
        return Some("Please confirm your password".to_string());
    }
    if password != confirm {
        return Some("Passwords do not match".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_emails_are_rejected() {
        for email in [
            "",
            "plainaddress",
            "@nodomain.com",
            "user@",
            "user@nodot",
            "user@.com",
            "user@host.",
            "two words@host.com",
        ] {
            assert!(email_error(email).is_some(), "accepted: {email:?}");
        }
    }

    #[test]
    fn reasonable_emails_are_accepted() {
        for email in ["user@test.com", "a.b@sub.domain.org", "x@y.io"] {
            assert!(email_error(email).is_none(), "rejected: {email:?}");
        }
    }

    #[test]
    fn sanitize_otp_strips_non_digits() {
        assert_eq!(sanitize_otp("12A3456"), "123456");
        assert_eq!(sanitize_otp("  1 2-3"), "123");
        assert_eq!(sanitize_otp("abc"), "");
    }

    #[test]
    fn sanitize_otp_caps_at_six_digits() {
        assert_eq!(sanitize_otp("1234567890"), "123456");
    }

    #[test]
    fn otp_must_be_exactly_six_digits() {
        assert!(otp_error("").is_some());
        assert!(otp_error("12345").is_some());
        assert!(otp_error("1234567").is_some());
        assert!(otp_error("12345a").is_some());
        assert!(otp_error("123456").is_none());
    }

    #[test]
    fn registration_password_rules() {
        assert!(new_password_error("").is_some());
        assert!(new_password_error("short").is_some());
        assert!(new_password_error("longenough").is_none());
    }

    #[test]
    fn confirmation_must_match() {
        assert!(confirm_password_error("secret12", "").is_some());
        assert!(confirm_password_error("secret12", "secret13").is_some());
        assert!(confirm_password_error("secret12", "secret12").is_none());
    }

    #[test]
    fn login_password_must_be_present() {
        assert!(password_error("   ").is_some());
        assert!(password_error("secret").is_none());
    }
}
