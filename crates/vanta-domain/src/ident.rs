//! Username and email validation.

/// Minimum username length.
pub const USERNAME_MIN: usize = 3;
/// Maximum username length.
pub const USERNAME_MAX: usize = 20;

/// Validate a username: 3-20 chars, lowercase alphanumeric + hyphen +
/// underscore. Callers lowercase before validating; uppercase is rejected
/// here so stored usernames are canonical.
pub fn validate_username(username: &str) -> bool {
    if username.len() < USERNAME_MIN || username.len() > USERNAME_MAX {
        return false;
    }
    username
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

/// Minimal email shape check: one `@`, non-empty local part, a dot in the
/// domain, no whitespace anywhere.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Sanitize a provider display name into a username base: lowercase, keep
/// only `[a-z0-9_-]`, truncate to the maximum length. Falls back to `"user"`
/// when nothing survives or the result is too short.
pub fn sanitize_username_base(raw: &str) -> String {
    let base: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == '_')
        .take(USERNAME_MAX)
        .collect();
    if base.len() < USERNAME_MIN {
        "user".to_owned()
    } else {
        base
    }
}

/// Append a numeric suffix to a username base, truncating the base so the
/// result stays within the maximum length.
pub fn suffixed_username(base: &str, n: u32) -> String {
    let suffix = n.to_string();
    let keep = USERNAME_MAX.saturating_sub(suffix.len());
    let mut name: String = base.chars().take(keep).collect();
    name.push_str(&suffix);
    name
}
