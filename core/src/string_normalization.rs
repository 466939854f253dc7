pub const MAX_USERNAME_LEN: usize = 20;

/// Normalizes user input into a username suitable for lookup.
///
/// Surrounding whitespace and a leading `@` are dropped. Returns `None` for
/// input that cannot be a username (empty, too long, or containing anything
/// but ASCII letters, digits and underscores).
pub fn clean_username(input: &str) -> Option<String> {
    let trimmed = input.trim();
    let name = trimmed.strip_prefix('@').unwrap_or(trimmed);

    if name.is_empty() || name.len() > MAX_USERNAME_LEN {
        return None;
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }

    Some(name.to_string())
}
