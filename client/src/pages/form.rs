//! Input normalisation shared by the page forms.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

pub(crate) const PASSWORD_MIN: usize = 8;
pub(crate) const PASSWORD_MAX: usize = 128;
pub(crate) const PHONE_MIN: usize = 10;
pub(crate) const PHONE_MAX: usize = 14;
pub(crate) const ID_MAX: usize = 36;

/// Trimmed value when it is non-empty and at most `max` characters.
pub(crate) fn required(value: &str, max: usize) -> Option<String> {
    let trimmed = value.trim();
    let len = trimmed.chars().count();
    (len > 0 && len <= max).then(|| trimmed.to_owned())
}

/// Phone number with optional leading `+` followed by digits only.
pub(crate) fn phone_number(value: &str) -> Option<String> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let len = trimmed.chars().count();
    let valid = (PHONE_MIN..=PHONE_MAX).contains(&len)
        && !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_digit());
    valid.then(|| trimmed.to_owned())
}

/// Passwords are sent untrimmed.
pub(crate) fn password(value: &str) -> Option<String> {
    let len = value.chars().count();
    (PASSWORD_MIN..=PASSWORD_MAX).contains(&len).then(|| value.to_owned())
}

/// Parse a decimal within `[-limit, limit]`.
pub(crate) fn coordinate(value: &str, limit: f64) -> Option<f64> {
    let parsed: f64 = value.trim().parse().ok()?;
    (parsed.is_finite() && parsed.abs() <= limit).then_some(parsed)
}

/// Gateway-issued id: hex digits and dashes only, at most 36 characters.
pub(crate) fn resource_id(value: &str) -> Option<String> {
    let trimmed = value.trim();
    let valid = (1..=ID_MAX).contains(&trimmed.len())
        && trimmed.chars().all(|c| c.is_ascii_hexdigit() || c == '-');
    valid.then(|| trimmed.to_owned())
}

/// Optional field: blank becomes `None`, otherwise the trimmed value.
pub(crate) fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
