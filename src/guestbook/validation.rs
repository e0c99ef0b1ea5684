use super::error::ValidationError;

/// Maximum author length, in characters, after trimming.
pub const MAX_AUTHOR_LEN: usize = 20;

/// Maximum body length, in characters, after trimming.
pub const MAX_BODY_LEN: usize = 200;

/// Trim and check the author field.
pub fn validate_author(raw: &str) -> Result<&str, ValidationError> {
    let author = raw.trim();
    if author.is_empty() {
        return Err(ValidationError::MissingField);
    }
    let length = author.chars().count();
    if length > MAX_AUTHOR_LEN {
        return Err(ValidationError::AuthorTooLong { length });
    }
    Ok(author)
}

/// Trim and check the body field. Embedded line breaks are allowed.
pub fn validate_body(raw: &str) -> Result<&str, ValidationError> {
    let body = raw.trim();
    if body.is_empty() {
        return Err(ValidationError::MissingField);
    }
    let length = body.chars().count();
    if length > MAX_BODY_LEN {
        return Err(ValidationError::BodyTooLong { length });
    }
    Ok(body)
}

/// Validate a submission. Emptiness is checked across both fields first, so a
/// blank author paired with a blank body reports one missing-field error.
pub fn validate<'a>(
    raw_author: &'a str,
    raw_body: &'a str,
) -> Result<(&'a str, &'a str), ValidationError> {
    if raw_author.trim().is_empty() || raw_body.trim().is_empty() {
        return Err(ValidationError::MissingField);
    }
    let author = validate_author(raw_author)?;
    let body = validate_body(raw_body)?;
    Ok((author, body))
}
