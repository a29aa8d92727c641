// Per-answer validators.
//
// Each validator returns Err with a reason suitable for an inline
// re-prompt; the run is never aborted by a failed answer.

use once_cell::sync::Lazy;
use regex::Regex;

static PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9-]+$").expect("prefix regex"));

// At least two characters, word chars or hyphens, no leading or trailing
// hyphen.
static INDEX_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\w[\w-]*\w$").expect("index name regex"));

static ROLE_ARN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^arn:aws:iam::\d{12}:role/[\w+=,.@/-]+$").expect("role arn regex"));

static KENDRA_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("kendra id regex")
});

pub fn validate_prefix(input: &str) -> Result<(), String> {
    if input.is_empty() {
        return Err("Prefix cannot be empty".to_string());
    }
    if !PREFIX_RE.is_match(input) {
        return Err("Prefix must contain only letters, numbers, and hyphens".to_string());
    }
    Ok(())
}

pub fn validate_index_name(input: &str) -> Result<(), String> {
    if !INDEX_NAME_RE.is_match(input) {
        return Err(
            "Name must be at least 2 characters of letters, numbers, underscores, or hyphens, \
             with no leading or trailing hyphen"
                .to_string(),
        );
    }
    Ok(())
}

/// Empty is allowed; the assembler normalizes it to unset.
pub fn validate_role_arn(input: &str) -> Result<(), String> {
    if input.is_empty() {
        return Ok(());
    }
    if !ROLE_ARN_RE.is_match(input) {
        return Err(
            "Must be an IAM role ARN like arn:aws:iam::123456789012:role/name, or empty"
                .to_string(),
        );
    }
    Ok(())
}

pub fn validate_kendra_id(input: &str) -> Result<(), String> {
    if !KENDRA_ID_RE.is_match(input) {
        return Err("Must be a Kendra index ID (UUID form)".to_string());
    }
    Ok(())
}
