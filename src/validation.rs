//! Input validation utilities.
//!
//! This module provides validation functions for secret names, Space ids
//! and Hugging Face tokens.

use anyhow::{Context, Result};
use regex::Regex;
use tracing::warn;

use crate::constants;
use crate::errors::ValidationError;

/// Validate a secret key name.
///
/// # Errors
///
/// Returns an error if:
/// - The key is empty
/// - The key contains characters other than letters, digits and underscores
/// - The key starts with a digit
pub fn validate_secret_key(key: &str) -> Result<()> {
    if key.trim().is_empty() {
        return Err(ValidationError::SecretKey("Secret key cannot be empty".to_string()).into());
    }

    let re = Regex::new(constants::validation::VALID_SECRET_KEY_PATTERN)
        .context("Failed to compile validation regex")?;

    if !re.is_match(key) {
        return Err(ValidationError::SecretKey(format!(
            "Secret key can only contain letters, numbers and underscores, and cannot start with a number. Got: '{}'",
            key
        ))
        .into());
    }

    Ok(())
}

/// Validate a Space id of the form `owner/name`.
///
/// # Arguments
///
/// * `space_id` - Space id from the CLI, the config file or the built-in default
///
/// # Errors
///
/// Returns `ValidationError::SpaceId` if:
/// - The id has no `/` or more than one
/// - The owner or name is empty or contains characters other than
///   letters, digits, `.`, `_` and `-`
pub fn validate_space_id(space_id: &str) -> Result<()> {
    let re = Regex::new(constants::space::VALID_SPACE_ID_PATTERN)
        .context("Failed to compile validation regex")?;

    if !re.is_match(space_id) {
        return Err(ValidationError::SpaceId(format!(
            "expected 'owner/name', got '{}'",
            space_id
        ))
        .into());
    }

    Ok(())
}

/// Validate a Hugging Face token.
///
/// Only emptiness is fatal. Tokens without the usual `hf_` prefix are
/// accepted with a warning, since the Hub decides what is valid.
///
/// # Arguments
///
/// * `token` - Token from `HF_TOKEN` or the interactive prompt
///
/// # Errors
///
/// Returns `ValidationError::MissingToken` if the token is empty or only whitespace.
pub fn validate_token(token: &str) -> Result<()> {
    let trimmed = token.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::MissingToken.into());
    }

    if !trimmed.starts_with("hf_") {
        warn!("token does not start with 'hf_'");
    }

    Ok(())
}
