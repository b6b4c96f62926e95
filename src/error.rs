//! Error formatting utilities.
//!
//! This module provides helper functions for formatting error chains
//! into human-readable messages.

use anyhow::Error;

/// Format an error and its source chain into a detailed error message.
///
/// This function extracts the full error chain from an `anyhow::Error`,
/// joining all error messages with " → " to provide comprehensive error context.
///
/// # Arguments
///
/// * `error` - The error whose chain should be rendered, outermost context first
///
/// # Returns
///
/// A single line with every message in the chain.
///
/// # Example
///
/// ```
/// use hf_space_secrets::error::format_error_chain;
///
/// let err = anyhow::anyhow!("outer error")
///     .context("middle error")
///     .context("inner error");
/// let formatted = format_error_chain(&err);
/// assert_eq!(formatted, "inner error → middle error → outer error");
/// ```
pub fn format_error_chain(error: &Error) -> String {
    error
        .chain()
        .map(|err| err.to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Keep at most `max_chars` characters of an error message.
///
/// Cuts on a char boundary, so multi-byte messages never panic.
///
/// # Arguments
///
/// * `message` - Text to shorten
/// * `max_chars` - Maximum number of Unicode chars to keep
///
/// # Returns
///
/// The first `max_chars` chars of `message`, or all of it when shorter.
pub fn truncate_message(message: &str, max_chars: usize) -> String {
    message.chars().take(max_chars).collect()
}
