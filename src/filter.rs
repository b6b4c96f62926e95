//! Placeholder rejection and allow-list filtering.
//!
//! Turns parsed entries into the map of secrets that may be promoted to the
//! Space: unfilled template values and test-mode keys are dropped first, then
//! only allow-listed names survive.

use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use crate::constants;
use crate::envfile::RawEntry;

/// Exact names and prefixes a key must match to be uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowListPolicy {
    important_keys: BTreeSet<String>,
    api_prefixes: Vec<String>,
}

impl AllowListPolicy {
    pub fn new<K, P>(important_keys: K, api_prefixes: P) -> Self
    where
        K: IntoIterator,
        K::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            important_keys: important_keys.into_iter().map(Into::into).collect(),
            api_prefixes: api_prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `key` is allowed, by exact name or by prefix.
    pub fn retains(&self, key: &str) -> bool {
        self.important_keys.contains(key)
            || self
                .api_prefixes
                .iter()
                .any(|prefix| key.starts_with(prefix.as_str()))
    }

    /// Built-in policy for uploads through the Hub API.
    pub fn for_upload() -> Self {
        Self::new(
            constants::filter::UPLOAD_IMPORTANT_KEYS.iter().copied(),
            constants::filter::API_PREFIXES.iter().copied(),
        )
    }

    /// Built-in policy for the manual instructions, which also list config values.
    pub fn for_instructions() -> Self {
        Self::new(
            constants::filter::INSTRUCTIONS_IMPORTANT_KEYS.iter().copied(),
            constants::filter::API_PREFIXES.iter().copied(),
        )
    }
}

/// Whether a value is empty, a template placeholder or a test-mode key.
pub fn is_placeholder(value: &str) -> bool {
    value.is_empty()
        || constants::source::PLACEHOLDER_PREFIXES
            .iter()
            .any(|prefix| value.starts_with(prefix))
}

/// Build the key-sorted map of secrets to upload.
///
/// Later entries with the same key overwrite earlier ones.
pub fn collect_secrets(entries: &[RawEntry], policy: &AllowListPolicy) -> BTreeMap<String, String> {
    let mut secrets = BTreeMap::new();
    for entry in entries {
        if is_placeholder(&entry.value) {
            debug!(key = %entry.key, line = entry.line, "skipping placeholder value");
            continue;
        }
        if !policy.retains(&entry.key) {
            debug!(key = %entry.key, line = entry.line, "key not in allow-list");
            continue;
        }
        if secrets
            .insert(entry.key.clone(), entry.value.clone())
            .is_some()
        {
            debug!(key = %entry.key, line = entry.line, "duplicate key, keeping later value");
        }
    }
    secrets
}
