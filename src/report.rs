//! Console output for upload progress and manual instructions.
//!
//! The `format_*` functions build plain text so the wording can be checked
//! in tests; the `print_*` functions add color and write to stdout.

use colored::*;
use std::collections::BTreeMap;

use crate::constants::display;
use crate::error::truncate_message;
use crate::mask::{MaskStyle, mask};

fn rule() -> String {
    "=".repeat(display::RULE_WIDTH)
}

pub fn format_found(count: usize) -> String {
    format!("Found {} secrets to upload", count)
}

pub fn format_upload_success(key: &str, value: &str) -> String {
    format!("✅ {}: {}", key, mask(value, MaskStyle::Upload))
}

pub fn format_upload_failure(key: &str, error: &str) -> String {
    format!(
        "❌ {}: Failed - {}",
        key,
        truncate_message(error, display::ERROR_TRUNCATE_CHARS)
    )
}

pub fn format_summary(success: usize, failure: usize) -> String {
    format!("Done! Uploaded {} secrets, {} failed.", success, failure)
}

pub fn print_found(count: usize) {
    println!("{}", format_found(count).bold());
}

pub fn print_upload_header(space_id: &str) {
    println!("\nUploading secrets to {}...", space_id.cyan());
    println!("{}", rule());
}

pub fn print_upload_success(key: &str, value: &str) {
    println!("{}", format_upload_success(key, value).green());
}

pub fn print_upload_failure(key: &str, error: &str) {
    println!("{}", format_upload_failure(key, error).red());
}

/// Build the closing rule, the counts and, if anything changed, the restart reminder.
pub fn format_summary_block(success: usize, failure: usize, settings_url: &str) -> String {
    let mut out = format!("{}\n\n{}\n", rule(), format_summary(success, failure));
    if success > 0 {
        out.push_str("\n⚠️  IMPORTANT: You need to restart your Space for changes to take effect!\n");
        out.push_str(&format!("Go to: {}\n", settings_url));
        out.push_str("Click 'Restart this Space' or 'Factory reboot'\n");
    }
    out
}

pub fn print_summary(success: usize, failure: usize, settings_url: &str) {
    print!("{}", format_summary_block(success, failure, settings_url));
}

/// Build the manual copy-paste instructions.
///
/// Lists masked previews first, then every pair unmasked.
pub fn format_instructions(secrets: &BTreeMap<String, String>, settings_url: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}:\n", format_found(secrets.len())));
    for (key, value) in secrets {
        out.push_str(&format!("  - {}: {}\n", key, mask(value, MaskStyle::Preview)));
    }

    out.push_str(&format!("\n{}\n", rule()));
    out.push_str("SECRETS TO ADD TO HUGGINGFACE SPACE:\n");
    out.push_str(&format!("{}\n", rule()));
    out.push_str(&format!("\nGo to: {}\n", settings_url));
    out.push_str("Click 'Repository secrets' and add each of these:\n\n");

    for (key, value) in secrets {
        out.push_str(&format!("{}={}\n", key, value));
    }
    out
}

pub fn print_instructions(secrets: &BTreeMap<String, String>, settings_url: &str) {
    print!("{}", format_instructions(secrets, settings_url));
}
