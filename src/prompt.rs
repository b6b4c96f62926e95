//! Interactive token prompt.
//!
//! Asks for a Hugging Face token on stdin when `HF_TOKEN` is not set.

use colored::*;
use std::io::{self, BufRead, Write};

use crate::constants;

/// Prompt for a token on the real terminal.
///
/// Returns the trimmed line, which is empty if the user just pressed Enter
/// or stdin was closed.
pub fn prompt_token() -> anyhow::Result<String> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    prompt_token_with(&mut stdin.lock(), &mut stdout)
}

/// Prompt for a token using injected input and output streams.
pub fn prompt_token_with<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<String> {
    writeln!(output)?;
    writeln!(output, "{}", "You need to provide your Hugging Face token.".yellow())?;
    writeln!(
        output,
        "Get it from: {}",
        constants::api::TOKEN_SETTINGS_URL.cyan()
    )?;
    writeln!(output, "Make sure it has 'write' permissions.")?;
    write!(output, "\n{}", "Enter your Hugging Face token: ".bold())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
