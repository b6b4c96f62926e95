use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hf-space-secrets")]
#[command(about = "Push allow-listed .env secrets to a Hugging Face Space", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Source .env file (defaults to the configured backend .env)
    #[arg(long, global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Target Space as owner/name
    #[arg(long, global = true, value_name = "OWNER/NAME")]
    pub space: Option<String>,

    /// Config file to use instead of the lookup path
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Upload the secrets through the Hub API (default)
    #[default]
    Upload,
    /// Print the secrets for manual entry in the Space settings page
    Instructions,
}
