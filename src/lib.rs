//! # Hugging Face Space Secrets CLI
//!
//! A command-line tool that pushes the allow-listed entries of a backend
//! `.env` file to a Hugging Face Space as secrets.
//!
//! This library provides functionality to:
//! - Parse simple `KEY=VALUE` env files
//! - Drop placeholder values and keep only allow-listed keys
//! - Set Space secrets through the Hub API, or print them for manual entry
//! - Mask secret values for console display
//!
//! ## Modules
//!
//! - [`envfile`] - Source `.env` parsing
//! - [`filter`] - Placeholder rejection and allow-list policy
//! - [`mask`] - Value masking for display
//! - [`huggingface`] - Hub API client for Space secrets
//! - [`app`] - Run orchestration
//! - [`config`] - Configuration file parsing and validation
//! - [`paths`] - XDG-compliant path resolution
//! - [`prompt`] - Interactive token prompt
//! - [`report`] - Console output
//! - [`validation`] - Input validation utilities
//! - [`error`] - Error formatting utilities
//! - [`errors`] - Structured error types
//! - [`constants`] - Application constants

pub mod app;
pub mod app_deps;
pub mod cli;
pub mod config;
pub mod constants;
pub mod envfile;
pub mod error;
pub mod errors;
pub mod filter;
pub mod huggingface;
pub mod mask;
pub mod paths;
pub mod prompt;
pub mod report;
pub mod validation;
