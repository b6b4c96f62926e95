//! Run orchestration: load, filter, then upload or print.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::env;
use tracing::{debug, info, warn};

use crate::app_deps::{PromptInterface, RealPrompt, RealSpaceApiFactory, SpaceApi, SpaceApiFactory};
use crate::cli::{Cli, Commands};
use crate::config::{Config, Overrides, Settings};
use crate::error::format_error_chain;
use crate::errors::ValidationError;
use crate::{constants, envfile, filter, paths, report, validation};

/// Outcome of uploading one secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    pub secret_name: String,
    pub space: String,
    pub success: bool,
    pub error: Option<String>,
}

impl UploadResult {
    pub fn new_success(secret_name: String, space: String) -> Self {
        Self {
            secret_name,
            space,
            success: true,
            error: None,
        }
    }

    pub fn new_failure(secret_name: String, space: String, error: String) -> Self {
        Self {
            secret_name,
            space,
            success: false,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn is_failure(&self) -> bool {
        !self.success
    }
}

pub struct App;

impl App {
    /// Entry point used by the binary.
    pub async fn run(cli: Cli) -> Result<()> {
        let command = cli.command.unwrap_or_default();
        let config = Config::discover(cli.config.as_deref())?;
        paths::load_env_file(&config.source_env_file(cli.env_file.as_deref()));

        let settings = config.resolve(Overrides {
            env_file: cli.env_file,
            space: cli.space,
            endpoint: env::var(constants::api::ENDPOINT_ENV).ok(),
            command,
        })?;
        debug!(
            env_file = %settings.env_file.display(),
            space = %settings.space_id,
            endpoint = %settings.endpoint,
            "resolved settings"
        );

        match command {
            Commands::Upload => {
                let env_token = env::var(constants::api::TOKEN_ENV).ok();
                Self::upload_with_deps(&RealSpaceApiFactory, &RealPrompt, env_token, &settings)
                    .await
                    .map(|_| ())
            }
            Commands::Instructions => Self::instructions(&settings),
        }
    }

    /// Read the source file and keep the allow-listed, non-placeholder secrets.
    pub fn collect_secrets(settings: &Settings) -> Result<BTreeMap<String, String>> {
        let entries = envfile::load(&settings.env_file).context("Failed to load secrets")?;
        let secrets = filter::collect_secrets(&entries, &settings.policy);
        info!(
            parsed = entries.len(),
            retained = secrets.len(),
            "filtered env file"
        );
        Ok(secrets)
    }

    /// Use the token from the environment, or ask for one.
    ///
    /// An empty environment value counts as unset.
    pub fn resolve_token(env_token: Option<String>, prompt: &dyn PromptInterface) -> Result<String> {
        let token = match env_token.map(|t| t.trim().to_string()) {
            Some(token) if !token.is_empty() => token,
            _ => prompt.prompt_token()?,
        };

        if token.is_empty() {
            return Err(ValidationError::MissingToken.into());
        }
        validation::validate_token(&token)?;
        Ok(token)
    }

    /// Upload every retained secret to the configured Space.
    pub async fn upload_with_deps(
        factory: &dyn SpaceApiFactory,
        prompt: &dyn PromptInterface,
        env_token: Option<String>,
        settings: &Settings,
    ) -> Result<Vec<UploadResult>> {
        let secrets = Self::collect_secrets(settings)?;
        report::print_found(secrets.len());

        let token = Self::resolve_token(env_token, prompt)?;
        let api = factory
            .create(token, settings.endpoint.clone())
            .context("Failed to create Hub client")?;

        report::print_upload_header(&settings.space_id);
        let results = Self::upload_secrets(api.as_ref(), &settings.space_id, &secrets).await;

        let (success, failure) = Self::count_results(&results);
        report::print_summary(success, failure, &settings.settings_url());
        Ok(results)
    }

    /// Upload secrets one at a time, in key order.
    ///
    /// A failed key is recorded and the remaining keys are still attempted.
    pub async fn upload_secrets(
        api: &dyn SpaceApi,
        space_id: &str,
        secrets: &BTreeMap<String, String>,
    ) -> Vec<UploadResult> {
        let mut results = Vec::with_capacity(secrets.len());

        for (key, value) in secrets {
            match api.set_secret(space_id, key, value).await {
                Ok(()) => {
                    report::print_upload_success(key, value);
                    results.push(UploadResult::new_success(key.clone(), space_id.to_string()));
                }
                Err(e) => {
                    let message = format_error_chain(&e);
                    warn!(key = %key, error = %message, "failed to set secret");
                    report::print_upload_failure(key, &message);
                    results.push(UploadResult::new_failure(
                        key.clone(),
                        space_id.to_string(),
                        message,
                    ));
                }
            }
        }

        results
    }

    /// Print the secrets for manual entry. No remote calls are made.
    pub fn instructions(settings: &Settings) -> Result<()> {
        let secrets = Self::collect_secrets(settings)?;
        report::print_instructions(&secrets, &settings.settings_url());
        Ok(())
    }

    /// Count successful and failed uploads.
    pub fn count_results(results: &[UploadResult]) -> (usize, usize) {
        let success = results.iter().filter(|r| r.is_success()).count();
        (success, results.len() - success)
    }
}
