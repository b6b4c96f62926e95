//! Application constants for the Hub API, the source file, filtering and masking.
//!
//! This module contains all constant values used throughout the application,
//! including Hugging Face endpoints, the built-in allow-list, and display rules.

/// Hugging Face Hub API constants.
pub mod api {
    /// Default Hub base URL.
    pub const DEFAULT_ENDPOINT: &str = "https://huggingface.co";

    /// Environment variable overriding the Hub base URL.
    pub const ENDPOINT_ENV: &str = "HF_ENDPOINT";

    /// Environment variable holding the bearer token.
    pub const TOKEN_ENV: &str = "HF_TOKEN";

    /// Path template for creating or updating a Space secret.
    pub const SPACE_SECRETS_PATH_TEMPLATE: &str = "/api/spaces/{space_id}/secrets";

    /// Page where users create access tokens.
    pub const TOKEN_SETTINGS_URL: &str = "https://huggingface.co/settings/tokens";
}

/// Target Space constants.
pub mod space {
    /// Space that receives the secrets when nothing else is configured.
    pub const DEFAULT_SPACE_ID: &str = "sharry121/baatcheet";

    /// Repository type of the target.
    pub const REPO_TYPE: &str = "space";

    /// Valid Space id: `owner/name`.
    pub const VALID_SPACE_ID_PATTERN: &str = r"^[A-Za-z0-9._-]+/[A-Za-z0-9._-]+$";
}

/// Source `.env` file constants.
pub mod source {
    /// Built-in location of the backend `.env` file.
    pub const DEFAULT_ENV_FILE: &str = "/Users/muhammadsharjeel/Documents/BaatCheet/backend/.env";

    /// Values starting with any of these are unfilled templates or test-mode keys.
    pub const PLACEHOLDER_PREFIXES: &[&str] = &["your", "sk_test"];
}

/// Built-in allow-list.
pub mod filter {
    /// Keys uploaded by exact name through the Hub API.
    pub const UPLOAD_IMPORTANT_KEYS: &[&str] = &["JWT_SECRET"];

    /// Keys listed by exact name in the manual instructions.
    pub const INSTRUCTIONS_IMPORTANT_KEYS: &[&str] = &[
        "DATABASE_URL",
        "JWT_SECRET",
        "NODE_ENV",
        "CLERK_PUBLISHABLE_KEY",
        "CLERK_SECRET_KEY",
        "DEFAULT_MODEL",
        "MAX_CONTEXT_MESSAGES",
        "MAX_TOKENS",
    ];

    /// Keys retained when they start with one of these.
    pub const API_PREFIXES: &[&str] = &[
        "GROQ_API_KEY",
        "DEEPSEEK_API_KEY",
        "OPENROUTER_API_KEY",
        "HUGGINGFACE_API_KEY",
        "GEMINI_API_KEY",
        "OCR_SPACE_API_KEY",
        "BRAVE_SEARCH_KEY",
        "SERPAPI_KEY",
        "ELEVENLABS_API_KEY",
    ];
}

/// Secret validation constants.
pub mod validation {
    /// Valid secret names: a letter or underscore, then letters, digits, underscores.
    pub const VALID_SECRET_KEY_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";
}

/// Console display constants.
pub mod display {
    /// Upload confirmations show head/tail only above this many chars.
    pub const UPLOAD_MASK_THRESHOLD: usize = 14;
    pub const UPLOAD_MASK_HEAD: usize = 6;

    /// Instruction previews show head/tail only above this many chars.
    pub const PREVIEW_MASK_THRESHOLD: usize = 16;
    pub const PREVIEW_MASK_HEAD: usize = 8;

    /// Characters kept at the end of a long masked value.
    pub const MASK_TAIL: usize = 4;

    /// Characters kept when the value is too short for head and tail.
    pub const SHORT_MASK_HEAD: usize = 4;

    /// Length of error messages printed for a failed upload.
    pub const ERROR_TRUNCATE_CHARS: usize = 50;

    /// Width of the `=` rule around sections.
    pub const RULE_WIDTH: usize = 50;
}

/// Application naming constants.
pub mod app {
    /// Directory name under the XDG config root.
    pub const CONFIG_DIR_NAME: &str = "hf-space-secrets";

    /// Config file name inside the config directory.
    pub const CONFIG_FILE_NAME: &str = "config.toml";

    /// Config file name looked up in the current directory.
    pub const LOCAL_CONFIG_FILE_NAME: &str = "hf-space-secrets.toml";

    /// Environment variable holding the tracing filter.
    pub const LOG_ENV: &str = "HF_SPACE_SECRETS_LOG";
}
