use crate::constants::{
    DEFAULT_FILE_NAMES, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_TOKENIZER,
    FILE_NAME_SEPARATOR, FILE_NAMES_KEY, INPUT_PATH_KEY, OUTPUT_PATH_KEY, TOKENIZER_KEY,
};
use crate::tokenizer::TokenizerMode;
use std::path::PathBuf;

/// Settings for one batch run, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Processing order; duplicates are kept.
    pub file_names: Vec<String>,
    pub tokenizer: TokenizerMode,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Resolve the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the configuration from any key/value source, falling back to
    /// the defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        Config {
            input_path: PathBuf::from(get(INPUT_PATH_KEY, DEFAULT_INPUT_PATH)),
            output_path: PathBuf::from(get(OUTPUT_PATH_KEY, DEFAULT_OUTPUT_PATH)),
            file_names: parse_file_names(&get(FILE_NAMES_KEY, DEFAULT_FILE_NAMES)),
            tokenizer: TokenizerMode::parse(&get(TOKENIZER_KEY, DEFAULT_TOKENIZER)),
        }
    }
}

/// Load the configuration from environment variables.
pub fn load_configuration() -> Config {
    Config::from_env()
}

/// Split a comma-separated list, trimming each entry. Empty entries survive.
pub fn parse_file_names(raw: &str) -> Vec<String> {
    raw.split(FILE_NAME_SEPARATOR)
        .map(|name| name.trim().to_string())
        .collect()
}
