use crate::constants::TOKEN_SEPARATOR;
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Create `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))
}

/// Read the whole file as UTF-8 text.
pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// One token per line, no trailing newline.
pub fn join_tokens(tokens: &[String]) -> String {
    tokens.join(TOKEN_SEPARATOR)
}

/// Write the tokens to `path`, replacing any existing file.
pub fn write_tokens(
    path: &Path,
    tokens: &[String],
) -> Result<()> {
    fs::write(path, join_tokens(tokens))
        .with_context(|| format!("failed to write {}", path.display()))
}
