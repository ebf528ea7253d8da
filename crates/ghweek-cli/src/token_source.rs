use std::path::Path;

use anyhow::{bail, Context, Result};

/// Reads the access token from `token_file`, dropping one trailing newline.
pub(crate) fn read_token_file(token_file: &Path) -> Result<String> {
    let raw = std::fs::read_to_string(token_file)
        .with_context(|| format!("unable to read token file '{}'", token_file.display()))?;
    let token = raw
        .strip_suffix('\n')
        .map(|value| value.strip_suffix('\r').unwrap_or(value))
        .unwrap_or(&raw);
    Ok(token.to_string())
}

/// Picks the token from the file when one is configured, else the inline value.
pub(crate) fn resolve_token(token_file: Option<&Path>, token: Option<&str>) -> Result<String> {
    if let Some(path) = token_file {
        return read_token_file(path);
    }
    match token.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => bail!("missing GitHub token: pass --token-file or set GITHUB_TOKEN"),
    }
}
