use crate::{Error, Result};
use tokio::process::Command;
use tracing::debug;

/// Enumerates installed models by running `ollama list`.
///
/// The first output line is a column header; every remaining line names one
/// model in its first column. Spawn failures and non-zero exits surface as
/// [`Error::ModelList`].
pub async fn list_installed_models() -> Result<Vec<String>> {
    let output = Command::new("ollama")
        .arg("list")
        .output()
        .await
        .map_err(|e| Error::model_list(format!("Failed to run `ollama list`: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::model_list(format!(
            "`ollama list` exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let models = parse_model_table(&stdout);

    debug!("Found {} installed models", models.len());
    Ok(models)
}

/// Extracts the first column from `ollama list` output.
///
/// Skips the header line, takes the text before the first tab on each
/// remaining line, and trims it down to its first whitespace-delimited
/// token. Blank lines are ignored.
pub fn parse_model_table(stdout: &str) -> Vec<String> {
    stdout
        .trim()
        .lines()
        .skip(1)
        .filter_map(|line| {
            line.split('\t')
                .next()
                .and_then(|column| column.split_whitespace().next())
                .map(str::to_string)
        })
        .collect()
}
