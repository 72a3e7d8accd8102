//! Run log generation.
//!
//! Writes a plain-text record of the run into the destination root:
//! the parameters used, the final counters, and any per-file errors or
//! warnings.

use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

use crate::config::{RunConfig, MEBIBYTE};
use crate::report::RunStats;
use crate::tui::format_size;

/// Writes `stamp.log` into the destination root and returns its path.
pub async fn write_run_log(
    dest: &Path,
    config: &RunConfig,
    stats: &RunStats,
) -> color_eyre::Result<PathBuf> {
    let log_path = dest.join("stamp.log");
    let mut file = tokio::fs::File::create(&log_path).await?;

    let mut content = String::new();
    content.push_str("STAMP RUN LOG\n");
    content.push_str(&"═".repeat(70));
    content.push_str("\n\n");

    content.push_str(&format!(
        "Timestamp: {}\n\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    ));

    content.push_str("PARAMETERS\n");
    content.push_str(&"─".repeat(70));
    content.push('\n');
    content.push_str(&format!("Source: {}\n", config.source.display()));
    content.push_str(&format!("Destination: {}\n", config.dest.display()));
    content.push_str(&format!("Extension filter: {}\n", config.extension));
    content.push_str(&format!("Overwrite: {}\n", config.overwrite));
    content.push_str(&format!("Recursive: {}\n", config.recursive));
    content.push_str(&format!(
        "Buffer size: {} MiB\n",
        config.buffer_size / MEBIBYTE
    ));
    content.push_str(&format!("Preserve times: {}\n\n", config.preserve_times));

    content.push_str("RESULTS\n");
    content.push_str(&"─".repeat(70));
    content.push('\n');
    content.push_str(&format!("Files copied: {}\n", stats.copied));
    content.push_str(&format!("Files skipped: {}\n", stats.skipped));
    content.push_str(&format!("Files overwritten: {}\n", stats.overwritten));
    content.push_str(&format!("Errors: {}\n", stats.errored));
    content.push_str(&format!(
        "Data copied: {}\n",
        format_size(stats.bytes_copied)
    ));

    if !stats.errors.is_empty() {
        content.push_str("\nFILE ERRORS\n");
        content.push_str(&"─".repeat(70));
        content.push('\n');
        for error in &stats.errors {
            content.push_str(&format!("{}\n", error));
        }
    }

    if !stats.warnings.is_empty() {
        content.push_str("\nWARNINGS\n");
        content.push_str(&"─".repeat(70));
        content.push('\n');
        for warning in &stats.warnings {
            content.push_str(&format!("{}\n", warning));
        }
    }

    content.push('\n');
    content.push_str(&"═".repeat(70));
    content.push_str("\nEnd of log\n");

    file.write_all(content.as_bytes()).await?;
    file.flush().await?;
    Ok(log_path)
}
