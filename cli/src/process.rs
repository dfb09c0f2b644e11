use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use shellmark::{AnnotateReport, Config, Highlighter, UnmarkReport};
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot find file '{}'", .0.display())]
    NotFound(PathBuf),

    #[error("cannot read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("cannot write to standard output: {0}")]
    Stdout(#[source] io::Error),

    #[error("invalid config '{}': {source}", .path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Load settings from `path`, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<Config, CliError> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = read_document(path)?;
    let config: Config = toml::from_str(&text).map_err(|source| CliError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(?config, "loaded config");
    Ok(config)
}

pub fn read_document(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => CliError::NotFound(path.to_path_buf()),
        _ => CliError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}

pub fn write_document(path: &Path, text: &str) -> Result<(), CliError> {
    fs::write(path, text).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Highlight `source` and write the result to `output` unless `dry_run`.
pub fn annotate_document(
    highlighter: &Highlighter,
    source: &str,
    file_id: usize,
    output: &Path,
    dry_run: bool,
) -> Result<AnnotateReport, CliError> {
    let (text, report) = highlighter.annotate(source, file_id);
    info!(
        found = report.found,
        processed = report.processed.len(),
        skipped = report.skipped.len(),
        "annotated document"
    );
    if !report.changed() {
        debug!("every shell block is already highlighted");
    }
    if dry_run {
        info!(output = %output.display(), "dry run, not writing");
    } else {
        write_document(output, &text)?;
    }
    Ok(report)
}

/// Strip all shell block markup from `path` in place.
pub fn unmark_file(highlighter: &Highlighter, path: &Path) -> Result<UnmarkReport, CliError> {
    let source = read_document(path)?;
    let (text, report) = highlighter.unmark(&source);
    info!(
        found = report.found,
        tags_removed = report.tags_removed,
        "unmarked document"
    );
    write_document(path, &text)?;
    Ok(report)
}
