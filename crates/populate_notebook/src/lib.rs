// crates/populate_notebook/src/lib.rs

use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use inject_cell_payload::{inject_cell_payload, InjectError};
use normalize_line_endings::normalize_line_endings;
use provenance_header::build_provenance_header;
use strip_self_references::strip_self_references;
use trim_blank_lines::trim_blank_lines;

mod confirm;
mod notebook_io;

/// Sentinel comment that opens the replaceable region inside a cell.
pub const OPEN_MARKER: &str = "#<CODE>";
/// Sentinel comment that closes the replaceable region.
pub const CLOSE_MARKER: &str = "#</CODE>";
/// Repository stamped into the provenance header of every update.
pub const UPDATE_SCRIPT_URL: &str = "https://github.com/pretoriusdre/populate-synapse-nb";

/// Start of this tool's own defining construct. A source line matching it
/// opens an excluded block during self-reference stripping.
pub const SELF_DEFINITION_MARKER: &str = "pub struct PopulateConfig";
/// Identity tokens of this tool; lines mentioning them are never copied
/// into a notebook.
pub const SELF_REFERENCE_TOKENS: [&str; 2] = ["PopulateConfig", "populate_notebook"];

#[derive(Debug, Error)]
pub enum SyncError {
    /// Bad or missing caller-supplied path.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// Destination is not a structurally valid Synapse notebook.
    #[error("format error: {0}")]
    Format(String),
    /// Read or write failure on either file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<InjectError> for SyncError {
    fn from(err: InjectError) -> Self {
        SyncError::Format(err.to_string())
    }
}

/// How one synchronization run ended.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A marker cell was found and rewritten.
    Updated,
    /// The notebook was re-serialized, but no cell carried the open marker.
    NoMarkerFound,
    /// The user declined the confirmation prompt; the destination is untouched.
    Aborted,
}

/// One source-to-notebook synchronization. Paths are always explicit; the
/// `.json`-sibling convenience default lives in the CLI, not here.
pub struct PopulateConfig {
    pub source_path: PathBuf,
    pub destination_path: PathBuf,
    /// Ask for interactive confirmation before touching the destination.
    pub require_confirmation: bool,
    /// Proceed without the prompt even when confirmation is required.
    pub force: bool,
}

/// Copies the contents of the source file into the marker-delimited cell of
/// the destination notebook.
///
/// The destination is rewritten through a temporary file in the same
/// directory and atomically replaced, so a failed run never leaves a
/// truncated notebook behind.
pub fn populate(config: &PopulateConfig) -> Result<Outcome, SyncError> {
    if !config.source_path.exists() {
        return Err(SyncError::Configuration(format!(
            "a valid source path must be provided: {}",
            config.source_path.display()
        )));
    }
    if !config.destination_path.exists() {
        return Err(SyncError::Configuration(format!(
            "a valid destination path must be provided; this must be an existing Synapse notebook: {}",
            config.destination_path.display()
        )));
    }

    if config.require_confirmation && !config.force {
        if !confirm::confirm_action(&config.source_path, &config.destination_path)? {
            return Ok(Outcome::Aborted);
        }
    }

    let source_text = fs::read_to_string(&config.source_path)?;
    let absolute_source = fs::canonicalize(&config.source_path)?;
    let insertable = build_insertable_lines(&source_text, &absolute_source, Utc::now());

    let document = notebook_io::load_notebook(&config.destination_path)?;
    let injection = inject_cell_payload(&document, &insertable, OPEN_MARKER, CLOSE_MARKER)?;
    notebook_io::save_notebook(&config.destination_path, &injection.document)?;

    Ok(if injection.injected {
        Outcome::Updated
    } else {
        Outcome::NoMarkerFound
    })
}

/// Transforms raw source text into the line sequence ready for splicing:
/// normalize terminators, drop this tool's own definition, trim blank
/// edges, then stamp the provenance header on top.
pub fn build_insertable_lines(
    source_text: &str,
    source_path: &Path,
    updated_at: DateTime<Utc>,
) -> Vec<String> {
    let lines = normalize_line_endings(source_text);
    let lines = strip_self_references(&lines, SELF_DEFINITION_MARKER, &SELF_REFERENCE_TOKENS);
    let payload = trim_blank_lines(&lines);

    let mut insertable = build_provenance_header(source_path, updated_at, UPDATE_SCRIPT_URL);
    insertable.extend(payload);
    insertable
}
