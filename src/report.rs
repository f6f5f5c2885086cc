//! Per-file outcome reporting and run summary.
//!
//! The reporter owns the run's failure flag and counters, so a whole run is
//! driven by one explicit value instead of process-wide state.

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::errors::{Result, ValidationError, WalkError};

/// Output format for validation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// One human-readable line per file (default).
    #[default]
    Text,
    /// A JSON array of file reports, printed when the run finishes.
    Json,
}

/// Outcome of one file, as serialized in JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Path of the validated file, as passed to the validator.
    pub path: String,
    /// `true` if the file passed every check.
    pub valid: bool,
    /// First violation found, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

/// Serialized form of a [`ValidationError`].
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    /// Stable error class (e.g., `"missing_field"`).
    pub kind: &'static str,
    /// Field path, for field-level errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Human-readable message.
    pub message: String,
}

impl From<&ValidationError> for ErrorReport {
    fn from(e: &ValidationError) -> Self {
        Self {
            kind: e.kind(),
            field: e.field().map(str::to_string),
            message: e.to_string(),
        }
    }
}

/// Collects per-file outcomes and writes them to the output streams.
///
/// Successes go to `out`, failures and diagnostics to `err`.
pub struct Reporter<O: Write, E: Write> {
    format: Format,
    out: O,
    err: E,
    files: Vec<FileReport>,
    failed: usize,
    fatal: bool,
}

impl Reporter<io::Stdout, io::Stderr> {
    /// Reporter writing to the process's standard streams.
    #[must_use]
    pub fn stdio(format: Format) -> Self {
        Self::new(format, io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Reporter<O, E> {
    /// Create a reporter writing to the given streams.
    pub fn new(format: Format, out: O, err: E) -> Self {
        Self {
            format,
            out,
            err,
            files: Vec::new(),
            failed: 0,
            fatal: false,
        }
    }

    /// Record the outcome of validating `path`.
    pub fn record(&mut self, path: &Path, outcome: &Result<()>) {
        let shown = path.display().to_string();
        match outcome {
            Ok(()) => {
                debug!(path = %shown, "valid");
                if self.format == Format::Text {
                    let line = format!("✓ {shown} is valid");
                    emit(&mut self.out, &line);
                }
            }
            Err(e) => {
                debug!(path = %shown, kind = e.kind(), error = %e, "invalid");
                self.failed += 1;
                if self.format == Format::Text {
                    let line = format!("ERROR in {shown}: {e}");
                    emit(&mut self.err, &line);
                }
            }
        }
        self.files.push(FileReport {
            path: shown,
            valid: outcome.is_ok(),
            error: outcome.as_ref().err().map(ErrorReport::from),
        });
    }

    /// Record a traversal failure. No further files are expected after this.
    pub fn fatal(&mut self, error: &WalkError) {
        self.fatal = true;
        let line = format!("ERROR walking directory: {error}");
        emit(&mut self.err, &line);
    }

    /// Number of files recorded so far.
    #[must_use]
    pub fn checked(&self) -> usize {
        self.files.len()
    }

    /// Number of recorded files that failed validation.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Returns `true` if nothing failed and the traversal completed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failed == 0 && !self.fatal
    }

    /// Recorded outcomes, in the order they were reported.
    #[must_use]
    pub fn files(&self) -> &[FileReport] {
        &self.files
    }

    /// Write the closing summary and return whether the run passed.
    pub fn finish(&mut self) -> bool {
        let checked = self.checked();
        info!(checked, failed = self.failed, fatal = self.fatal, "run finished");
        match self.format {
            Format::Text if self.fatal => {}
            Format::Text if self.failed == 0 => {
                let line = format!("\n✓ All validations passed! ({})", files_checked(checked));
                emit(&mut self.out, &line);
            }
            Format::Text => {
                let line = format!(
                    "\n✗ Validation failed: {} of {} had errors",
                    self.failed,
                    files_checked_noun(checked)
                );
                emit(&mut self.err, &line);
            }
            Format::Json => match serde_json::to_string_pretty(&self.files) {
                Ok(json) => emit(&mut self.out, &json),
                Err(e) => warn!(error = %e, "failed to serialize report"),
            },
        }
        self.passed()
    }
}

fn files_checked(n: usize) -> String {
    format!("{} checked", files_checked_noun(n))
}

fn files_checked_noun(n: usize) -> String {
    if n == 1 {
        "1 file".to_string()
    } else {
        format!("{n} files")
    }
}

/// Write one line, logging instead of panicking if the stream is closed.
fn emit<W: Write>(stream: &mut W, line: &str) {
    if let Err(e) = writeln!(stream, "{line}") {
        warn!(error = %e, "failed to write report line");
    }
}
