//! Directory ingest: convert source messages into staged JSON documents
//!
//! Each source file is read, converted and written to the staging directory
//! as `<unix_seconds.micros>_<control_id>.json`. The source is removed only
//! after the document has been written.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use time::OffsetDateTime;
use tracing::{debug, info, instrument, warn};

use crate::convert::{message_to_map, Naming};
use crate::error::{Error as ConvertError, ErrorKind};
use crate::json::{to_json, JsonStyle};
use crate::value::{Object, Value};

/// File name stem used when a message carries no control id
const UNKNOWN_CONTROL_ID: &str = "unknown";

/// Ingest settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    pub staging_dir: PathBuf,
    pub naming: Naming,
    pub style: JsonStyle,
    /// Leave source files in place after a successful conversion
    pub keep_source: bool,
}

impl PipelineConfig {
    pub fn new(staging_dir: impl Into<PathBuf>) -> Self {
        Self {
            staging_dir: staging_dir.into(),
            naming: Naming::Long,
            style: JsonStyle::default(),
            keep_source: false,
        }
    }
}

/// Per-file ingest failure; the source file is left untouched
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to convert {}: {source}", .path.display())]
    Convert {
        path: PathBuf,
        #[source]
        source: ConvertError,
    },
    #[error("failed to serialize {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: ConvertError,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to remove {}: {source}", .path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PipelineError {
    /// Path of the file the failure relates to
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. }
            | Self::Convert { path, .. }
            | Self::Serialize { path, .. }
            | Self::Write { path, .. }
            | Self::Remove { path, .. } => path,
        }
    }
}

/// A source file that was staged
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Staged {
    pub source: PathBuf,
    pub output: PathBuf,
}

/// Outcome of [`process_dir`]
#[derive(Debug)]
pub struct Report {
    pub started_at: OffsetDateTime,
    pub staged: Vec<Staged>,
    pub failed: Vec<PipelineError>,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Convert one source file into a staged JSON document
///
/// Returns the path of the written document.
#[instrument(skip(path, config), fields(source = %path.display()))]
pub fn process_file(path: &Path, config: &PipelineConfig) -> Result<PathBuf, PipelineError> {
    info!("reading source message");
    let bytes = fs::read(path).map_err(|source| PipelineError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let raw = String::from_utf8(bytes).map_err(|e| PipelineError::Convert {
        path: path.to_path_buf(),
        source: ConvertError::at(ErrorKind::InvalidUtf8, e.utf8_error().valid_up_to(), 0, 0),
    })?;

    let map = message_to_map(&raw, config.naming).map_err(|source| PipelineError::Convert {
        path: path.to_path_buf(),
        source,
    })?;
    let name = staged_file_name(OffsetDateTime::now_utc(), control_id(&map));
    let document =
        to_json(&Value::Object(map), config.style).map_err(|source| PipelineError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;

    let output = config.staging_dir.join(name);
    fs::create_dir_all(&config.staging_dir)
        .and_then(|()| write_new(&output, document.as_bytes()))
        .map_err(|source| PipelineError::Write {
            path: output.clone(),
            source,
        })?;
    info!(output = %output.display(), "wrote staged document");

    if config.keep_source {
        debug!("keeping source message");
    } else {
        fs::remove_file(path).map_err(|source| PipelineError::Remove {
            path: path.to_path_buf(),
            source,
        })?;
        info!("removed source message");
    }
    Ok(output)
}

/// Process every regular file in `dir`, in name order
///
/// Failures are collected in the report and do not stop the run. Only
/// listing the directory itself is fatal.
#[instrument(skip(dir, config), fields(dir = %dir.display()))]
pub fn process_dir(dir: &Path, config: &PipelineConfig) -> Result<Report, PipelineError> {
    let started_at = OffsetDateTime::now_utc();
    let read_err = |source: io::Error| PipelineError::Read {
        path: dir.to_path_buf(),
        source,
    };

    let mut sources = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        if entry.file_type().map_err(read_err)?.is_file() {
            sources.push(entry.path());
        }
    }
    sources.sort();
    debug!(count = sources.len(), "found source messages");

    let mut report = Report {
        started_at,
        staged: Vec::with_capacity(sources.len()),
        failed: Vec::new(),
    };
    for source in sources {
        match process_file(&source, config) {
            Ok(output) => report.staged.push(Staged { source, output }),
            Err(err) => {
                warn!(error = %err, "failed to ingest message");
                report.failed.push(err);
            }
        }
    }

    info!(
        staged = report.staged.len(),
        failed = report.failed.len(),
        "ingest finished"
    );
    Ok(report)
}

/// Write a staged document, refusing to replace an existing one
fn write_new(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(contents)?;
    file.sync_all()
}

/// Control id of a converted message under either naming scheme
fn control_id(map: &Object) -> Option<&str> {
    let msh = match map.get("MSH")? {
        Value::Array(headers) => headers.iter().next()?,
        header => header,
    };
    let msh = msh.as_object()?;
    msh.get("MESSAGE_CONTROL_ID")
        .or_else(|| msh.get("MSH_10"))?
        .as_string()
}

fn staged_file_name(at: OffsetDateTime, control_id: Option<&str>) -> String {
    let id: String = control_id
        .unwrap_or(UNKNOWN_CONTROL_ID)
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!(
        "{}.{:06}_{id}.json",
        at.unix_timestamp(),
        at.microsecond()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_write_new_never_replaces() -> Result<(), io::Error> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("1735689600.000123_MSG0001.json");
        write_new(&path, b"first")?;

        let err = write_new(&path, b"second").err();
        assert_eq!(err.map(|e| e.kind()), Some(io::ErrorKind::AlreadyExists));
        assert_eq!(fs::read_to_string(&path)?, "first");
        Ok(())
    }

    #[test]
    fn test_staged_file_name() {
        let at = datetime!(2025-01-01 00:00:00.000123 UTC);
        assert_eq!(
            staged_file_name(at, Some("MSG0001")),
            "1735689600.000123_MSG0001.json"
        );
        assert_eq!(
            staged_file_name(at, Some("a/b c")),
            "1735689600.000123_a_b_c.json"
        );
        assert_eq!(
            staged_file_name(at, None),
            "1735689600.000123_unknown.json"
        );
    }

    #[test]
    fn test_control_id_under_both_namings() -> Result<(), ConvertError> {
        let raw = "MSH|^~\\&|A|B|C|D|202501010101||ACK|ID7|P|2.5";
        let long = message_to_map(raw, Naming::Long)?;
        assert_eq!(control_id(&long), Some("ID7"));
        let short = message_to_map(raw, Naming::Short)?;
        assert_eq!(control_id(&short), Some("ID7"));
        Ok(())
    }

    #[test]
    fn test_control_id_from_first_of_repeated_headers() -> Result<(), ConvertError> {
        let raw = "MSH|^~\\&|A|B|C|D|1||ACK|FIRST\rMSH|^~\\&|A|B|C|D|1||ACK|SECOND";
        let map = message_to_map(raw, Naming::Long)?;
        assert_eq!(control_id(&map), Some("FIRST"));
        Ok(())
    }
}
