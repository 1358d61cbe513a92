//! File boundary layer.
//!
//! The kernel itself only consumes and produces in-memory values; this
//! module is the one place that touches file formats. Users arrive as
//! a JSON array, queries as headerless two-column CSV rows, and
//! results leave as a JSON array with empty paths omitted.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::types::{PathQuery, PathResult, UserRecord};

/// Error type for boundary-layer operations.
///
/// Malformed input is caught here, before anything reaches the core;
/// the core itself assumes validated records and has no error type.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// File could not be opened or created.
    #[error("unable to access {path}: {source}")]
    File {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// User file was not valid JSON for a list of user records.
    #[error("unable to decode users from {path}: {source}")]
    MalformedUsers {
        /// Path that failed.
        path: PathBuf,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
    /// Query file was not valid two-column CSV.
    #[error("unable to parse queries from {path}: {source}")]
    MalformedQueries {
        /// Path that failed.
        path: PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },
    /// A record carried an empty email field.
    #[error("empty email in {path}, record {index}")]
    EmptyEmail {
        /// Path the record came from.
        path: PathBuf,
        /// Zero-based record position.
        index: usize,
    },
    /// Results could not be serialized.
    #[error("unable to write results to {path}: {source}")]
    WriteResults {
        /// Path that failed.
        path: PathBuf,
        /// Underlying encode error.
        #[source]
        source: serde_json::Error,
    },
}

fn open(path: &Path) -> Result<File, IoError> {
    File::open(path).map_err(|source| IoError::File {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate user records from a JSON file.
///
/// Every user must carry a non-empty email, as must every subscriber
/// entry; the first violation aborts the load with its position.
pub fn load_users(path: &Path) -> Result<Vec<UserRecord>, IoError> {
    let reader = BufReader::new(open(path)?);
    let users: Vec<UserRecord> =
        serde_json::from_reader(reader).map_err(|source| IoError::MalformedUsers {
            path: path.to_path_buf(),
            source,
        })?;

    for (index, user) in users.iter().enumerate() {
        if user.email.is_empty() || user.subscribers.iter().any(|s| s.email.is_empty()) {
            return Err(IoError::EmptyEmail {
                path: path.to_path_buf(),
                index,
            });
        }
    }

    info!(path = %path.display(), users = users.len(), "loaded user records");
    Ok(users)
}

/// Load path queries from a headerless CSV file.
///
/// Column order is fixed: from-email, to-email.
pub fn load_queries(path: &Path) -> Result<Vec<PathQuery>, IoError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(BufReader::new(open(path)?));

    let mut queries = Vec::new();
    for (index, row) in reader.deserialize::<(String, String)>().enumerate() {
        let (from, to) = row.map_err(|source| IoError::MalformedQueries {
            path: path.to_path_buf(),
            source,
        })?;
        if from.is_empty() || to.is_empty() {
            return Err(IoError::EmptyEmail {
                path: path.to_path_buf(),
                index,
            });
        }
        queries.push(PathQuery::new(from, to));
    }

    info!(path = %path.display(), queries = queries.len(), "loaded query batch");
    Ok(queries)
}

/// Write results as pretty-printed JSON, in batch order.
pub fn write_results(path: &Path, results: &[PathResult]) -> Result<(), IoError> {
    let file = File::create(path).map_err(|source| IoError::File {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::to_writer_pretty(BufWriter::new(file), results).map_err(|source| {
        IoError::WriteResults {
            path: path.to_path_buf(),
            source,
        }
    })?;

    info!(path = %path.display(), results = results.len(), "wrote results");
    Ok(())
}
