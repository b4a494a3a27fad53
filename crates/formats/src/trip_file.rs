use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::trips::{RawTrip, TripRecord};

pub const DEFAULT_INPUT_PATH: &str = "data/trips.json";
pub const DEFAULT_OUTPUT_PATH: &str = "data/trips_recs2.json";

#[derive(Debug)]
pub enum TripFileError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    Encode(serde_json::Error),
}

impl fmt::Display for TripFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripFileError::Io { path, source } => write!(f, "I/O error on {path:?}: {source}"),
            TripFileError::Parse { path, source } => {
                write!(f, "trip document parse error in {path:?}: {source}")
            }
            TripFileError::Encode(err) => write!(f, "trip document encode error: {err}"),
        }
    }
}

impl std::error::Error for TripFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TripFileError::Io { source, .. } => Some(source),
            TripFileError::Parse { source, .. } => Some(source),
            TripFileError::Encode(err) => Some(err),
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, TripFileError> {
    let payload = fs::read_to_string(path).map_err(|source| TripFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&payload).map_err(|source| TripFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the raw input document: an array of trips, each an array of `[x, y]`.
pub fn read_raw_trips(path: impl AsRef<Path>) -> Result<Vec<RawTrip>, TripFileError> {
    read_json(path.as_ref())
}

/// Reads a previously written enriched document.
pub fn read_trip_records(path: impl AsRef<Path>) -> Result<Vec<TripRecord>, TripFileError> {
    read_json(path.as_ref())
}

/// Pretty-prints (two-space indent) `records` into `writer`.
pub fn write_trip_records_to<W: Write>(
    writer: W,
    records: &[TripRecord],
) -> Result<(), serde_json::Error> {
    let mut ser = serde_json::Serializer::pretty(writer);
    records.serialize(&mut ser)
}
