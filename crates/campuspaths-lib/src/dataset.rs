//! Building and path record loading.
//!
//! Campus data lives in two CSV files inside a data directory:
//!
//! - `campus_buildings.csv` with columns `shortName,longName,x,y`
//! - `campus_paths.csv` with columns `x1,y1,x2,y2,distance`
//!
//! Parsing only checks that each field has the right type. Geometric checks
//! happen when the records are wired into a [`CampusMap`](crate::CampusMap).

use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::debug;

use crate::campus::Coordinate;
use crate::error::{Error, Result};

/// File name of the building table inside a data directory.
pub const BUILDINGS_FILE: &str = "campus_buildings.csv";

/// File name of the path table inside a data directory.
pub const PATHS_FILE: &str = "campus_paths.csv";

/// Default data directory when none is configured.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "CAMPUSPATHS_DATA_DIR";

/// One row of the building table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BuildingRecord {
    #[serde(rename = "shortName")]
    pub short_name: String,
    #[serde(rename = "longName")]
    pub long_name: String,
    pub x: f64,
    pub y: f64,
}

impl BuildingRecord {
    pub fn location(&self) -> Coordinate {
        Coordinate::new(self.x, self.y)
    }
}

/// One row of the path table: a walkable segment usable in both directions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PathRecord {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub distance: f64,
}

impl PathRecord {
    pub fn start(&self) -> Coordinate {
        Coordinate::new(self.x1, self.y1)
    }

    pub fn end(&self) -> Coordinate {
        Coordinate::new(self.x2, self.y2)
    }

    /// Describe why the record cannot become a pair of edges, if it cannot.
    pub fn defect(&self) -> Option<String> {
        if ![self.x1, self.y1, self.x2, self.y2]
            .iter()
            .all(|value| value.is_finite())
        {
            return Some("endpoint coordinates must be finite".to_string());
        }
        if !self.distance.is_finite() || self.distance < 0.0 {
            return Some(format!(
                "distance must be a finite, non-negative number (got {})",
                self.distance
            ));
        }
        None
    }
}

/// Resolve the data directory from an explicit override, the environment,
/// or the default.
pub fn resolve_data_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    std::env::var_os(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

/// Load building records from a CSV file.
pub fn load_buildings(path: &Path) -> Result<Vec<BuildingRecord>> {
    let file = fs::File::open(path)?;
    let records = read_buildings(file)?;
    debug!(path = %path.display(), buildings = records.len(), "loaded building records");
    Ok(records)
}

/// Load path records from a CSV file.
pub fn load_paths(path: &Path) -> Result<Vec<PathRecord>> {
    let file = fs::File::open(path)?;
    let records = read_paths(file)?;
    debug!(path = %path.display(), paths = records.len(), "loaded path records");
    Ok(records)
}

/// Parse building records from any reader.
///
/// Short names must be unique ignoring case.
pub fn read_buildings<R: Read>(reader: R) -> Result<Vec<BuildingRecord>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut seen = HashSet::new();
    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        let record: BuildingRecord = row?;
        if record.short_name.is_empty() {
            return Err(Error::DatasetValidation {
                message: format!("building '{}' has an empty short name", record.long_name),
            });
        }
        if !seen.insert(record.short_name.to_uppercase()) {
            return Err(Error::DatasetValidation {
                message: format!("duplicate building short name: {}", record.short_name),
            });
        }
        records.push(record);
    }
    Ok(records)
}

/// Parse path records from any reader.
pub fn read_paths<R: Read>(reader: R) -> Result<Vec<PathRecord>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    csv_reader
        .deserialize()
        .map(|row| row.map_err(Error::from))
        .collect()
}
