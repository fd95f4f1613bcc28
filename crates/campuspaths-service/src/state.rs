//! Shared application state for the axum handlers.

use std::path::Path;
use std::sync::Arc;

use campuspaths_lib::{CampusMap, LoadPolicy, Result};

/// Read-only campus map shared across requests.
///
/// Cloning is cheap; the map lives behind an `Arc`.
#[derive(Debug, Clone)]
pub struct AppState {
    map: Arc<CampusMap>,
}

impl AppState {
    pub fn new(map: CampusMap) -> Self {
        Self { map: Arc::new(map) }
    }

    /// Load the campus data files from `data_dir`.
    pub fn load(data_dir: &Path, policy: LoadPolicy) -> Result<Self> {
        CampusMap::load(data_dir, policy).map(Self::new)
    }

    pub fn map(&self) -> &CampusMap {
        &self.map
    }
}
