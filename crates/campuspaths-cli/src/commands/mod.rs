// Subcommand handlers dispatched from main.rs, one module per subcommand.

pub mod buildings;
pub mod route;
pub mod script;

use std::path::Path;

use anyhow::{Context, Result};

use campuspaths_lib::{CampusMap, LoadPolicy};

/// Load the campus map from `data_dir` with a readable failure message.
pub fn load_map(data_dir: &Path, policy: LoadPolicy) -> Result<CampusMap> {
    CampusMap::load(data_dir, policy)
        .with_context(|| format!("failed to load campus data from {}", data_dir.display()))
}
