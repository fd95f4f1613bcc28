//! Buildings command handler.

use std::path::Path;

use anyhow::Result;

use campuspaths_cli::output::render_buildings;
use campuspaths_lib::LoadPolicy;

use super::load_map;

/// Print every registered building sorted by short name.
pub fn handle_buildings(data_dir: &Path, policy: LoadPolicy) -> Result<()> {
    let map = load_map(data_dir, policy)?;
    print!("{}", render_buildings(&map.building_names()));
    Ok(())
}
