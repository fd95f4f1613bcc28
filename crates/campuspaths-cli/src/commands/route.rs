//! Route command handler for walking directions between two buildings.

use std::path::Path;

use anyhow::{Context, Result};

use campuspaths_cli::output::render_directions;
use campuspaths_lib::LoadPolicy;

use super::load_map;

/// Resolve both buildings, compute the shortest walk, and print directions.
pub fn handle_route(data_dir: &Path, policy: LoadPolicy, from: &str, to: &str) -> Result<()> {
    let map = load_map(data_dir, policy)?;
    let path = map
        .find_shortest_path(from, to)
        .with_context(|| format!("failed to route from {from} to {to}"))?;

    // Both names resolved above, so the lookups cannot miss.
    let from_long = map.long_name_for_short(from)?;
    let to_long = map.long_name_for_short(to)?;
    print!("{}", render_directions(from_long, to_long, &path));
    Ok(())
}
