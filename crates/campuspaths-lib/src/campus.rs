//! Campus map: a building registry layered over a coordinate graph.
//!
//! Nodes are [`Coordinate`]s and every path record becomes two opposite
//! edges weighted by the walking distance. Building short names resolve to
//! coordinates case-insensitively, so queries by short name translate
//! directly into shortest-path queries.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::Path as FsPath;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::dataset::{self, BuildingRecord, PathRecord, BUILDINGS_FILE, PATHS_FILE};
use crate::error::{Error, Result};
use crate::multigraph::{AdjacencyGraph, Edge, Multigraph};
use crate::path::Path;
use crate::search::shortest_path;

/// Minimum Jaro-Winkler similarity for a short name to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Maximum number of suggestions attached to an unknown-building error.
const MAX_SUGGESTIONS: usize = 3;

/// Point on the campus map in image coordinates (y grows downward).
///
/// Equality and hashing use the bit patterns of the components, with `-0.0`
/// folded into `0.0`, so coordinates can serve as graph node labels.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another coordinate.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    fn key(&self) -> (u64, u64) {
        (canonical_bits(self.x), canonical_bits(self.y))
    }
}

fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.0}, {:.0})", self.x, self.y)
    }
}

/// Compass heading of a walk between two coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Heading from `start` to `end`, where north is toward smaller y.
    ///
    /// Each heading covers a 45 degree sector centered on its bearing.
    pub fn of(start: &Coordinate, end: &Coordinate) -> Self {
        let angle = (start.y - end.y).atan2(end.x - start.x).to_degrees();
        let sector = ((angle + 360.0 + 22.5) / 45.0).floor() as i64 % 8;
        match sector {
            0 => Direction::East,
            1 => Direction::NorthEast,
            2 => Direction::North,
            3 => Direction::NorthWest,
            4 => Direction::West,
            5 => Direction::SouthWest,
            6 => Direction::South,
            _ => Direction::SouthEast,
        }
    }

    /// Short compass label such as `NE`.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Direction::North => "North",
            Direction::NorthEast => "NorthEast",
            Direction::East => "East",
            Direction::SouthEast => "SouthEast",
            Direction::South => "South",
            Direction::SouthWest => "SouthWest",
            Direction::West => "West",
            Direction::NorthWest => "NorthWest",
        };
        f.write_str(value)
    }
}

/// Registered building.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Building {
    pub short_name: String,
    pub long_name: String,
    pub location: Coordinate,
}

impl From<BuildingRecord> for Building {
    fn from(record: BuildingRecord) -> Self {
        let location = record.location();
        Self {
            short_name: record.short_name,
            long_name: record.long_name,
            location,
        }
    }
}

/// How construction treats path records that cannot become edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Skip the record with a warning and keep loading.
    #[default]
    Tolerant,
    /// Fail construction on the first bad record.
    Strict,
}

/// Building registry plus walking graph, read-only once built.
#[derive(Debug, Clone)]
pub struct CampusMap<G = AdjacencyGraph<Coordinate, f64>> {
    graph: G,
    buildings: HashMap<String, Building>,
}

impl<G> CampusMap<G>
where
    G: Multigraph<Coordinate, f64> + Default,
{
    /// Load `campus_buildings.csv` and `campus_paths.csv` from `data_dir`.
    pub fn load(data_dir: &FsPath, policy: LoadPolicy) -> Result<Self> {
        let buildings = dataset::load_buildings(&data_dir.join(BUILDINGS_FILE))?;
        let paths = dataset::load_paths(&data_dir.join(PATHS_FILE))?;
        Self::from_records(buildings, paths, policy)
    }

    /// Wire building and path records into a new map.
    ///
    /// Each building location becomes a node. Each path record registers its
    /// endpoints and inserts one edge per direction weighted by its distance.
    /// Records that cannot be inserted are skipped under
    /// [`LoadPolicy::Tolerant`] and rejected under [`LoadPolicy::Strict`].
    /// Short names that collide ignoring case fail with
    /// [`Error::DatasetValidation`] under either policy.
    pub fn from_records(
        buildings: Vec<BuildingRecord>,
        paths: Vec<PathRecord>,
        policy: LoadPolicy,
    ) -> Result<Self> {
        let mut graph = G::default();
        let mut registry = HashMap::with_capacity(buildings.len());

        for record in buildings {
            let building = Building::from(record);
            let key = building.short_name.to_uppercase();
            if registry.contains_key(&key) {
                return Err(Error::DatasetValidation {
                    message: format!("duplicate building short name: {}", building.short_name),
                });
            }
            graph.add_node(building.location);
            registry.insert(key, building);
        }

        let mut skipped = 0usize;
        for (index, record) in paths.iter().enumerate() {
            // Header occupies line 1 of the source file.
            let line = index + 2;
            if let Err(error) = insert_path(&mut graph, record, line) {
                match policy {
                    LoadPolicy::Strict => return Err(error),
                    LoadPolicy::Tolerant => {
                        warn!(line, error = %error, "skipping path record");
                        skipped += 1;
                    }
                }
            }
        }

        info!(
            buildings = registry.len(),
            nodes = graph.size(),
            edges = graph.edge_count(),
            skipped,
            "campus map built"
        );

        Ok(Self {
            graph,
            buildings: registry,
        })
    }
}

fn insert_path<G>(graph: &mut G, record: &PathRecord, line: usize) -> Result<()>
where
    G: Multigraph<Coordinate, f64>,
{
    if let Some(message) = record.defect() {
        return Err(Error::InvalidPathRecord { line, message });
    }
    let (start, end) = (record.start(), record.end());
    graph.add_node(start);
    graph.add_node(end);
    let edge = Edge::new(start, end, record.distance);
    graph.add_edge(edge.reversed())?;
    graph.add_edge(edge)
}

impl<G> CampusMap<G>
where
    G: Multigraph<Coordinate, f64>,
{
    /// Whether `short_name` names a building, ignoring case.
    pub fn short_name_exists(&self, short_name: &str) -> bool {
        self.buildings.contains_key(&short_name.to_uppercase())
    }

    /// Building registered under `short_name`, ignoring case.
    pub fn building(&self, short_name: &str) -> Option<&Building> {
        self.buildings.get(&short_name.to_uppercase())
    }

    /// Long name of the building registered under `short_name`.
    pub fn long_name_for_short(&self, short_name: &str) -> Result<&str> {
        self.resolve(short_name)
            .map(|building| building.long_name.as_str())
    }

    /// Snapshot of every short name mapped to its long name.
    pub fn building_names(&self) -> BTreeMap<String, String> {
        self.buildings
            .iter()
            .map(|(short, building)| (short.clone(), building.long_name.clone()))
            .collect()
    }

    /// Number of registered buildings.
    pub fn building_count(&self) -> usize {
        self.buildings.len()
    }

    /// Shortest walking path between two buildings.
    ///
    /// Fails with [`Error::UnknownBuilding`] for an unknown short name and
    /// with [`Error::PathNotFound`] when the buildings are not connected.
    pub fn find_shortest_path(&self, start: &str, end: &str) -> Result<Path<Coordinate, f64>> {
        let from = self.resolve(start)?;
        let to = self.resolve(end)?;
        debug!(start = %from.short_name, end = %to.short_name, "finding shortest path");
        shortest_path(&self.graph, &from.location, &to.location).map_err(|error| match error {
            Error::PathNotFound { .. } => Error::PathNotFound {
                start: from.short_name.clone(),
                goal: to.short_name.clone(),
            },
            other => other,
        })
    }

    /// Registered short names that resemble `short_name`, best match first.
    pub fn suggestions(&self, short_name: &str) -> Vec<String> {
        let query = short_name.to_uppercase();
        let mut scored: Vec<(f64, &String)> = self
            .buildings
            .keys()
            .map(|candidate| (strsim::jaro_winkler(&query, candidate), candidate))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, name)| name.clone())
            .collect()
    }

    /// Underlying walking graph.
    pub fn graph(&self) -> &G {
        &self.graph
    }

    fn resolve(&self, short_name: &str) -> Result<&Building> {
        self.building(short_name)
            .ok_or_else(|| Error::UnknownBuilding {
                name: short_name.to_string(),
                suggestions: self.suggestions(short_name),
            })
    }
}
