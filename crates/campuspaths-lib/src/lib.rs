//! Campus paths library entry points.
//!
//! This crate provides a generic directed multigraph with two interchangeable
//! backends, a Dijkstra shortest-path engine over any of them, and a campus
//! map that resolves building short names to coordinates and walking routes.
//! Higher-level consumers (CLI, HTTP service) should only depend on the
//! items exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod campus;
pub mod dataset;
pub mod error;
pub mod multigraph;
pub mod path;
pub mod script;
pub mod search;

pub use campus::{Building, CampusMap, Coordinate, Direction, LoadPolicy};
pub use dataset::{load_buildings, load_paths, resolve_data_dir, BuildingRecord, PathRecord};
pub use error::{Error, ErrorKind, Result};
pub use multigraph::{AdjacencyGraph, Edge, EdgeSetGraph, Multigraph};
pub use path::{Cost, Path, Segment};
pub use script::ScriptRunner;
pub use search::shortest_path;
