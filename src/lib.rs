//! Co-appearance graphs and deterministic shortest connection paths.
//!
//! A [`GroupMap`] (book to cast) is turned into a [`LabeledMultigraph`] where
//! every pair of characters sharing a book is linked in both directions, and
//! [`find_path`] answers how two characters are connected.
//! Run Criterion benchmarks with `cargo bench` to inspect reports under `target/criterion`.

pub mod bench_utils;
pub mod bfs;
pub mod builder;
pub mod config;
pub mod dataset;
pub mod errors;
pub mod graph;
pub mod interactive;
pub mod logging;
pub mod matcher;
pub mod script;

pub use crate::bfs::{Path, by_destination_then_label, find_path, find_path_by};
pub use crate::builder::{GroupMap, build_graph, build_graph_with};
pub use crate::dataset::{load_graph, parse_groups};
pub use crate::errors::GraphError;
pub use crate::graph::{EdgeRef, GraphKey, LabeledEdge, LabeledMultigraph};
pub use crate::script::{ScriptConfig, ScriptContext, ScriptDriver};
