//! Tab-separated appearance dataset.
//!
//! Each record names a hero and a book the hero appears in, under a header
//! row with `hero` and `book` columns.

use std::{fs::File, io::Read, path::Path, time::Instant};

use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    builder::{GroupMap, build_graph},
    errors::GraphError,
    graph::LabeledMultigraph,
};

#[derive(Debug, Deserialize)]
struct Appearance {
    hero: String,
    book: String,
}

pub fn parse_groups<P: AsRef<Path>>(path: P) -> Result<GroupMap, GraphError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| GraphError::dataset(format!("unable to open {}: {e}", path.display())))?;
    parse_groups_from_reader(file)
}

pub fn parse_groups_from_reader<R: Read>(reader: R) -> Result<GroupMap, GraphError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = rdr
        .headers()
        .map_err(|e| GraphError::dataset(format!("unreadable header: {e}")))?
        .clone();

    let mut groups = GroupMap::new();
    let mut record = csv::StringRecord::new();
    let mut rows = 0usize;
    while rdr
        .read_record(&mut record)
        .map_err(|e| GraphError::dataset(e.to_string()))?
    {
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        let row: Appearance = record
            .deserialize(Some(&headers))
            .map_err(|e| GraphError::dataset(format!("line {line}: {e}")))?;
        if row.hero.is_empty() || row.book.is_empty() {
            return Err(GraphError::dataset(format!(
                "line {line}: hero and book must both be set"
            )));
        }
        groups.entry(row.book).or_default().insert(row.hero);
        rows += 1;
    }
    debug!(rows, groups = groups.len(), "parsed appearance records");
    Ok(groups)
}

/// Parses the dataset at `path` and builds the co-appearance graph.
pub fn load_graph<P: AsRef<Path>>(
    path: P,
) -> Result<LabeledMultigraph<String, String>, GraphError> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(GraphError::dataset("dataset path must be set"));
    }
    let started = Instant::now();
    let groups = parse_groups(path)?;
    let graph = build_graph(&groups);
    info!(
        path = %path.display(),
        groups = groups.len(),
        nodes = graph.size(),
        edges = graph.edge_count(),
        elapsed = ?started.elapsed(),
        "loaded graph"
    );
    Ok(graph)
}
