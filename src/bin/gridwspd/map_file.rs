//! Parse the ASCII map file format into a [`GridGraph`].

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use gridwspd::{GridGraph, NeighbourMode};
use tracing::warn;

const WALKABLE: char = '.';

/// Load a map file shaped as:
/// ```text
/// height <H>
/// width <W>
/// <H body rows of exactly W characters>
/// ```
/// `.` marks a walkable cell; any other character is a barrier. A body row
/// whose length differs from the declared width is skipped, with a warning,
/// rather than aborting the whole load.
pub fn load(path: &Path, mode: NeighbourMode) -> Result<GridGraph> {
    let text = fs::read_to_string(path).with_context(|| format!("reading map file {}", path.display()))?;
    let mut lines = text.lines();

    let height = parse_header(lines.next(), "height")?;
    let width = parse_header(lines.next(), "width")?;

    let mut rows = Vec::with_capacity(height);
    for (i, line) in lines.enumerate() {
        if line.chars().count() != width {
            warn!(row = i, expected = width, actual = line.chars().count(), "skipping malformed map row");
            continue;
        }
        rows.push(line.chars().map(|c| c == WALKABLE).collect());
    }

    if rows.len() != height {
        warn!(declared = height, parsed = rows.len(), "map row count did not match the declared height");
    }

    GridGraph::new(rows, mode).map_err(anyhow::Error::from)
}

fn parse_header(line: Option<&str>, name: &str) -> Result<usize> {
    let line = line.unwrap_or("");
    let value = line
        .strip_prefix(name)
        .map(str::trim)
        .with_context(|| format!("expected a `{name} <N>` header line, got {line:?}"))?;
    value.parse().with_context(|| format!("`{name}` header value {value:?} is not a number"))
}

#[cfg(test)]
mod test {
    use super::*;
    use gridwspd::Node;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn write_temp(contents: &str) -> std::path::PathBuf {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let suffix = COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!("gridwspd-map-test-{suffix}.txt"));
        fs::write(&path, contents).expect("write temp map file");
        path
    }

    #[test]
    fn loads_a_well_formed_map() {
        let path = write_temp("height 2\nwidth 3\n..#\n...\n");
        let graph = load(&path, NeighbourMode::Manhattan).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(graph.height(), 2);
        assert_eq!(graph.width(), 3);
        assert!(!graph.is_walkable(Node::new(0, 2)));
        assert!(graph.is_walkable(Node::new(1, 2)));
    }

    #[test]
    fn skips_a_malformed_row_rather_than_aborting() {
        let path = write_temp("height 2\nwidth 3\n..\n...\n");
        let graph = load(&path, NeighbourMode::Manhattan).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(graph.height(), 1);
    }

    #[test]
    fn missing_header_is_an_error() {
        let path = write_temp("width 3\n...\n");
        let result = load(&path, NeighbourMode::Manhattan);
        let _ = fs::remove_file(&path);
        assert!(result.is_err());
    }
}
