//! Write separation/selection results out in the on-disk text format.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use gridwspd::{GridGraph, NodeSelection, Separation};

/// For each separation, the walkable nodes of cluster `A` under `0:`, then
/// cluster `B` under `1:`, then each cluster's center. `Trivial` separations
/// carry no stored center — any node works equally well as a representative,
/// so the first walkable node of each cluster is used.
pub fn write_separations(path: &Path, separations: &[Separation], graph: &GridGraph) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating output file {}", path.display()))?;
    let mut out = BufWriter::new(file);

    for sep in separations {
        for node in sep.a().iter().filter(|&n| graph.is_walkable(n)) {
            writeln!(out, "0: ({}, {})", node.row, node.col)?;
        }
        for node in sep.b().iter().filter(|&n| graph.is_walkable(n)) {
            writeln!(out, "1: ({}, {})", node.row, node.col)?;
        }
        let (ca, cb) = representative_centers(sep, graph);
        writeln!(out, "center: ({}, {})", ca.row, ca.col)?;
        writeln!(out, "center: ({}, {})", cb.row, cb.col)?;
    }

    out.flush()?;
    Ok(())
}

fn representative_centers(sep: &Separation, graph: &GridGraph) -> (gridwspd::Node, gridwspd::Node) {
    match sep {
        Separation::Complex { ca, cb, .. } => (*ca, *cb),
        Separation::Trivial { a, b } => (
            a.iter().find(|&n| graph.is_walkable(n)).expect("separated cell has a walkable node"),
            b.iter().find(|&n| graph.is_walkable(n)).expect("separated cell has a walkable node"),
        ),
    }
}

/// For each selection, its left nodes under `0:`, right nodes under `1:`,
/// then a `center:` and an `index:` line.
pub fn write_selections(path: &Path, selections: &[NodeSelection]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating output file {}", path.display()))?;
    let mut out = BufWriter::new(file);

    for selection in selections {
        for node in selection.left() {
            writeln!(out, "0: ({}, {})", node.row, node.col)?;
        }
        for node in selection.right() {
            writeln!(out, "1: ({}, {})", node.row, node.col)?;
        }
        let center = selection.center();
        writeln!(out, "center: ({}, {})", center.row, center.col)?;
        writeln!(out, "index: {}", selection.index())?;
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use gridwspd::{calculate_separation, Dijkstra, NeighbourMode};
    use std::fs;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn temp_path() -> std::path::PathBuf {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let suffix = COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!("gridwspd-output-test-{suffix}.txt"))
    }

    #[test]
    fn separation_file_has_one_center_pair_per_separation() {
        let graph = GridGraph::new(vec![vec![true; 3]; 3], NeighbourMode::Manhattan).unwrap();
        let mut pathfinder = Dijkstra::new(&graph);
        let separations = calculate_separation(&graph, &mut pathfinder);

        let path = temp_path();
        write_separations(&path, &separations, &graph).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_file(&path);

        let center_lines = text.lines().filter(|l| l.starts_with("center:")).count();
        assert_eq!(center_lines, separations.len() * 2);
    }
}
