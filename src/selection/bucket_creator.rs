//! Group per-node selection lists into a smaller, shared universe of
//! [`SelectionBucket`]s.

use crate::graph::GridGraph;
use crate::node::Node;
use crate::selection::{NodeSelection, SelectionBucket};

/// See §4.7. Consumes the (already-optimized) per-node selection-index lists
/// and builds a shared bucket arena plus per-node bucket membership.
pub struct SelectionBucketCreator {
    selections: Vec<NodeSelection>,
    left_selections: Vec<Vec<usize>>,
    right_selections: Vec<Vec<usize>>,
}

impl SelectionBucketCreator {
    #[must_use]
    pub fn new(selections: Vec<NodeSelection>, left_selections: Vec<Vec<usize>>, right_selections: Vec<Vec<usize>>) -> Self {
        Self {
            selections,
            left_selections,
            right_selections,
        }
    }

    #[must_use]
    pub fn create_bucket_lookup(self) -> SelectionBucketLookup {
        let mut buckets = Vec::new();
        let left_buckets = build_side(self.left_selections, &mut buckets);
        let right_buckets = build_side(self.right_selections, &mut buckets);

        SelectionBucketLookup {
            selections: self.selections,
            buckets,
            left_buckets,
            right_buckets,
        }
    }
}

fn build_side(mut lists: Vec<Vec<usize>>, buckets: &mut Vec<SelectionBucket>) -> Vec<Vec<usize>> {
    let mut membership = vec![Vec::new(); lists.len()];
    let mut incomplete: Vec<usize> = (0..lists.len()).filter(|&i| !lists[i].is_empty()).collect();

    while let Some(&node_idx) = incomplete.first() {
        let candidate = SelectionBucket::new(lists[node_idx].clone());
        let shrunk = shrink_bucket(candidate, &lists);

        let bucket_idx = buckets.len();
        for (i, list) in lists.iter_mut().enumerate() {
            if !list.is_empty() && shrunk.is_subset_of(list) {
                list.retain(|idx| !shrunk.contains(*idx));
                membership[i].push(bucket_idx);
            }
        }
        buckets.push(shrunk);

        incomplete.retain(|&i| !lists[i].is_empty());
    }

    membership
}

/// Repeatedly exclude the selection whose removal most increases the number
/// of nodes whose remaining list can still use the bucket, stopping once no
/// exclusion helps.
fn shrink_bucket(mut bucket: SelectionBucket, lists: &[Vec<usize>]) -> SelectionBucket {
    loop {
        let usable_before = count_usable(&bucket, lists);
        let mut best = None;
        let mut best_gain = 0usize;

        for &selection in bucket.selections() {
            let candidate = bucket.clone().exclude(selection);
            if candidate.is_empty() {
                continue;
            }
            let usable_after = count_usable(&candidate, lists);
            if usable_after > usable_before && usable_after - usable_before > best_gain {
                best_gain = usable_after - usable_before;
                best = Some(selection);
            }
        }

        match best {
            Some(selection) => bucket = bucket.exclude(selection),
            None => return bucket,
        }
    }
}

fn count_usable(bucket: &SelectionBucket, lists: &[Vec<usize>]) -> usize {
    lists.iter().filter(|list| !list.is_empty() && bucket.is_subset_of(list)).count()
}

/// Read-only view over a built bucket arena: answers `can_answer` queries
/// without any of the mutable optimisation machinery.
pub struct SelectionBucketLookup {
    selections: Vec<NodeSelection>,
    buckets: Vec<SelectionBucket>,
    left_buckets: Vec<Vec<usize>>,
    right_buckets: Vec<Vec<usize>>,
}

impl SelectionBucketLookup {
    #[must_use]
    pub fn can_answer(&self, graph: &GridGraph, from: Node, to: Node) -> bool {
        let from_idx = graph.index(from);
        let to_idx = graph.index(to);

        if let Some(bucket) = common_bucket(&self.left_buckets[from_idx], &self.right_buckets[to_idx]) {
            if self.buckets[bucket].selections().iter().any(|&s| self.selections[s].can_answer(from, to)) {
                return true;
            }
        }
        if let Some(bucket) = common_bucket(&self.left_buckets[to_idx], &self.right_buckets[from_idx]) {
            if self.buckets[bucket].selections().iter().any(|&s| self.selections[s].can_answer(from, to)) {
                return true;
            }
        }
        false
    }

    #[inline]
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}

fn common_bucket(a: &[usize], b: &[usize]) -> Option<usize> {
    a.iter().find(|idx| b.contains(idx)).copied()
}
