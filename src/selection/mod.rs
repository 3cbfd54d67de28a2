//! Node-selection clustering: the layer between the raw WSPD and the ready-
//! to-ship "can this pair be answered without a live search" artifact.

mod bucket;
mod bucket_creator;
mod calculator;
mod node_selection;
mod optimizer;

pub use bucket::SelectionBucket;
pub use bucket_creator::{SelectionBucketCreator, SelectionBucketLookup};
pub use calculator::{FullNodeSelectionCalculator, NodeSelectionCalculator};
pub use node_selection::NodeSelection;
pub use optimizer::SelectionLookupOptimizer;
