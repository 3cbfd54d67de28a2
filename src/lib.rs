//! gridwspd
//! ========
//!
//! A well-separated pair decomposition (WSPD) distance oracle for 2D grid
//! graphs with barriers. Builds a quadtree-style decomposition of a grid's
//! walkable nodes into well-separated cell pairs, then answers point-to-point
//! shortest-path distance queries in time proportional to the WSPD's depth
//! instead of re-running a full search per query.

mod cell;
mod distance;
mod error;
mod graph;
mod neighbour;
mod node;
mod path;
mod pathfinding;
mod selection;
mod separation;
mod worker_pool;

pub use self::{
    cell::*, distance::*, error::*, graph::*, neighbour::*, node::*, path::*, pathfinding::*,
    selection::*, separation::*, worker_pool::*,
};
