//! Shortest-path and reachability searches over character and cost grids.
//!
//! A [`Grid`] holds the puzzle map, a [`StateSpace`] decides what a search
//! node is and where it may move, and the functions in [`search`] walk the
//! resulting graph. [`extrapolate`] turns a few periodic BFS counts into a
//! long-range answer.

mod direction;
mod error;
pub mod extrapolate;
mod grid;
pub mod search;
mod state_space;

pub use direction::{position, Direction, Position};
pub use error::SearchError;
pub use extrapolate::{evaluate, fit_quadratic, Quadratic};
pub use grid::Grid;
pub use search::{bfs_loop, bfs_reachable, dijkstra, Parity, Reached};
pub use state_space::{
    Beam, BeamOptics, BeamState, PipeLoop, PipeTable, Reachability, RunState, StateSpace,
    WeightedRun,
};
