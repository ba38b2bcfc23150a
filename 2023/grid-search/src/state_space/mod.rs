use std::fmt::Debug;
use std::hash::Hash;

use crate::{Grid, SearchError};

mod beam;
mod pipe;
mod reachability;
mod weighted;

pub use beam::{Beam, BeamOptics, BeamState};
pub use pipe::{PipeLoop, PipeTable};
pub use reachability::Reachability;
pub use weighted::{RunState, WeightedRun};

/// Defines the nodes of a search and the legal moves between them.
///
/// The search functions only ever talk to a grid through this trait, so a
/// new traversal rule is a new implementation rather than a new search loop.
pub trait StateSpace {
    /// What a grid cell holds: a symbol or a cost.
    type Cell;
    /// A search node. Equality is structural, so the same position reached
    /// with a different heading is a different node.
    type State: Clone + Eq + Hash + Debug;

    /// Legal successors of `state` with the cost of each move.
    fn neighbors(&self, grid: &Grid<Self::Cell>, state: &Self::State) -> Vec<(Self::State, u64)>;

    fn is_goal(&self, _state: &Self::State) -> bool {
        false
    }

    /// Rejects states this space should never have produced.
    fn validate(&self, _state: &Self::State) -> Result<(), SearchError> {
        Ok(())
    }
}
