use miette::Diagnostic;
use thiserror::Error;

use crate::Position;

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum SearchError {
    #[error("malformed input: {reason}")]
    #[diagnostic(code(grid_search::malformed_input))]
    MalformedInput { reason: String },

    #[error("({row}, {col}) is outside of the {height}x{width} grid")]
    #[diagnostic(code(grid_search::out_of_bounds))]
    OutOfBounds {
        row: i64,
        col: i64,
        height: usize,
        width: usize,
    },

    #[error("no cell matches {symbol}")]
    #[diagnostic(
        code(grid_search::not_found),
        help("the input is expected to contain the start marker exactly once")
    )]
    NotFound { symbol: String },

    #[error("search queue exhausted after finalizing {finalized} states without reaching a goal")]
    #[diagnostic(code(grid_search::unreachable_goal))]
    UnreachableGoal { finalized: usize },

    #[error("state space produced an invalid state: {reason}")]
    #[diagnostic(code(grid_search::invalid_state_transition))]
    InvalidStateTransition { reason: String },

    #[error("no integer quadratic passes through the samples {xs:?} -> {ys:?}")]
    #[diagnostic(code(grid_search::inexact_fit))]
    InexactFit { xs: [i64; 3], ys: [i64; 3] },

    #[error("fitted quadratic predicts {predicted} at x = {x}, but {observed} was observed")]
    #[diagnostic(
        code(grid_search::held_out_mismatch),
        help("the sampled sequence is not periodic over the grid, so it cannot be extrapolated")
    )]
    HeldOutMismatch { x: i64, predicted: i64, observed: i64 },
}

impl SearchError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn out_of_bounds(position: Position, height: usize, width: usize) -> Self {
        Self::OutOfBounds {
            row: position.y,
            col: position.x,
            height,
            width,
        }
    }
}
