use super::StateSpace;
use crate::{Direction, Grid, Position, SearchError};

/// Position, heading and how many moves in a row were made along it.
///
/// A run length of zero marks a state that has not moved yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunState {
    pub pos: Position,
    pub facing: Direction,
    pub run: u8,
}

impl RunState {
    pub fn start(pos: Position, facing: Direction) -> Self {
        Self { pos, facing, run: 0 }
    }
}

/// Moves over a cost grid that must turn after `max_run` straight moves and
/// may only turn once `min_run` straight moves were made. Reversing is never
/// allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedRun {
    min_run: u8,
    max_run: u8,
    goal: Position,
}

impl WeightedRun {
    pub fn new(min_run: u8, max_run: u8, goal: Position) -> Result<Self, SearchError> {
        if max_run == 0 || min_run > max_run {
            return Err(SearchError::malformed(format!(
                "run limits {min_run}..={max_run} allow no movement"
            )));
        }

        Ok(Self {
            min_run,
            max_run,
            goal,
        })
    }

    pub fn goal(&self) -> Position {
        self.goal
    }
}

impl StateSpace for WeightedRun {
    type Cell = u32;
    type State = RunState;

    fn neighbors(&self, grid: &Grid<u32>, state: &RunState) -> Vec<(RunState, u64)> {
        [state.facing.turn_left(), state.facing, state.facing.turn_right()]
            .into_iter()
            .filter_map(|facing| {
                let run = if facing == state.facing {
                    (state.run < self.max_run).then(|| state.run + 1)?
                } else {
                    (state.run >= self.min_run).then_some(1)?
                };
                let pos = facing.step(state.pos);
                let cost = grid.get(pos)?;

                Some((RunState { pos, facing, run }, u64::from(*cost)))
            })
            .collect()
    }

    fn is_goal(&self, state: &RunState) -> bool {
        state.pos == self.goal && state.run >= self.min_run
    }

    fn validate(&self, state: &RunState) -> Result<(), SearchError> {
        if state.run > self.max_run {
            return Err(SearchError::InvalidStateTransition {
                reason: format!("run length {} exceeds {}", state.run, self.max_run),
            });
        }
        Ok(())
    }
}
