use std::collections::HashMap;

use strum::IntoEnumIterator;

use super::StateSpace;
use crate::{Direction, Grid, Position};

/// A beam entering `pos` while travelling towards `facing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BeamState {
    pub pos: Position,
    pub facing: Direction,
}

impl BeamState {
    pub fn new(pos: Position, facing: Direction) -> Self {
        Self { pos, facing }
    }
}

/// How each symbol bends or splits a beam arriving with a given heading.
///
/// Symbols without an entry let the beam through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeamOptics {
    redirects: HashMap<(char, Direction), Vec<Direction>>,
}

impl BeamOptics {
    pub fn new(redirects: impl IntoIterator<Item = ((char, Direction), Vec<Direction>)>) -> Self {
        Self {
            redirects: redirects.into_iter().collect(),
        }
    }

    /// `/` and `\` mirrors plus `|` and `-` splitters.
    pub fn standard() -> Self {
        use Direction::*;

        let mut redirects = HashMap::new();
        for facing in Direction::iter() {
            let slash = match facing {
                North => East,
                East => North,
                South => West,
                West => South,
            };
            let backslash = match facing {
                North => West,
                West => North,
                South => East,
                East => South,
            };
            redirects.insert(('/', facing), vec![slash]);
            redirects.insert(('\\', facing), vec![backslash]);

            if facing.is_vertical() {
                redirects.insert(('|', facing), vec![facing]);
                redirects.insert(('-', facing), vec![West, East]);
            } else {
                redirects.insert(('|', facing), vec![North, South]);
                redirects.insert(('-', facing), vec![facing]);
            }
        }

        Self { redirects }
    }

    pub fn outgoing(&self, symbol: char, facing: Direction) -> Vec<Direction> {
        self.redirects
            .get(&(symbol, facing))
            .cloned()
            .unwrap_or_else(|| vec![facing])
    }
}

impl Default for BeamOptics {
    fn default() -> Self {
        Self::standard()
    }
}

/// Light bouncing through a contraption of mirrors and splitters.
#[derive(Debug, Clone, Default)]
pub struct Beam {
    optics: BeamOptics,
}

impl Beam {
    pub fn new(optics: BeamOptics) -> Self {
        Self { optics }
    }
}

impl StateSpace for Beam {
    type Cell = char;
    type State = BeamState;

    fn neighbors(&self, grid: &Grid<char>, state: &BeamState) -> Vec<(BeamState, u64)> {
        let Some(&symbol) = grid.get(state.pos) else {
            return Vec::new();
        };

        self.optics
            .outgoing(symbol, state.facing)
            .into_iter()
            .map(|facing| BeamState::new(facing.step(state.pos), facing))
            .filter(|next| grid.contains(next.pos))
            .map(|next| (next, 1))
            .collect()
    }
}
