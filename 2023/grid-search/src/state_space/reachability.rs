use strum::IntoEnumIterator;

use super::StateSpace;
use crate::{Direction, Grid, Position};

/// Orthogonal steps onto any cell that is not `blocked`.
///
/// A toroidal space never leaves the grid: positions keep growing without
/// bound while lookups wrap around, which models an infinitely tiled map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reachability {
    blocked: char,
    toroidal: bool,
}

impl Reachability {
    pub fn bounded(blocked: char) -> Self {
        Self {
            blocked,
            toroidal: false,
        }
    }

    pub fn toroidal(blocked: char) -> Self {
        Self {
            blocked,
            toroidal: true,
        }
    }

    fn cell<'g>(&self, grid: &'g Grid<char>, pos: Position) -> Option<&'g char> {
        if self.toroidal {
            Some(grid.toroidal(pos))
        } else {
            grid.get(pos)
        }
    }
}

impl StateSpace for Reachability {
    type Cell = char;
    type State = Position;

    fn neighbors(&self, grid: &Grid<char>, pos: &Position) -> Vec<(Position, u64)> {
        Direction::iter()
            .map(|dir| dir.step(*pos))
            .filter(|&next| self.cell(grid, next).is_some_and(|&c| c != self.blocked))
            .map(|next| (next, 1))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{position, SearchError};

    #[test]
    fn blocked_cells_and_edges_are_skipped() -> Result<(), SearchError> {
        let grid = Grid::load(&["#..", "...", "..."])?;
        let mut next: Vec<_> = Reachability::bounded('#')
            .neighbors(&grid, &position(0, 1))
            .into_iter()
            .map(|(pos, _)| pos)
            .collect();
        next.sort_by_key(|p| (p.y, p.x));
        assert_eq!(vec![position(0, 2), position(1, 1)], next);
        Ok(())
    }

    #[test]
    fn toroidal_steps_cross_the_edge() -> Result<(), SearchError> {
        let grid = Grid::load(&["...", "..#", "..."])?;
        let next: Vec<_> = Reachability::toroidal('#')
            .neighbors(&grid, &position(0, 0))
            .into_iter()
            .map(|(pos, _)| pos)
            .collect();
        assert_eq!(4, next.len());
        assert!(next.contains(&position(-1, 0)));
        assert!(next.contains(&position(0, -1)));

        // (1, -1) wraps onto the blocked (1, 2)
        let next = Reachability::toroidal('#').neighbors(&grid, &position(1, 0));
        assert!(!next.iter().any(|(pos, _)| *pos == position(1, -1)));
        Ok(())
    }
}
