use std::collections::HashMap;

use strum::IntoEnumIterator;

use super::StateSpace;
use crate::{Direction, Grid, Position, SearchError};

/// Which two sides each pipe symbol opens onto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeTable {
    connections: HashMap<char, [Direction; 2]>,
}

impl PipeTable {
    /// Builds a table, rejecting pipes that open onto one side twice and
    /// pairs of sides claimed by more than one symbol, since the start pipe
    /// could not be inferred unambiguously.
    pub fn new(
        connections: impl IntoIterator<Item = (char, [Direction; 2])>,
    ) -> Result<Self, SearchError> {
        let mut claimed: HashMap<[Direction; 2], char> = HashMap::new();
        let mut table = HashMap::new();

        for (symbol, sides) in connections {
            if sides[0] == sides[1] {
                return Err(SearchError::malformed(format!(
                    "pipe {symbol:?} opens onto {:?} twice",
                    sides[0]
                )));
            }

            let mut key = sides;
            key.sort();
            if let Some(other) = claimed.insert(key, symbol).filter(|&other| other != symbol) {
                return Err(SearchError::malformed(format!(
                    "pipes {other:?} and {symbol:?} both open onto {key:?}"
                )));
            }
            table.insert(symbol, sides);
        }

        Ok(Self { connections: table })
    }

    /// The six pipe pieces of the puzzle: `| - L J 7 F`.
    pub fn standard() -> Self {
        use Direction::*;
        Self {
            connections: HashMap::from([
                ('|', [North, South]),
                ('-', [East, West]),
                ('L', [North, East]),
                ('J', [North, West]),
                ('7', [South, West]),
                ('F', [South, East]),
            ]),
        }
    }

    /// Sides `symbol` opens onto; empty for ground and unknown symbols.
    pub fn connections(&self, symbol: char) -> &[Direction] {
        self.connections
            .get(&symbol)
            .map(|dirs| dirs.as_slice())
            .unwrap_or_default()
    }

    pub fn connects(&self, symbol: char, side: Direction) -> bool {
        self.connections(symbol).contains(&side)
    }

    /// The symbol opening onto exactly `sides`, in either order. Unique,
    /// since [`PipeTable::new`] refuses shared side pairs.
    pub fn symbol_for(&self, sides: [Direction; 2]) -> Option<char> {
        self.connections
            .iter()
            .find(|(_, dirs)| dirs.contains(&sides[0]) && dirs.contains(&sides[1]))
            .map(|(&symbol, _)| symbol)
    }
}

impl Default for PipeTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Walks a pipe network from its start marker.
///
/// The marker hides the real pipe underneath it, which is recovered from the
/// two neighbours that open back towards it.
#[derive(Debug, Clone)]
pub struct PipeLoop {
    table: PipeTable,
    start: Position,
    start_symbol: char,
}

impl PipeLoop {
    pub fn new(table: PipeTable, grid: &Grid<char>, start_marker: char) -> Result<Self, SearchError> {
        let start = grid.find(&start_marker)?;

        // Sides come out in North, East, South, West order
        let linked: Vec<Direction> = Direction::iter()
            .filter(|&side| {
                grid.get(side.step(start))
                    .is_some_and(|&c| table.connects(c, side.opposite()))
            })
            .collect();

        let &[first, second] = linked.as_slice() else {
            return Err(SearchError::malformed(format!(
                "start marker at ({}, {}) has {} connecting neighbours, expected 2",
                start.y,
                start.x,
                linked.len()
            )));
        };

        let start_symbol = table.symbol_for([first, second]).ok_or_else(|| {
            SearchError::malformed(format!("no pipe connects {first:?} and {second:?}"))
        })?;

        tracing::debug!(?start, %start_symbol, "inferred start pipe");

        Ok(Self {
            table,
            start,
            start_symbol,
        })
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn start_symbol(&self) -> char {
        self.start_symbol
    }

    pub fn table(&self) -> &PipeTable {
        &self.table
    }

    /// The pipe at `pos`, with the start marker replaced by its real symbol.
    pub fn symbol_at(&self, grid: &Grid<char>, pos: Position) -> Option<char> {
        if pos == self.start {
            Some(self.start_symbol)
        } else {
            grid.get(pos).copied()
        }
    }
}

impl StateSpace for PipeLoop {
    type Cell = char;
    type State = Position;

    fn neighbors(&self, grid: &Grid<char>, pos: &Position) -> Vec<(Position, u64)> {
        let Some(symbol) = self.symbol_at(grid, *pos) else {
            return Vec::new();
        };

        self.table
            .connections(symbol)
            .iter()
            .map(|&side| (side, side.step(*pos)))
            .filter(|&(side, next)| {
                self.symbol_at(grid, next)
                    .is_some_and(|c| self.table.connects(c, side.opposite()))
            })
            .map(|(_, next)| (next, 1))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position;

    use rstest::rstest;

    #[rstest]
    #[case(&[".....", ".S-7.", ".|.|.", ".L-J.", "....."], 'F')]
    #[case(&["..F7.", ".FJ|.", "SJ.L7", "|F--J", "LJ..."], 'F')]
    #[case(&["-L|F7", "7S-7|", "L|7||", "-L-J|", "L|-JF"], 'F')]
    #[case(&["7-F7-", ".FJ|7", "SJLL7", "|F--J", "LJ.LJ"], 'F')]
    #[case(&["F-S", "|.|", "L-J"], '7')]
    fn infers_the_hidden_start_pipe(#[case] rows: &[&str], #[case] expected: char) -> Result<(), SearchError> {
        let grid = Grid::load(rows)?;
        let pipes = PipeLoop::new(PipeTable::standard(), &grid, 'S')?;
        assert_eq!(expected, pipes.start_symbol());
        Ok(())
    }

    #[test]
    fn dead_end_start_is_rejected() -> Result<(), SearchError> {
        let grid = Grid::load(&["...", ".S-", "..."])?;
        assert!(matches!(
            PipeLoop::new(PipeTable::standard(), &grid, 'S'),
            Err(SearchError::MalformedInput { .. })
        ));
        Ok(())
    }

    #[test]
    fn pipes_only_link_to_neighbours_that_open_back() -> Result<(), SearchError> {
        // Both sides of the `L` hold a `|`, only the one above opens back
        let grid = Grid::load(&[".|.", "SL|", "..."])?;
        let pipes = PipeLoop {
            table: PipeTable::standard(),
            start: position(1, 0),
            start_symbol: '-',
        };
        let next: Vec<_> = pipes
            .neighbors(&grid, &position(1, 1))
            .into_iter()
            .map(|(pos, _)| pos)
            .collect();
        assert_eq!(vec![position(0, 1)], next);
        Ok(())
    }

    #[test]
    fn custom_table_matches_the_standard_one() -> Result<(), SearchError> {
        use Direction::*;
        let table = PipeTable::new([
            ('|', [North, South]),
            ('-', [East, West]),
            ('L', [North, East]),
            ('J', [North, West]),
            ('7', [South, West]),
            ('F', [South, East]),
        ])?;
        assert_eq!(PipeTable::standard(), table);
        assert_eq!(Some('F'), table.symbol_for([East, South]));
        Ok(())
    }

    #[rstest]
    #[case(&[('|', [Direction::North, Direction::South]), ('!', [Direction::South, Direction::North])])]
    #[case(&[('o', [Direction::East, Direction::East])])]
    fn ambiguous_tables_are_rejected(#[case] connections: &[(char, [Direction; 2])]) {
        assert!(matches!(
            PipeTable::new(connections.iter().copied()),
            Err(SearchError::MalformedInput { .. })
        ));
    }
}
