use aoc2023_grid_search::{position, Beam, BeamState, Direction, Grid};
use itertools::Itertools;
use miette::*;

use crate::part1::energized;

/// Every way a beam can enter from the edge, pointing inwards.
fn edge_entries(grid: &Grid) -> impl Iterator<Item = BeamState> {
    let last_row = grid.height() as i64 - 1;
    let last_col = grid.width() as i64 - 1;

    let vertical = (0..=last_col).flat_map(move |col| {
        [
            BeamState::new(position(0, col), Direction::South),
            BeamState::new(position(last_row, col), Direction::North),
        ]
    });
    let horizontal = (0..=last_row).flat_map(move |row| {
        [
            BeamState::new(position(row, 0), Direction::East),
            BeamState::new(position(row, last_col), Direction::West),
        ]
    });

    vertical.chain(horizontal)
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = Grid::parse(input)?;
    let beam = Beam::default();

    let best = edge_entries(&grid)
        .map(|entry| energized(&grid, &beam, entry))
        .process_results(|tiles| tiles.max())?
        .unwrap_or(0);

    Ok(best.to_string())
}
