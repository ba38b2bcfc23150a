use std::collections::HashSet;

use aoc2023_grid_search::{bfs_loop, Direction, Grid, PipeLoop, PipeTable, Position};
use itertools::Itertools;
use miette::*;

/// Counts the tiles enclosed by the loop with a scan along each row.
///
/// Only loop tiles that open north flip between outside and inside, so a run
/// like `F--J` crosses the boundary once while `F--7` only grazes it.
fn count_enclosed(grid: &Grid, pipes: &PipeLoop, main_loop: &HashSet<Position>) -> usize {
    let opens_north = |pos: Position| {
        pipes
            .symbol_at(grid, pos)
            .is_some_and(|c| pipes.table().connects(c, Direction::North))
    };

    let mut enclosed = 0;
    for (_, row) in &grid.positions().chunk_by(|pos| pos.y) {
        let mut inside = false;
        for pos in row {
            if main_loop.contains(&pos) {
                if opens_north(pos) {
                    inside = !inside;
                }
            } else if inside {
                enclosed += 1;
            }
        }
    }
    enclosed
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = Grid::parse(input)?;
    let pipes = PipeLoop::new(PipeTable::standard(), &grid, 'S')?;
    let main_loop = bfs_loop(&grid, &pipes, pipes.start())?;

    let enclosed = count_enclosed(&grid, &pipes, &main_loop);
    tracing::debug!(loop_len = main_loop.len(), enclosed);

    Ok(enclosed.to_string())
}
