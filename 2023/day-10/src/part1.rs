use aoc2023_grid_search::{bfs_loop, Grid, PipeLoop, PipeTable};
use miette::*;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = Grid::parse(input)?;
    let pipes = PipeLoop::new(PipeTable::standard(), &grid, 'S')?;
    let main_loop = bfs_loop(&grid, &pipes, pipes.start())?;

    // The farthest tile sits halfway round the loop
    Ok((main_loop.len() / 2).to_string())
}
