use aoc2023_grid_search::{dijkstra, position, Direction, Grid, RunState, SearchError, WeightedRun};
use miette::*;

const MAX_RUN: u8 = 3;

/// Reads the city map as a grid of heat-loss digits.
pub(crate) fn parse_costs(input: &str) -> Result<Grid<u32>> {
    let grid = Grid::parse(input)?;
    let costs = grid.try_map(|pos, c| {
        c.to_digit(10).ok_or_else(|| {
            SearchError::malformed(format!("{c:?} at ({}, {}) is not a heat-loss digit", pos.y, pos.x))
        })
    })?;
    Ok(costs)
}

/// Least heat lost getting from the top-left block to the bottom-right one.
///
/// The crucible starts out unmoved, so it may leave either east or south.
pub(crate) fn least_heat_loss(costs: &Grid<u32>, min_run: u8, max_run: u8) -> Result<u64> {
    let goal = position(costs.height() as i64 - 1, costs.width() as i64 - 1);
    let space = WeightedRun::new(min_run, max_run, goal)?;

    let origin = position(0, 0);
    let starts = [Direction::East, Direction::South].map(|facing| (RunState::start(origin, facing), 0));

    Ok(dijkstra(costs, &space, starts)?)
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let costs = parse_costs(input)?;
    let heat_loss = least_heat_loss(&costs, 0, MAX_RUN)?;

    Ok(heat_loss.to_string())
}
