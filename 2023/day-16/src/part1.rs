use aoc2023_grid_search::{bfs_loop, position, Beam, BeamState, Direction, Grid};
use itertools::Itertools;
use miette::*;

/// Number of distinct tiles a beam passes through, whatever its heading.
pub(crate) fn energized(grid: &Grid, beam: &Beam, entry: BeamState) -> Result<usize> {
    let visited = bfs_loop(grid, beam, entry)?;
    Ok(visited.iter().map(|state| state.pos).unique().count())
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = Grid::parse(input)?;
    let entry = BeamState::new(position(0, 0), Direction::East);
    let tiles = energized(&grid, &Beam::default(), entry)?;

    Ok(tiles.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    const EXAMPLE: &str = r".|...\....
|.-.\.....
.....|-...
........|.
..........
.........\
..../.\\..
.-.-/..|..
.|....-|.\
..//.|....";

    #[rstest]
    #[case(EXAMPLE, "46")]
    // Deflected straight down the first column
    #[case("\\..\n...\n...", "3")]
    // Split on entry, both halves leave the grid at once
    #[case("|..\n...", "2")]
    #[case("...\n...", "3")]
    fn it_works(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }
}
