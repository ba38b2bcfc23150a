use aoc2023_grid_search::{bfs_reachable, Grid, Reachability};
use miette::*;

const STEPS: usize = 64;

/// Garden plots the elf can end on after exactly `steps` steps.
fn reachable_plots(input: &str, steps: usize) -> Result<usize> {
    let grid = Grid::parse(input)?;
    let start = grid.find(&'S')?;
    let reached = bfs_reachable(&grid, &Reachability::bounded('#'), start, steps)?;

    reached
        .count_exactly(steps)
        .ok_or_else(|| miette!("search stopped before {steps} steps"))
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    Ok(reachable_plots(input, STEPS)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    const EXAMPLE: &str = "...........
.....###.#.
.###.##..#.
..#.#...#..
....#.#....
.##..S####.
.##..#...#.
.......##..
.##.#.####.
.##..##.##.
...........";

    #[rstest]
    #[case(0, 1)]
    #[case(1, 2)]
    #[case(2, 4)]
    #[case(3, 6)]
    #[case(6, 16)]
    fn it_works(#[case] steps: usize, #[case] expected: usize) -> Result<()> {
        assert_eq!(expected, reachable_plots(EXAMPLE, steps)?);
        Ok(())
    }

    #[test]
    fn whole_garden_settles_into_alternating_plots() -> Result<()> {
        // Far more steps than the garden needs, odd and even counts split it
        let even = reachable_plots(EXAMPLE, 64)?;
        let odd = reachable_plots(EXAMPLE, 65)?;
        assert_eq!(even, reachable_plots(EXAMPLE, 100)?);
        assert_eq!(odd, reachable_plots(EXAMPLE, 101)?);
        Ok(())
    }
}
