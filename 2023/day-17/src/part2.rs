use miette::*;

use crate::part1::{least_heat_loss, parse_costs};

const MIN_RUN: u8 = 4;
const MAX_RUN: u8 = 10;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let costs = parse_costs(input)?;
    let heat_loss = least_heat_loss(&costs, MIN_RUN, MAX_RUN)?;

    Ok(heat_loss.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(
        "2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533",
        "94"
    )]
    #[case(
        "111111111111
999999999991
999999999991
999999999991
999999999991",
        "71"
    )]
    fn it_works(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }

    #[test]
    fn too_short_to_stop_is_unreachable() {
        // Three blocks never allow the four-block minimum run
        assert!(process("111").is_err());
    }
}
