use miette::*;

use aoc2023_day_17::{part1, part2};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/input.txt"))
        .into_diagnostic()
        .wrap_err("failed to read input.txt")?;
    println!("{}", part1::process(&input)?);
    println!("{}", part2::process(&input)?);
    Ok(())
}
