use std::fs;
use std::path::Path;
use tracing::info;

use crate::chain::Chain;
use crate::error::{Error, Result};
use crate::steps::produce_steps;
use crate::vector::Vector;

/// Knot count of the short rope variant
pub const SHORT_CHAIN: usize = 2;
/// Knot count of the long rope variant
pub const LONG_CHAIN: usize = 10;

/// Read a command file into lines
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(contents.lines().map(str::to_string).collect())
}

/// Build a chain and drive it over `steps`
pub fn simulate(steps: &[Vector], knot_count: usize, start: Vector) -> Result<Chain> {
    let mut chain = Chain::new(knot_count, start)?;
    chain.apply_steps(steps.iter().copied());
    Ok(chain)
}

/// Parse command lines and return the tail visit count for a chain of `knot_count`
pub fn count_visits<I, S>(lines: I, knot_count: usize) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let steps = produce_steps(lines)?;
    Ok(simulate(&steps, knot_count, Vector::ORIGIN)?.count_tail_visits())
}

/// Simulate a command file with the chain starting at the origin
pub fn run_on_file(path: &Path, knot_count: usize) -> Result<usize> {
    let lines = read_lines(path)?;
    let visits = count_visits(&lines, knot_count)?;
    info!(path = %path.display(), knots = knot_count, visits, "file simulated");
    Ok(visits)
}
