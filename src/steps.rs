use std::str::FromStr;
use tracing::debug;

use crate::error::{Error, Result};
use crate::vector::Vector;

/// Direction letter of a motion command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    /// Unit step for this direction; y grows upward
    pub fn unit(self) -> Vector {
        match self {
            Direction::Right => Vector::new(1, 0),
            Direction::Left => Vector::new(-1, 0),
            Direction::Up => Vector::new(0, 1),
            Direction::Down => Vector::new(0, -1),
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "R" => Ok(Direction::Right),
            "L" => Ok(Direction::Left),
            "U" => Ok(Direction::Up),
            "D" => Ok(Direction::Down),
            _ => Err(Error::UnknownDirection {
                line: 0,
                letter: s.to_string(),
            }),
        }
    }
}

/// One parsed `"<D> <count>"` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub direction: Direction,
    pub count: u32,
}

impl Command {
    /// Expand into `count` unit steps
    pub fn steps(self) -> impl Iterator<Item = Vector> {
        std::iter::repeat(self.direction.unit()).take(self.count as usize)
    }
}

impl FromStr for Command {
    type Err = Error;

    /// Line numbers are filled in by the caller
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || Error::MalformedCommand {
            line: 0,
            text: s.to_string(),
        };

        // Exactly one space between two non-empty fields
        let Some((letter, count)) = s.split_once(' ') else {
            return Err(malformed());
        };
        let is_field = |f: &str| !f.is_empty() && !f.contains(char::is_whitespace);
        if !is_field(letter) || !is_field(count) {
            return Err(malformed());
        }

        let direction: Direction = letter.parse()?;
        let count = count.parse::<u32>().map_err(|_| Error::InvalidCount {
            line: 0,
            text: count.to_string(),
        })?;

        Ok(Command { direction, count })
    }
}

/// Parse command lines
///
/// Every line must be `<letter> <count>`; blank lines are malformed too.
/// Stops at the first bad line; the error carries its 1-based number.
pub fn parse_commands<I, S>(lines: I) -> Result<Vec<Command>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut commands = Vec::new();
    for (index, line) in lines.into_iter().enumerate() {
        let command = line.as_ref().parse::<Command>().map_err(|e| e.at_line(index + 1))?;
        commands.push(command);
    }
    Ok(commands)
}

/// Expand command lines into the ordered sequence of unit head steps
pub fn produce_steps<I, S>(lines: I) -> Result<Vec<Vector>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let commands = parse_commands(lines)?;
    let steps: Vec<Vector> = commands.iter().flat_map(|c| c.steps()).collect();
    debug!(commands = commands.len(), steps = steps.len(), "commands expanded");
    Ok(steps)
}
