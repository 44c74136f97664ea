use std::collections::HashSet;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::vector::Vector;

/// A rope of knots on the grid
///
/// `knots[0]` is the head, driven by external steps. Every other knot follows
/// the knot ahead of it. Positions occupied by the last knot are recorded.
#[derive(Debug, Clone)]
pub struct Chain {
    knots: Vec<Vector>,
    /// Every distinct position the tail has occupied, including its start
    visited: HashSet<Vector>,
    steps_applied: usize,
}

impl Chain {
    /// Create a chain of `knot_count` knots, all stacked on `start`
    ///
    /// `start` must fit in `i32` on both axes.
    pub fn new(knot_count: usize, start: Vector) -> Result<Self> {
        if knot_count < 2 {
            return Err(Error::InvalidKnotCount(knot_count));
        }
        if !start.fits_i32() {
            return Err(Error::StartOutOfRange(start));
        }

        debug!(knots = knot_count, %start, "chain created");

        Ok(Chain {
            knots: vec![start; knot_count],
            visited: HashSet::from([start]),
            steps_applied: 0,
        })
    }

    /// Build a chain from explicit knot positions (head first)
    #[cfg(test)]
    pub(crate) fn from_knots(knots: Vec<Vector>) -> Result<Self> {
        if knots.len() < 2 {
            return Err(Error::InvalidKnotCount(knots.len()));
        }
        let tail = knots[knots.len() - 1];
        Ok(Chain {
            knots,
            visited: HashSet::from([tail]),
            steps_applied: 0,
        })
    }

    /// Move the head by `step` and pull every follower along, head to tail
    pub fn apply_step_to_head(&mut self, step: Vector) -> &mut Self {
        self.knots[0] = self.knots[0] + step;
        self.steps_applied += 1;

        // Each follower reads the already-updated position of its leader
        for i in 0..self.knots.len() - 1 {
            self.follow_knot(i);
        }

        trace!(
            step = self.steps_applied,
            head = %self.head(),
            tail = %self.tail(),
            "step applied"
        );
        self
    }

    /// Drive the chain over a whole step sequence and return the tail visit count
    pub fn apply_steps<I>(&mut self, steps: I) -> usize
    where
        I: IntoIterator<Item = Vector>,
    {
        for step in steps {
            self.apply_step_to_head(step);
        }
        debug!(
            steps = self.steps_applied,
            visits = self.visited.len(),
            "step sequence finished"
        );
        self.count_tail_visits()
    }

    /// Pull `knots[i + 1]` one cell towards `knots[i]` if they no longer touch
    fn follow_knot(&mut self, i: usize) {
        let diff = self.knots[i] - self.knots[i + 1];
        if diff.is_touching() {
            return;
        }

        let moved = self.knots[i + 1] + diff.sign();
        self.knots[i + 1] = moved;

        if i + 1 == self.knots.len() - 1 {
            self.visited.insert(moved);
        }
    }

    /// Number of distinct positions visited by the tail
    pub fn count_tail_visits(&self) -> usize {
        self.visited.len()
    }

    pub fn knots(&self) -> &[Vector] {
        &self.knots
    }

    pub fn head(&self) -> Vector {
        self.knots[0]
    }

    pub fn tail(&self) -> Vector {
        self.knots[self.knots.len() - 1]
    }

    /// Number of knots, head included
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.knots.len()
    }

    pub fn visited(&self) -> &HashSet<Vector> {
        &self.visited
    }

    pub fn steps_applied(&self) -> usize {
        self.steps_applied
    }
}
