use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::chain::Chain;
use crate::error::{Error, Result};
use crate::vector::Vector;

/// Summary of one finished simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Number of knots, head included
    pub knot_count: usize,
    pub start: Vector,
    pub steps_applied: usize,
    /// Final knot positions, head first
    pub knots: Vec<Vector>,
    pub tail_visits: usize,
}

impl RunReport {
    /// Snapshot a chain after it has been driven
    pub fn from_chain(chain: &Chain, start: Vector) -> Self {
        RunReport {
            knot_count: chain.len(),
            start,
            steps_applied: chain.steps_applied(),
            knots: chain.knots().to_vec(),
            tail_visits: chain.count_tail_visits(),
        }
    }

    /// Save to file as pretty JSON
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from file
    #[cfg(test)]
    pub(crate) fn load_from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&json)?)
    }
}
