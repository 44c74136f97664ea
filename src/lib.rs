pub mod chain;
pub mod config;
pub mod error;
pub mod grid;
pub mod report;
pub mod run;
pub mod steps;
pub mod vector;

pub use chain::Chain;
pub use error::{Error, Result};
pub use report::RunReport;
pub use run::{count_visits, run_on_file, simulate, LONG_CHAIN, SHORT_CHAIN};
pub use steps::{produce_steps, Command, Direction};
pub use vector::Vector;
