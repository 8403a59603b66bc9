//! Tournament runner for Madness
//!
//! This crate provides infrastructure for:
//! - Loading regional teams and first-round matchups from JSON
//! - Playing every region, the semifinals and the championship
//! - Storing and reporting results
//!
//! # Usage
//!
//! ```bash
//! # Simulate the default four-region tournament from ./datasets
//! cargo run -p tournament --bin madness
//!
//! # Reproducible run with a stored report
//! cargo run -p tournament --bin madness -- --seed 7 --results results.json --report
//! ```

mod config;
mod data;
mod error;
mod results;
mod runner;

pub use config::*;
pub use data::*;
pub use error::*;
pub use results::*;
pub use runner::*;
