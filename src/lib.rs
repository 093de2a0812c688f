//! Document finder for a structured shipment-document share.
//!
//! Files live under `<root>/<year>/<month folder>/<shipment>/<category>/`.
//! The crate searches that tree by name, year, month and company, and
//! reports which document categories exist for a shipment code or a period.

pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod guard;
pub mod logging;
pub mod output;
pub mod report;
pub mod scanner;

pub use engine::Engine;
pub use error::{DocFinderError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_NO_RESULTS: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
