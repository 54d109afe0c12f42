pub mod cli;
pub mod config;
pub mod core;
pub mod logging;

pub use crate::cli::{Cli, run};
pub use crate::core::{EchoError, EchoReport, Result};
