mod args;
mod runner;

pub use args::Cli;
pub use runner::run;
