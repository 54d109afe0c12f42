pub mod error;
pub mod report;

pub use error::{EchoError, Result};
pub use report::EchoReport;
