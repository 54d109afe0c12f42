//! The text an echo agent prints back for the arguments it received.

use std::fmt;
use std::io::{self, Write};

pub const HEADER: &str = "Echo agent received:";
pub const MODEL_NOT_SPECIFIED: &str = "not specified";
pub const PLACEHOLDER_NOTICE: &str = "This is a placeholder agent that just echoes its input.";
pub const REPLACE_NOTICE: &str = "Replace this with your actual agent implementation.";

/// Model and prompt as handed to the agent.
///
/// An empty model and an absent model are the same state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EchoReport {
    model: String,
    prompt: String,
}

impl EchoReport {
    #[must_use]
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
        }
    }

    #[must_use]
    pub fn model(&self) -> Option<&str> {
        (!self.model.is_empty()).then_some(self.model.as_str())
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

impl fmt::Display for EchoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADER}")?;
        writeln!(f, "  Model: {}", self.model().unwrap_or(MODEL_NOT_SPECIFIED))?;
        writeln!(f, "  Prompt: {}", self.prompt)?;
        writeln!(f)?;
        writeln!(f, "{PLACEHOLDER_NOTICE}")?;
        writeln!(f, "{REPLACE_NOTICE}")
    }
}
