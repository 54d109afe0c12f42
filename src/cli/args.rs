//! CLI argument definitions.

use clap::Parser;

use crate::core::EchoReport;

#[derive(Parser, Debug)]
#[command(name = "echo-agent")]
#[command(author, about, long_about = None)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Model to use
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub model: String,

    /// Prompt/instruction to process
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub prompt: String,

    /// Flag parsing stops at the first positional argument; it and the rest are ignored.
    #[arg(num_args = 1.., trailing_var_arg = true, hide = true)]
    pub ignored: Vec<String>,
}

impl From<&Cli> for EchoReport {
    fn from(cli: &Cli) -> Self {
        Self::new(cli.model.as_str(), cli.prompt.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("echo-agent").chain(args.iter().copied()))
    }

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_are_empty() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.model, "");
        assert_eq!(cli.prompt, "");
        assert!(cli.ignored.is_empty());
    }

    #[test]
    fn test_equals_and_space_forms() {
        let eq = parse(&["--model=gpt-x", "--prompt=hello world"]).unwrap();
        let sp = parse(&["--model", "gpt-x", "--prompt", "hello world"]).unwrap();
        assert_eq!(eq.model, sp.model);
        assert_eq!(eq.prompt, sp.prompt);
        assert_eq!(sp.prompt, "hello world");
    }

    #[test]
    fn test_empty_value_after_equals() {
        let cli = parse(&["--model="]).unwrap();
        assert_eq!(cli.model, "");
    }

    #[test]
    fn test_value_may_start_with_hyphen() {
        let cli = parse(&["--prompt", "-v"]).unwrap();
        assert_eq!(cli.prompt, "-v");
    }

    #[test]
    fn test_last_repeated_value_wins() {
        let cli = parse(&["--model=a", "--model=b"]).unwrap();
        assert_eq!(cli.model, "b");
    }

    #[test]
    fn test_positional_stops_flag_parsing() {
        let cli = parse(&["--model=m", "extra", "--unknown"]).unwrap();
        assert_eq!(cli.model, "m");
        assert_eq!(cli.ignored, ["extra", "--unknown"]);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let err = parse(&["--unknown"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_version_flag_is_rejected() {
        for flag in ["--version", "-V"] {
            let err = parse(&[flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        }
    }

    #[test]
    fn test_double_dash_stops_flag_parsing() {
        let cli = parse(&["--model=m", "--", "--prompt=x"]).unwrap();
        assert_eq!(cli.model, "m");
        assert_eq!(cli.prompt, "");
        assert_eq!(cli.ignored, ["--prompt=x"]);
    }

    #[test]
    fn test_missing_value_is_rejected() {
        let err = parse(&["--model"]).unwrap_err();
        assert_ne!(err.kind(), ErrorKind::DisplayHelp);
        assert!(err.use_stderr());
    }

    #[test]
    fn test_report_from_cli() {
        let cli = parse(&["--model=claude", "--prompt=hi"]).unwrap();
        let report = EchoReport::from(&cli);
        assert_eq!(report.model(), Some("claude"));
        assert_eq!(report.prompt(), "hi");
    }
}
