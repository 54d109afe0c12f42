use std::io;
use std::process::ExitCode;

use echo_agent::cli;
use echo_agent::core::EchoError;
use echo_agent::logging;

fn main() -> ExitCode {
    let _log = logging::init();

    let result = cli::run(std::env::args_os(), &mut io::stdout().lock());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(EchoError::Argument(e)) => e.exit(),
        Err(e) => {
            tracing::warn!("Echo agent failed: {e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
