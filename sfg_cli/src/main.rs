use std::process::ExitCode;

use clap::Parser;

mod cli;
mod logging;

fn main() -> ExitCode {
    let args = cli::Cli::parse();
    logging::init(args.log_level);

    match cli::run(&args) {
        Ok(cli::Outcome::Written(path)) => {
            tracing::debug!(path = %path.display(), "done");
            ExitCode::SUCCESS
        }
        // bad vendor or serial: usage was printed, nothing written
        Ok(cli::Outcome::Usage) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "run failed");
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
