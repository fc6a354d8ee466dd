//! startracker-dev - deploy, restart and follow the OreSat star tracker service

use std::process::ExitCode;

use startracker_dev::cli::Cli;
use startracker_dev::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let (cli, actions) = match Cli::try_parse_ordered(std::env::args_os()) {
        Ok(parsed) => parsed,
        Err(e) => {
            let _ = e.print();
            // Malformed options exit 1; --help and --version exit 0.
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    logging::init(cli.verbose);

    match cli.run(actions).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
