use miapp_core::logging;

mod cli;

use crate::cli::CliCommand;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // File logging when the state dir is writable, stderr otherwise; either
    // way startup proceeds.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = CliCommand::run_from_args().await {
        eprintln!("miapp error: {:#}", err);
        std::process::exit(1);
    }
}
