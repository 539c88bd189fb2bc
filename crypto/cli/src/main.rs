use std::process::ExitCode;

use clap::Parser;

use sample_crypto::{CryptoError, Status};

mod cli;
mod commands;

use self::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.init_logging();

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let status = e
                .chain()
                .find_map(|cause| cause.downcast_ref::<CryptoError>())
                .map(CryptoError::status)
                .unwrap_or(Status::Unexpected);
            eprintln!("error ({status}): {e:#}");
            ExitCode::from(status.to_u32() as u8)
        }
    }
}
