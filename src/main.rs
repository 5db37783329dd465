use clap::{error::ErrorKind, Parser};
use iamme::{AnnounceConfig, Announcer, Args};
use std::{error::Error as StdError, process::ExitCode};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints an error and the chain of errors that caused it.
fn report(err: &dyn StdError) {
    println!("error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        println!("  caused by: {cause}");
        source = cause.source();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            println!("{}", e.render());
            return ExitCode::FAILURE;
        }
    };

    init_tracing();

    let config = AnnounceConfig::from(args);
    tracing::debug!(
        "Announcing '{}' to {} (ciaddr from '{}')",
        config.interface,
        config.destination(),
        config.address_interface
    );

    match Announcer::new(config).run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}
