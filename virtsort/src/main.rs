//! `virtsort` binary: runs the override-dispatch demo on standard output.

use std::{io, process::ExitCode};

fn main() -> ExitCode {
    #[cfg(feature = "tracing")]
    init_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match virtsort::run(&mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            #[cfg(feature = "tracing")]
            tracing::error!(error = %err, "demo failed");
            eprintln!("virtsort: {err}");
            ExitCode::FAILURE
        }
    }
}

// Logs go to stderr so stdout carries only the demo text.
#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
