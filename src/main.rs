use lifestyle_stats::{run, AnalysisConfig};
use std::io;
use std::process::ExitCode;
use tracing::Level;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let config = AnalysisConfig::default();
    let mut stdout = io::stdout().lock();

    match run(&config, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
