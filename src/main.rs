use clap::Parser;
use csv_pivot::cli::{execute_command, get_log_level, Cli};
use csv_pivot::config::ConfigLoader;
use csv_pivot::error::PivotError;
use tracing::{debug, error, trace};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = ConfigLoader::new().with_path(cli.config.clone()).load();
    let configured_level = config.as_ref().ok().and_then(|c| c.log_level.clone());
    let log_level = get_log_level(cli.verbose, configured_level.as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2) // Show target module for -vv and above
        .with_thread_ids(cli.verbose >= 3) // Show thread IDs for -vvv
        .with_line_number(cli.verbose >= 3) // Show line numbers for -vvv
        .init();

    debug!("csv-pivot started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let result = match config {
        Ok(config) => execute_command(cli.command, config).await,
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {e:#}");
        let code = e
            .downcast_ref::<PivotError>()
            .map(PivotError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}
