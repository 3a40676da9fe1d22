use clap::Parser;
use french_numbers::cli::{execute_command, get_log_level, Cli};
use french_numbers::config::ConfigLoader;
use tracing::{debug, error, trace};

fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::new().and_then(|loader| loader.load(cli.config.as_deref())) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let log_level = get_log_level(cli.verbose, config.get_log_level());

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2) // Show target module for -vv and above
        .with_thread_ids(cli.verbose >= 3) // Show thread IDs for -vvv
        .with_line_number(cli.verbose >= 3) // Show line numbers for -vvv
        .init();

    debug!("french-numbers started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
    trace!("Effective configuration: {:?}", config);
    config.log_ignored_env();

    if let Err(e) = execute_command(cli.command, &config) {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
