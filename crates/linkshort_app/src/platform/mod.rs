//! Terminal front end: configuration, rendering, input and effect execution.
mod app;
mod clipboard;
pub mod config;
mod effects;
mod input;
mod logging;
#[cfg(test)]
mod test_support;
mod ui;

use linkshort_logging::{client_info, client_warn};

use config::{Args, ClientConfig};

/// Loads configuration, sets up logging and runs the interactive client.
pub fn run(args: Args) -> anyhow::Result<()> {
    let (config, warning) = ClientConfig::load(&args.config);
    let config = config.apply_args(&args);

    if args.print_config {
        println!("{}", config.to_ron()?);
        return Ok(());
    }

    logging::initialize(config.log_destination, config.level(), &config.log_file);
    if let Some(warning) = warning {
        client_warn!("{}", warning);
    }
    client_info!("starting linkshort against {}", config.backend_url);

    app::run_app(&config)
}
