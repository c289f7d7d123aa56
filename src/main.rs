// src/main.rs

use std::io;
use std::process;
use env_logger::Env;
use log::{error, warn};
use polycalc::config::PolycalcConfig;
use polycalc::console;

fn main() {
    let (config, config_error) = match PolycalcConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (PolycalcConfig::default(), Some(e)),
    };

    // Initialize the logger
    let env = Env::default()
        .filter_or("POLYCALC_LOG_FILTER", config.log_level.as_str())
        .write_style_or("POLYCALC_LOG_STYLE", "auto");

    env_logger::Builder::from_env(env).init();

    if let Some(e) = config_error {
        warn!("Using default configuration: {}", e);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = console::run_session(stdin.lock(), stdout.lock(), &config) {
        error!("{}", e);
        process::exit(1);
    }
}
