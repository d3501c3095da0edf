use crate::config::Config;
use crate::error::MaterializeError;
use crate::{materialize, observability};
use std::path::PathBuf;

pub fn run(config: Config) -> Result<(), MaterializeError> {
    tracing::info!(root = %config.root.display(), "materializing templates");
    materialize::materialize(&config.root)
}

pub fn run_standalone(config: Config) -> Result<(), MaterializeError> {
    let default_level = startup_log_level(&config).to_string();
    let tracing_settings = observability::init_from_env(&default_level);
    tracing::debug!(
        log_filter = tracing_settings.filter,
        log_format = tracing_settings.log_format.as_str(),
        "initialized tracing subscriber"
    );
    run(config)
}

pub fn run_from_env() -> Result<(), MaterializeError> {
    let config = Config::from_env().map_err(MaterializeError::Config)?;
    run_standalone(config)
}

pub fn run_in(root: PathBuf) -> Result<(), MaterializeError> {
    let config = Config::from_env_with_root(root).map_err(MaterializeError::Config)?;
    run_standalone(config)
}

fn startup_log_level(config: &Config) -> &str {
    config.log_level.as_str()
}
