mod codec;
mod config;
mod core;
mod domain;
mod session;

use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let config = config::GeoMarkConfig::load();
    let initial = std::env::args_os().nth(1).map(PathBuf::from);
    core::app::run(config, initial)
}
