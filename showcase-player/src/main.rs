use showcase_config::ShowcaseConfig;
use showcase_player::app;

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("showcase_player", LevelFilter::Debug)
        .filter_module("showcase_core", LevelFilter::Info)
        .init();
}

fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
        log::debug!("RUST_LOG not set, using default log filters");
    } else {
        env_logger::init();
    }

    let (config, source) = ShowcaseConfig::load_from_env()?;
    log::info!("Starting showcase with config from {:?}", source);

    app::run(config)
}
