use tidepool::{FluidConfig, ViewerError};

fn load_config() -> Result<FluidConfig, ViewerError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading config from {}", path);
            Ok(FluidConfig::load(&path)?)
        }
        None => Ok(FluidConfig::default()),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = load_config().and_then(tidepool::window::run) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
