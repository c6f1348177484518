use atrium_config::Config;
use atrium_dioxus::catalog::App;
use dioxus::prelude::*;
use std::process;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("atrium catalog starting up!");

    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());

    // Check the config file up front so a broken one fails loudly instead
    // of silently falling back to defaults inside the app.
    match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded config: {config:?}");
        }
        Ok(None) => {
            log::info!("No config file found, using defaults");
        }
        Err(e) => {
            log::error!("Config::load() failed with error: {e}");
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Fix or remove {}", config_path.display());
            process::exit(1);
        }
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

fn app_root() -> Element {
    // Re-load the config; launch() takes a plain fn so state cannot be
    // passed in directly.
    let config = match Config::load() {
        Ok(Some(config)) => config,
        _ => Config::default(),
    };

    rsx! {
        App { config: config }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("atrium catalog")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
