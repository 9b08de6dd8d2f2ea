#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use dioxus::desktop::{Config, WindowBuilder};
use folio::app::App;
use folio::storage::settings::load_settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const STYLESHEET: &str = include_str!("../assets/main.css");

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = load_settings();
    tracing::info!("Starting {}", settings.window_title);

    let config = Config::new()
        .with_window(WindowBuilder::new().with_title(settings.window_title.clone()))
        .with_custom_head(format!("<style>{}</style>", STYLESHEET));

    dioxus::LaunchBuilder::desktop().with_cfg(config).launch(App);
}
