//! Cargo Orders Viewer - Main Entry Point
//!
//! Launches the Dioxus app. The native launcher reads the API base URL from
//! its CLI; browser builds use the compiled-in configuration.

use cargo_orders_viewer::app::App;

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use clap::Parser;

    use cargo_orders_viewer::config::{ApiConfig, API_BASE_ENV, DEFAULT_API_BASE};
    use cargo_orders_viewer::shared::errors::Result;

    #[derive(Debug, Parser)]
    #[command(name = "cargo-orders-viewer", about = "Browse upcoming and past cargo orders")]
    pub struct Cli {
        /// Base URL of the orders REST endpoint
        #[arg(long, env = API_BASE_ENV, default_value = DEFAULT_API_BASE)]
        pub api_base: String,
    }

    /// Name of the renderer compiled in, if any
    pub fn enabled_renderer() -> Option<&'static str> {
        if cfg!(feature = "desktop") {
            Some("desktop")
        } else if cfg!(feature = "web") {
            Some("web")
        } else {
            None
        }
    }

    impl Cli {
        pub fn api_config(&self) -> Result<ApiConfig> {
            ApiConfig::new(self.api_base.as_str())
        }
    }

}

// Native client (desktop)
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    cargo_orders_viewer::shared::logging::init_tracing();

    let cli = cli::Cli::parse();
    let config = match cli.api_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(2);
        }
    };

    let Some(renderer) = cli::enabled_renderer() else {
        tracing::error!("No renderer compiled in; rebuild with `--features desktop` or `--features web`");
        std::process::exit(1);
    };

    tracing::info!(
        base_url = config.base_url(),
        renderer = renderer,
        "Starting Cargo Orders Viewer..."
    );

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    use cargo_orders_viewer::config::ApiConfig;

    let config = ApiConfig::default();
    web_sys::console::log_1(
        &format!("[WASM] Cargo Orders Viewer - API base {}", config.base_url()).into(),
    );
    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}
