//! Cadastro Chat Web - Main Entry Point
//!
//! Loads the base URL configuration and launches the Dioxus app. The
//! renderer (web or desktop) is picked by cargo feature.

use cadastro_chat_web::app::App;
use cadastro_chat_web::config::AppConfig;

fn main() {
    // Initialize tracing BEFORE launch so config loading is logged
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&"[WASM] Cadastro Chat - WASM initialized!".into());

    let config = AppConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Starting Cadastro Chat...");

    let builder = dioxus::LaunchBuilder::new();

    // Browser history rooted at the configured base, so the router strips
    // it from every location and prefixes it on every push
    #[cfg(all(feature = "web", target_arch = "wasm32"))]
    let builder = {
        let prefix = (!config.is_root()).then(|| config.base_url.clone());
        let history = dioxus::web::WebHistory::new(prefix, true);
        builder.with_cfg(dioxus::web::Config::new().history(std::rc::Rc::new(history)))
    };

    builder.with_context(config).launch(App);
}
