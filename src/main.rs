//! Msgfetch - Main entry point
//!
//! A Dioxus web application that fetches a message from the configured
//! backend on demand and displays it.

#![allow(non_snake_case)]

use dioxus::prelude::*;
use msgfetch::config::BackendConfig;
use msgfetch::fetcher::MessageFetcher;
use msgfetch::views::Home;

fn main() {
    // Initialize tracing for native builds
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("msgfetch=debug")),
            )
            .init();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| MessageFetcher::new(BackendConfig::from_build_env()));

    rsx! {
        Home {}
    }
}
