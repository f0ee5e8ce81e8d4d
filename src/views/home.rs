//! Home view: the fetch-and-display page.

use dioxus::prelude::*;

use crate::fetcher::MessageFetcher;
use crate::log_info;

/// The whole UI: a heading, the "Fetch Message" button, and a paragraph
/// showing the latest fetch outcome (empty until the first fetch completes).
///
/// Clicking the button while a request is in flight starts another one;
/// each response overwrites the paragraph as it arrives, so the
/// last-to-complete response is what stays visible.
#[component]
pub fn Home() -> Element {
    let fetcher = use_context::<MessageFetcher>();
    let mut message = use_signal(String::new);

    rsx! {
        div { style: "text-align: center; padding: 20px;",
            h1 { "Dioxus + Rust + WASM" }
            button {
                onclick: move |_| {
                    let fetcher = fetcher.clone();
                    async move {
                        let next = fetcher.fetch_message().await;
                        log_info!("Applying display message: {}", next);
                        message.set(next);
                    }
                },
                "Fetch Message"
            }
            p { "{message}" }
        }
    }
}
