//! Msgfetch - minimal Dioxus web client.
//!
//! One page, one button: clicking "Fetch Message" issues a GET against the
//! configured backend's `/api/data` endpoint and shows either the returned
//! message or a fixed error string.

pub mod api_client;
pub mod config;
pub mod fetcher;
pub mod logging;

pub mod views;
