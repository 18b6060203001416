//! SNT Helium Client
//!
//! Yew WASM frontend application.
//!
//! This crate is WASM-only. Use `trunk build` or `cargo check --target wasm32-unknown-unknown`.

#[cfg(not(target_arch = "wasm32"))]
compile_error!(
    "helium-client only supports wasm32 target. Use: cargo check -p helium-client --target wasm32-unknown-unknown"
);

mod app;
mod components;
mod pages;
mod routes;

use app::App;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_web::MakeWebConsoleWriter;

fn main() {
    // Report WASM panics to the browser console.
    console_error_panic_hook::set_once();

    // Initialize tracing for wasm with tracing-web
    let filter = EnvFilter::new("info");

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();

    tracing::info!("starting helium-client");

    yew::Renderer::<App>::new().render();
}
