//! InsideBox UI
//!
//! Login, registration, and dashboard front-end built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. There is no backend: submitting a form logs the captured
//! values to the browser console and navigates, nothing more.

use leptos::*;

mod app;
mod components;
mod forms;
mod pages;
mod state;
mod theme;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
