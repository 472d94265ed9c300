//! Ledgerly
//!
//! Personal finance manager frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - Spending categories (list / create / edit / delete)
//! - Ledger entries tagged with a category
//! - Route-driven forms with server-side validation feedback
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the Ledgerly REST API via HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod model;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
