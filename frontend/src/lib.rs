use wasm_bindgen::prelude::wasm_bindgen;

pub mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting enquiry console");

    leptos::spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
