pub mod app;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let (config, problems) = shared::config::load_config();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level());
    console_error_panic_hook::set_once();

    for problem in problems {
        log::warn!("config: {}", problem);
    }
    log::info!(
        "starting admin: page_size={}, load_delay_ms={}",
        config.page_size,
        config.load_delay_ms
    );

    leptos::mount::mount_to_body(move || leptos::view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
