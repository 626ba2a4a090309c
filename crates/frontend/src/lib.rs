pub mod app;
pub mod domain;
pub mod layout;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

/// Ponto de entrada do bundle wasm: liga o log no console do browser e
/// monta a raiz da aplicação no body.
#[wasm_bindgen(start)]
pub fn iniciar() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}
