//! WASM entry point for Leptos CSR app

use leptos::mount::mount_to_body;
use rutaboard_web::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    mount_to_body(App);
}
