#[cfg(target_arch = "wasm32")]
pub fn main() {
    use anteroom_web::app::App;
    use leptos::prelude::mount_to_body;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    mount_to_body(App);
}

// The binary only does something in the browser; native builds exist for
// `cargo test`.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
