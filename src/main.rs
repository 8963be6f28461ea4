//! Browser entry point (CSR mount via Trunk).

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        leptos::mount::mount_to_body(authpanel::app::App);
    }
}
