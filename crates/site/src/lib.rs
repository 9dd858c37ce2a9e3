//! Browser entry crate for the WebDesk desktop shell.

pub mod web_app;

/// Installs the panic hook and mounts the shell onto the document body.
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(web_app::SiteApp);
}
