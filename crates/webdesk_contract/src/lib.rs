//! Shared contract types between the desktop window manager and hosted apps.
//!
//! An app is mounted into a managed window with an [`AppMountContext`]: the
//! identifier of the hosting window plus an [`AppHost`] handle for the few
//! requests an app may make of the shell. Apps own arbitrary private state;
//! that state lives and dies with the window.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::{Callable, Callback};

/// Stable identifier for a runtime-managed window.
pub type WindowRuntimeId = u64;

#[derive(Clone, Copy)]
/// Handle through which a hosted app talks back to the desktop shell.
pub struct AppHost {
    on_request_close: Callback<()>,
}

impl AppHost {
    /// Builds a host handle around the shell's close callback.
    pub fn new(on_request_close: Callback<()>) -> Self {
        Self { on_request_close }
    }

    /// Asks the shell to close the window hosting this app.
    pub fn request_close(&self) {
        self.on_request_close.call(());
    }
}

#[derive(Clone, Copy)]
/// Everything a hosted app receives when mounted into a managed window.
pub struct AppMountContext {
    /// Identifier of the hosting window.
    pub window_id: WindowRuntimeId,
    /// Shell host handle.
    pub host: AppHost,
}

impl AppMountContext {
    /// Value for the `data-app-window` attribute apps stamp on their root
    /// element, tying rendered app content back to its hosting window.
    pub fn window_attr(&self) -> String {
        self.window_id.to_string()
    }
}
