//! Binary entrypoint for the browser-hosted desktop shell.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    webdesk_site::mount();
}

#[cfg(not(all(target_arch = "wasm32", feature = "csr")))]
fn main() {
    eprintln!(
        "This binary targets the browser/WASM workflow. Build it for wasm32 with the `csr` feature (for example via `trunk serve`)."
    );
}
