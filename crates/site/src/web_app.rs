//! Root component wiring the desktop runtime into the page.

use leptos::*;
use leptos_meta::*;
use webdesk_runtime::{DesktopProvider, DesktopShell};

#[component]
/// Page root: metadata plus the provided desktop shell.
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="WebDesk" />
        <Meta name="description" content="A browser-hosted desktop environment simulator." />

        <main class="site-root">
            <DesktopProvider>
                <DesktopShell />
            </DesktopProvider>
        </main>
    }
}
