//! Notepad desktop app: a plain text editor with window-local content.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::*;
use webdesk_contract::AppMountContext;
use webdesk_ui::prelude::*;

const WELCOME_TEXT: &str = "Welcome to WebDesk Notepad!\n\n\
This is a simple text editor in the spirit of the classics.\n\n\
Anything you type lives in this window and is discarded when it closes.\n\n\
Features:\n\
- Basic text editing\n\
- Live length and line counts\n\
- Classic desktop interface\n\n\
Try typing something below:";

#[component]
/// Notepad window contents.
pub fn NotepadApp(
    /// Mount context from the hosting window.
    ctx: AppMountContext,
) -> impl IntoView {
    let host = ctx.host;
    let content = create_rw_signal(WELCOME_TEXT.to_string());
    let file_menu_open = create_rw_signal(false);

    let length = Signal::derive(move || content.with(|text| text.chars().count()));
    let line_count = Signal::derive(move || content.with(|text| text.split('\n').count()));

    view! {
        <AppShell layout_class="app-notepad" window_attr=ctx.window_attr()>
            <MenuBar>
                <div class="notepad-file-menu">
                    <Button
                        variant=ButtonVariant::Quiet
                        selected=file_menu_open
                        on_click=Callback::new(move |_| {
                            file_menu_open.update(|open| *open = !*open);
                        })
                    >
                        "File"
                    </Button>
                    <Show when=move || file_menu_open.get() fallback=|| ()>
                        <div class="notepad-file-dropdown" role="menu" aria-label="File menu">
                            <button
                                type="button"
                                role="menuitem"
                                class="notepad-menu-item"
                                on:click=move |_| {
                                    file_menu_open.set(false);
                                    host.request_close();
                                }
                            >
                                "Exit"
                            </button>
                        </div>
                    </Show>
                </div>
                <Button variant=ButtonVariant::Quiet>"Edit"</Button>
                <Button variant=ButtonVariant::Quiet>"Format"</Button>
                <Button variant=ButtonVariant::Quiet>"View"</Button>
                <Button variant=ButtonVariant::Quiet>"Help"</Button>
            </MenuBar>

            <textarea
                class="ui-textarea notepad-page"
                data-ui-primitive="true"
                data-ui-kind="text-area"
                spellcheck="false"
                autocomplete="off"
                aria-label="Notepad document editor"
                placeholder="Start typing here..."
                prop:value=move || content.get()
                on:input=move |ev| content.set(event_target_value(&ev))
            ></textarea>

            <StatusBar>
                <span>{move || format!("Length: {}", length.get())}</span>
                <span>{move || format!("Lines: {}", line_count.get())}</span>
            </StatusBar>
        </AppShell>
    }
}
