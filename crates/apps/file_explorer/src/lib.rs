//! File-explorer desktop app: a mock folder view over a fixed listing.
//!
//! Purely presentational. The listing is static, selection and the current
//! place live in window-local signals, and nothing touches a real
//! filesystem.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::*;
use webdesk_contract::AppMountContext;
use webdesk_ui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Folder,
    File,
}

impl EntryKind {
    fn icon(self) -> IconName {
        match self {
            Self::Folder => IconName::ExplorerFolder,
            Self::File => IconName::DocumentText,
        }
    }
}

#[derive(Clone, Copy)]
struct FileEntry {
    name: &'static str,
    kind: EntryKind,
    size: Option<&'static str>,
    modified: &'static str,
}

const MOCK_ENTRIES: [FileEntry; 6] = [
    FileEntry {
        name: "Documents",
        kind: EntryKind::Folder,
        size: None,
        modified: "2024-01-15",
    },
    FileEntry {
        name: "Pictures",
        kind: EntryKind::Folder,
        size: None,
        modified: "2024-01-14",
    },
    FileEntry {
        name: "Music",
        kind: EntryKind::Folder,
        size: None,
        modified: "2024-01-13",
    },
    FileEntry {
        name: "notes.txt",
        kind: EntryKind::File,
        size: Some("2 KB"),
        modified: "2024-01-15",
    },
    FileEntry {
        name: "budget.xlsx",
        kind: EntryKind::File,
        size: Some("156 KB"),
        modified: "2024-01-12",
    },
    FileEntry {
        name: "presentation.pptx",
        kind: EntryKind::File,
        size: Some("4.2 MB"),
        modified: "2024-01-10",
    },
];

const SIDEBAR_PLACES: [(&str, IconName); 4] = [
    ("This PC", IconName::Desktop),
    ("Documents", IconName::ExplorerFolder),
    ("Pictures", IconName::ExplorerFolder),
    ("Music", IconName::ExplorerFolder),
];

#[component]
/// File-explorer window contents.
pub fn FileExplorerApp(
    /// Mount context from the hosting window.
    ctx: AppMountContext,
) -> impl IntoView {
    let selected = create_rw_signal(None::<usize>);
    let current_path = create_rw_signal("This PC".to_string());

    view! {
        <AppShell layout_class="app-file-explorer" window_attr=ctx.window_attr()>
            <div class="explorer-workspace">
                <aside class="explorer-sidebar" aria-label="Places">
                    {SIDEBAR_PLACES
                        .iter()
                        .map(|(label, icon)| {
                            let label = *label;
                            let icon = *icon;
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if current_path.get() == label {
                                            "explorer-place selected"
                                        } else {
                                            "explorer-place"
                                        }
                                    }
                                    on:click=move |_| current_path.set(label.to_string())
                                >
                                    <span class="explorer-place-icon" aria-hidden="true">
                                        <Icon icon=icon size=IconSize::Sm />
                                    </span>
                                    <span>{label}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </aside>

                <section class="explorer-pane">
                    <ToolBar>
                        <Button variant=ButtonVariant::Primary size=ButtonSize::Sm>"New"</Button>
                        <Button size=ButtonSize::Sm>"Copy"</Button>
                        <Button size=ButtonSize::Sm>"Paste"</Button>
                        <span class="explorer-path">{move || current_path.get()}</span>
                    </ToolBar>

                    <div class="explorer-list" role="listbox" aria-label="Folder contents">
                        {(0..MOCK_ENTRIES.len())
                            .map(|idx| {
                                view! {
                                    <ExplorerRow
                                        idx=idx
                                        entry=MOCK_ENTRIES[idx]
                                        selected=selected
                                    />
                                }
                            })
                            .collect_view()}
                    </div>

                    <StatusBar>
                        <span>{format!("{} items", MOCK_ENTRIES.len())}</span>
                        <span>
                            {move || {
                                selected
                                    .get()
                                    .map(|idx| format!("Selected: {}", MOCK_ENTRIES[idx].name))
                                    .unwrap_or_else(|| "Ready".to_string())
                            }}
                        </span>
                    </StatusBar>
                </section>
            </div>
        </AppShell>
    }
}

#[component]
fn ExplorerRow(
    idx: usize,
    entry: FileEntry,
    selected: RwSignal<Option<usize>>,
) -> impl IntoView {
    let is_selected = Signal::derive(move || selected.get() == Some(idx));

    view! {
        <button
            type="button"
            role="option"
            aria-selected=move || is_selected.get()
            class=move || {
                if is_selected.get() {
                    "explorer-row selected"
                } else {
                    "explorer-row"
                }
            }
            on:click=move |_| selected.set(Some(idx))
        >
            <span class="explorer-row-icon" aria-hidden="true">
                <Icon icon=entry.kind.icon() size=IconSize::Sm />
            </span>
            <span class="explorer-row-name">
                <span>{entry.name}</span>
                {entry
                    .size
                    .map(|size| view! { <span class="explorer-row-size">{size}</span> })}
            </span>
            <span class="explorer-row-modified">{entry.modified}</span>
        </button>
    }
}
