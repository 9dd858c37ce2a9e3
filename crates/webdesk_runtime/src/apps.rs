//! The static application catalog and window-content mounting.
//!
//! The catalog is fixed at compile time and never mutated; the registry only
//! ever stores `AppId` back-references into it.

use leptos::*;

use webdesk_app_calculator::CalculatorApp;
use webdesk_app_file_explorer::FileExplorerApp;
use webdesk_app_notepad::NotepadApp;
use webdesk_app_settings::SettingsApp;
use webdesk_contract::{AppHost, AppMountContext};
use webdesk_ui::IconName;

use crate::model::{AppId, WindowRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Static metadata for one launchable application.
pub struct AppDescriptor {
    /// Catalog identity; windows hold this as a back-reference.
    pub app_id: AppId,
    /// Label shown under desktop icons, in the start menu, and as the
    /// initial window title.
    pub display_name: &'static str,
    /// Icon rendered wherever the app is represented.
    pub icon: IconName,
}

/// The fixed, ordered application catalog.
const APP_CATALOG: [AppDescriptor; 4] = [
    AppDescriptor {
        app_id: AppId::FileExplorer,
        display_name: "File Explorer",
        icon: IconName::ExplorerFolder,
    },
    AppDescriptor {
        app_id: AppId::Notepad,
        display_name: "Notepad",
        icon: IconName::DocumentText,
    },
    AppDescriptor {
        app_id: AppId::Calculator,
        display_name: "Calculator",
        icon: IconName::Calculator,
    },
    AppDescriptor {
        app_id: AppId::Settings,
        display_name: "Settings",
        icon: IconName::Settings,
    },
];

/// Returns the full ordered catalog.
pub fn app_catalog() -> &'static [AppDescriptor] {
    &APP_CATALOG
}

/// Returns the descriptor for an application id.
pub fn descriptor(app_id: AppId) -> &'static AppDescriptor {
    APP_CATALOG
        .iter()
        .find(|entry| entry.app_id == app_id)
        .expect("catalog covers every app id")
}

/// Mounts the content panel for a window's application.
pub fn render_window_contents(window: &WindowRecord, host: AppHost) -> View {
    let ctx = AppMountContext {
        window_id: window.id.0,
        host,
    };
    match window.app_id {
        AppId::FileExplorer => view! { <FileExplorerApp ctx=ctx /> }.into_view(),
        AppId::Notepad => view! { <NotepadApp ctx=ctx /> }.into_view(),
        AppId::Calculator => view! { <CalculatorApp ctx=ctx /> }.into_view(),
        AppId::Settings => view! { <SettingsApp ctx=ctx /> }.into_view(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn catalog_order_matches_the_desktop_layout() {
        let ids: Vec<AppId> = app_catalog().iter().map(|d| d.app_id).collect();
        assert_eq!(
            ids,
            vec![
                AppId::FileExplorer,
                AppId::Notepad,
                AppId::Calculator,
                AppId::Settings
            ]
        );
    }

    #[test]
    fn descriptor_titles_match_the_app_ids() {
        for entry in app_catalog() {
            assert_eq!(entry.display_name, entry.app_id.title());
            assert_eq!(descriptor(entry.app_id).app_id, entry.app_id);
        }
    }
}
