//! Semantic icon catalog and SVG renderer for the desktop shell.
//!
//! Components refer to icons by [`IconName`] and render them through the
//! single [`Icon`] component, so no raw SVG or emoji strings leak into shell
//! or app markup. Most path data is taken from Fluent UI System Icons
//! (`@fluentui/svg-icons`, regular 24px); the tray glyphs are local additions
//! drawn on the same grid.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by shell components and apps.
pub enum IconName {
    /// Calculator app icon.
    Calculator,
    /// File-explorer / folder icon.
    ExplorerFolder,
    /// Text document / notepad icon.
    DocumentText,
    /// Settings app icon.
    Settings,
    /// Paintbrush / personalization icon.
    PaintBrush,
    /// Start/launcher button glyph.
    Launcher,
    /// Desktop computer / "This PC" icon.
    Desktop,
    /// Speaker / volume tray glyph.
    Speaker,
    /// Battery tray glyph.
    Battery,
    /// Network tray glyph.
    Network,
    /// User account glyph.
    Person,
    /// Power options glyph.
    Power,
    /// Window minimize control icon.
    WindowMinimize,
    /// Window maximize control icon.
    WindowMaximize,
    /// Window restore control icon.
    WindowRestore,
    /// Dismiss/close icon.
    Dismiss,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Calculator => "calculator",
            Self::ExplorerFolder => "explorer-folder",
            Self::DocumentText => "document-text",
            Self::Settings => "settings",
            Self::PaintBrush => "paint-brush",
            Self::Launcher => "launcher",
            Self::Desktop => "desktop",
            Self::Speaker => "speaker",
            Self::Battery => "battery",
            Self::Network => "network",
            Self::Person => "person",
            Self::Power => "power",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
        }
    }

    /// Raw SVG body markup for the icon.
    fn svg_body(self) -> &'static str {
        match self {
            Self::Calculator => {
                r#"<path d="M7.75 5C6.78 5 6 5.78 6 6.75v1c0 .97.78 1.75 1.75 1.75h5.5c.97 0 1.75-.78 1.75-1.75v-1C15 5.78 14.22 5 13.25 5h-5.5ZM7.5 6.75c0-.14.11-.25.25-.25h5.5c.14 0 .25.11.25.25v1c0 .14-.11.25-.25.25h-5.5a.25.25 0 0 1-.25-.25v-1Zm3 4a1.25 1.25 0 1 0 0 2.5 1.25 1.25 0 0 0 0-2.5ZM9.25 15.5a1.25 1.25 0 1 1 2.5 0 1.25 1.25 0 0 1-2.5 0ZM7 10.75a1.25 1.25 0 1 0 0 2.5 1.25 1.25 0 0 0 0-2.5ZM5.75 15.5a1.25 1.25 0 1 1 2.5 0 1.25 1.25 0 0 1-2.5 0ZM14 10.75a1.25 1.25 0 1 0 0 2.5 1.25 1.25 0 0 0 0-2.5Zm-1.25 4.75a1.25 1.25 0 1 1 2.5 0 1.25 1.25 0 0 1-2.5 0ZM6.14 2A3.14 3.14 0 0 0 3 5.14v11.22c0 1.74 1.4 3.14 3.14 3.14h8.72c1.74 0 3.14-1.4 3.14-3.14V5.14C18 3.4 16.6 2 14.86 2H6.14ZM4.5 5.14c0-.9.73-1.64 1.64-1.64h8.72c.9 0 1.64.73 1.64 1.64v11.22c0 .9-.73 1.64-1.64 1.64H6.14c-.9 0-1.64-.73-1.64-1.64V5.14Zm1.3 15.35c.45.9 1.38 1.51 2.46 1.51h6.99c2.9 0 5.25-2.35 5.25-5.25v-9.5c0-1.07-.62-2-1.51-2.46l.01.35V16.75a3.75 3.75 0 0 1-3.75 3.75H6.14l-.34-.01Z"/>"#
            }
            Self::ExplorerFolder => {
                r#"<path d="M3.5 6.25c0-.97.78-1.75 1.75-1.75h2.88c.2 0 .39.08.53.22l2.06 2.06c.14.14.33.22.53.22h5.5c.97 0 1.75.78 1.75 1.75 0 .09.01.17.04.25H8.72c-1.34 0-2.58.71-3.25 1.87L3.5 14.28V6.25ZM2 17.79A3.25 3.25 0 0 0 5.25 21h11.04c1.33 0 2.57-.72 3.24-1.88l3.03-5.25A3.25 3.25 0 0 0 19.96 9a.75.75 0 0 0 .04-.25c0-1.8-1.45-3.25-3.25-3.25h-5.19L9.72 3.66c-.42-.42-1-.66-1.6-.66H5.26A3.25 3.25 0 0 0 2 6.25V17.79Zm6.72-7.3h11.03a1.75 1.75 0 0 1 1.51 2.63l-3.03 5.25c-.4.7-1.14 1.13-1.95 1.13H5.25a1.75 1.75 0 0 1-1.51-2.63l3.03-5.25c.4-.7 1.14-1.12 1.95-1.12Z"/>"#
            }
            Self::DocumentText => {
                r#"<path d="M8.75 11.5a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm4.84-14.41L19.4 8.4A2 2 0 0 1 20 9.83V20a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4c0-1.1.9-2 2-2h6.17c.52 0 1.05.22 1.42.59ZM18 20.5a.5.5 0 0 0 .5-.5V10H14a2 2 0 0 1-2-2V3.5H6a.5.5 0 0 0-.5.5v16c0 .27.22.5.5.5h12Zm-.62-12L13.5 4.62V8c0 .28.22.5.5.5h3.38Z"/>"#
            }
            Self::Settings => {
                r#"<path d="M12 2a1 1 0 0 1 .98.8l.25 1.2a8.1 8.1 0 0 1 1.74.72l1.06-.64a1 1 0 0 1 1.24.15l1.58 1.58a1 1 0 0 1 .15 1.24l-.64 1.06c.3.55.54 1.13.72 1.74l1.2.25a1 1 0 0 1 .8.98v2.24a1 1 0 0 1-.8.98l-1.2.25a8.1 8.1 0 0 1-.72 1.74l.64 1.06a1 1 0 0 1-.15 1.24l-1.58 1.58a1 1 0 0 1-1.24.15l-1.06-.64a8.1 8.1 0 0 1-1.74.72l-.25 1.2a1 1 0 0 1-.98.8H9.76a1 1 0 0 1-.98-.8l-.25-1.2a8.1 8.1 0 0 1-1.74-.72l-1.06.64a1 1 0 0 1-1.24-.15l-1.58-1.58a1 1 0 0 1-.15-1.24l.64-1.06a8.1 8.1 0 0 1-.72-1.74l-1.2-.25a1 1 0 0 1-.8-.98V9.76a1 1 0 0 1 .8-.98l1.2-.25c.18-.61.42-1.19.72-1.74l-.64-1.06a1 1 0 0 1 .15-1.24l1.58-1.58a1 1 0 0 1 1.24-.15l1.06.64c.55-.3 1.13-.54 1.74-.72l.25-1.2A1 1 0 0 1 9.76 2H12Zm-.38 1.5H10.4l-.24 1.16a1 1 0 0 1-.76.78 6.6 6.6 0 0 0-2.2.91 1 1 0 0 1-1.09.02l-1.02-.62-.86.86.62 1.02a1 1 0 0 1-.02 1.09 6.6 6.6 0 0 0-.91 2.2 1 1 0 0 1-.78.76L2 11.62v1.2l1.16.24a1 1 0 0 1 .78.76 6.6 6.6 0 0 0 .91 2.2 1 1 0 0 1 .02 1.09l-.62 1.02.86.86 1.02-.62a1 1 0 0 1 1.09.02 6.6 6.6 0 0 0 2.2.91 1 1 0 0 1 .76.78l.24 1.16h1.2l.24-1.16a1 1 0 0 1 .76-.78 6.6 6.6 0 0 0 2.2-.91 1 1 0 0 1 1.09-.02l1.02.62.86-.86-.62-1.02a1 1 0 0 1 .02-1.09 6.6 6.6 0 0 0 .91-2.2 1 1 0 0 1 .78-.76l1.16-.24v-1.2l-1.16-.24a1 1 0 0 1-.78-.76 6.6 6.6 0 0 0-.91-2.2 1 1 0 0 1-.02-1.09l.62-1.02-.86-.86-1.02.62a1 1 0 0 1-1.09-.02 6.6 6.6 0 0 0-2.2-.91 1 1 0 0 1-.76-.78l-.24-1.16ZM11 8a3 3 0 1 1 0 6 3 3 0 0 1 0-6Zm0 1.5a1.5 1.5 0 1 0 0 3 1.5 1.5 0 0 0 0-3Z"/>"#
            }
            Self::PaintBrush => {
                r#"<path d="M5.75 2a.75.75 0 0 0-.75.75v11.5c0 1.24 1 2.25 2.25 2.25H9.5v3a2.5 2.5 0 1 0 5 0v-3h2.25c1.24 0 2.25-1 2.25-2.25V2.75a.75.75 0 0 0-.75-.75H5.75Zm.75 9V3.5h6v1.75a.75.75 0 1 0 1.5 0V3.5h1v2.75a.75.75 0 1 0 1.5 0V3.5h1V11h-11Zm0 3.25V12.5h11v1.75c0 .41-.34.75-.75.75h-3a.75.75 0 0 0-.75.75v3.75a1 1 0 0 1-2 0v-3.75a.75.75 0 0 0-.75-.75h-3a.75.75 0 0 1-.75-.75Z"/>"#
            }
            Self::Launcher => {
                r#"<path d="M6.25 3A3.25 3.25 0 0 0 3 6.25v11.5C3 19.55 4.46 21 6.25 21h2.76L9 20.75V19.5H6.25c-.97 0-1.75-.78-1.75-1.75V8.5h15V9H21V6.26C21 4.45 19.54 3 17.75 3H6.25ZM19.5 7h-15v-.75c0-.97.78-1.75 1.75-1.75h11.5c.97 0 1.75.78 1.75 1.75V7Zm-7.25 8.5h3.25v-3.25c0-1.24 1-2.25 2.25-2.25h3c1.24 0 2.25 1 2.25 2.25v7.5c0 1.8-1.46 3.25-3.25 3.25h-7.5C11.01 23 10 22 10 20.75v-3c0-1.24 1-2.25 2.25-2.25ZM17 12.25v3.25h4.5v-3.25a.75.75 0 0 0-.75-.75h-3a.75.75 0 0 0-.75.75Zm-1.5 9.25V17h-3.25a.75.75 0 0 0-.75.75v3c0 .41.34.75.75.75h3.25ZM17 17v4.5h2.75c.97 0 1.75-.78 1.75-1.75V17H17Z"/>"#
            }
            Self::Desktop => {
                r#"<path d="M4.25 4A2.25 2.25 0 0 0 2 6.25v9.5A2.25 2.25 0 0 0 4.25 18h6v2.5H7.75a.75.75 0 0 0 0 1.5h8.5a.75.75 0 0 0 0-1.5h-2.5V18h6A2.25 2.25 0 0 0 22 15.75v-9.5A2.25 2.25 0 0 0 19.75 4H4.25ZM3.5 6.25c0-.41.34-.75.75-.75h15.5c.41 0 .75.34.75.75v9.5c0 .41-.34.75-.75.75H4.25a.75.75 0 0 1-.75-.75v-9.5Z"/>"#
            }
            Self::Speaker => {
                r#"<path d="M13 4.25a.75.75 0 0 0-1.22-.58L7.72 7H5.25A2.25 2.25 0 0 0 3 9.25v5.5A2.25 2.25 0 0 0 5.25 17h2.47l4.06 3.33A.75.75 0 0 0 13 19.75V4.25Zm-4.3 4.08 2.8-2.3v11.94l-2.8-2.3a.75.75 0 0 0-.48-.17H5.25a.75.75 0 0 1-.75-.75v-5.5c0-.41.34-.75.75-.75h2.97c.17 0 .34-.06.48-.17Zm7.5-.03a.75.75 0 0 1 1.06.04 5.23 5.23 0 0 1 0 7.32.75.75 0 1 1-1.1-1.02 3.73 3.73 0 0 0 0-5.28.75.75 0 0 1 .04-1.06Z"/>"#
            }
            Self::Battery => {
                r#"<path d="M4.25 7A2.25 2.25 0 0 0 2 9.25v5.5A2.25 2.25 0 0 0 4.25 17h12.5A2.25 2.25 0 0 0 19 14.75v-5.5A2.25 2.25 0 0 0 16.75 7H4.25ZM3.5 9.25c0-.41.34-.75.75-.75h12.5c.41 0 .75.34.75.75v5.5c0 .41-.34.75-.75.75H4.25a.75.75 0 0 1-.75-.75v-5.5ZM20 10h.75c.69 0 1.25.56 1.25 1.25v1.5c0 .69-.56 1.25-1.25 1.25H20v-4Zm-15 .5h8v3H5v-3Z"/>"#
            }
            Self::Network => {
                r#"<path d="M17.74 10.75c.6.6 1.1 1.3 1.5 2.07a.75.75 0 1 1-1.34.68 6.56 6.56 0 0 0-11.71-.02.75.75 0 1 1-1.34-.67 8.06 8.06 0 0 1 12.9-2.06Zm-2.1 3.07c.45.45.82 1 1.08 1.58a.75.75 0 1 1-1.38.6A3.6 3.6 0 0 0 8.75 16a.75.75 0 1 1-1.37-.6 5.1 5.1 0 0 1 8.26-1.57Zm4.8-5.54c.52.5 1 1.09 1.42 1.7a.75.75 0 1 1-1.24.85 10.45 10.45 0 0 0-17.23 0 .75.75 0 0 1-1.23-.86 11.95 11.95 0 0 1 18.29-1.69Zm-7.38 8.16a1.5 1.5 0 1 1-2.12 2.12 1.5 1.5 0 0 1 2.12-2.12Z"/>"#
            }
            Self::Person => {
                r#"<path d="M12 2.5a4.75 4.75 0 1 0 0 9.5 4.75 4.75 0 0 0 0-9.5ZM8.75 7.25a3.25 3.25 0 1 1 6.5 0 3.25 3.25 0 0 1-6.5 0ZM6.25 13.5A2.25 2.25 0 0 0 4 15.75v.58c0 1.4.72 2.62 1.94 3.47 1.22.85 2.93 1.33 6.06 1.33s4.84-.48 6.06-1.33c1.22-.85 1.94-2.07 1.94-3.47v-.58a2.25 2.25 0 0 0-2.25-2.25H6.25ZM5.5 15.75c0-.41.34-.75.75-.75h11.5c.41 0 .75.34.75.75v.58c0 .85-.42 1.63-1.3 2.24-.9.63-2.34 1.06-5.2 1.06s-4.3-.43-5.2-1.06c-.88-.61-1.3-1.4-1.3-2.24v-.58Z"/>"#
            }
            Self::Power => {
                r#"<path d="M12 2.25c.41 0 .75.34.75.75v8a.75.75 0 0 1-1.5 0V3c0-.41.34-.75.75-.75ZM7.35 5.64a.75.75 0 0 1-.1 1.06 7 7 0 1 0 9.5 0 .75.75 0 1 1 .96-1.16 8.5 8.5 0 1 1-11.42 0 .75.75 0 0 1 1.06.1Z"/>"#
            }
            Self::WindowMinimize => {
                r#"<path d="M3.75 12.5h16.5a.75.75 0 0 0 0-1.5H3.75a.75.75 0 0 0 0 1.5Z"/>"#
            }
            Self::WindowMaximize => {
                r#"<path d="M3 6.25C3 4.45 4.46 3 6.25 3h11.5C19.55 3 21 4.46 21 6.25v11.5c0 1.8-1.46 3.25-3.25 3.25H6.25A3.25 3.25 0 0 1 3 17.75V6.25ZM6.25 4.5c-.97 0-1.75.78-1.75 1.75v11.5c0 .97.78 1.75 1.75 1.75h11.5c.97 0 1.75-.78 1.75-1.75V6.25c0-.97-.78-1.75-1.75-1.75H6.25Z"/>"#
            }
            Self::WindowRestore => {
                r#"<path d="M7.52 5H6c.13-1.68 1.53-3 3.24-3h8A4.75 4.75 0 0 1 22 6.75v8a3.25 3.25 0 0 1-3 3.24v-1.5c.85-.13 1.5-.86 1.5-1.74v-8c0-1.8-1.46-3.25-3.25-3.25h-8c-.88 0-1.61.65-1.73 1.5ZM5.25 6A3.25 3.25 0 0 0 2 9.25v9.5C2 20.55 3.46 22 5.25 22h9.5c1.8 0 3.25-1.46 3.25-3.25v-9.5C18 7.45 16.55 6 14.75 6h-9.5ZM3.5 9.25c0-.97.78-1.75 1.75-1.75h9.5c.97 0 1.75.78 1.75 1.75v9.5c0 .97-.78 1.75-1.75 1.75h-9.5c-.97 0-1.75-.78-1.75-1.75v-9.5Z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 14px compact icon (dense controls).
    Xs,
    /// 16px standard icon (menus/taskbar/tray).
    #[default]
    Sm,
    /// 20px medium icon (window chrome).
    Md,
    /// 24px large icon (desktop launchers).
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }

    /// Stable size token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders an icon from the centralized catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}
