//! Structural and control primitives shared by the built-in applications.

use leptos::ev::MouseEvent;
use leptos::*;

fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard action button.
    #[default]
    Standard,
    /// Primary emphasized action button.
    Primary,
    /// Accent/operator button.
    Accent,
    /// Danger/destructive button.
    Danger,
    /// Quiet/toggle style button.
    Quiet,
}

impl ButtonVariant {
    const fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Accent => "accent",
            Self::Danger => "danger",
            Self::Quiet => "quiet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    #[default]
    Md,
    /// Large button (calculator keypad and similar).
    Lg,
}

impl ButtonSize {
    const fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Root layout container for an application window body.
pub fn AppShell(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] window_attr: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-app-shell", layout_class)
            data-ui-primitive="true"
            data-ui-kind="app-shell"
            data-app-window=window_attr
        >
            {children()}
        </div>
    }
}

#[component]
/// Horizontal application menu row.
pub fn MenuBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menubar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="menubar"
            role="menubar"
        >
            {children()}
        </div>
    }
}

#[component]
/// Horizontal application toolbar row.
pub fn ToolBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-toolbar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="toolbar"
            role="toolbar"
        >
            {children()}
        </div>
    }
}

#[component]
/// Application status bar row.
pub fn StatusBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-statusbar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="statusbar"
            role="status"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared button primitive with variant and size tokens.
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-button", layout_class)
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-selected=move || selected.get().to_string()
            aria-label=aria_label
            disabled=move || disabled.get()
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Labeled select field; options are authored by the caller, and the first
/// one is the initial selection.
pub fn SelectField(
    /// Visible field label.
    #[prop(into)]
    label: String,
    #[prop(optional)] on_change: Option<Callback<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <label class="ui-field" data-ui-primitive="true" data-ui-kind="select-field">
            <span class="ui-field-label">{label}</span>
            <select
                class="ui-select"
                on:change=move |ev| {
                    if let Some(on_change) = on_change.as_ref() {
                        on_change.call(event_target_value(&ev));
                    }
                }
            >
                {children()}
            </select>
        </label>
    }
}

#[component]
/// Labeled range slider field.
pub fn RangeField(
    /// Visible field label.
    #[prop(into)]
    label: String,
    /// Slider minimum.
    #[prop(default = 0)]
    min: i32,
    /// Slider maximum.
    #[prop(default = 100)]
    max: i32,
    /// Initial slider position.
    value: i32,
    #[prop(optional)] on_input: Option<Callback<String>>,
) -> impl IntoView {
    view! {
        <label class="ui-field" data-ui-primitive="true" data-ui-kind="range-field">
            <span class="ui-field-label">{label}</span>
            <input
                type="range"
                class="ui-range"
                min=min.to_string()
                max=max.to_string()
                value=value.to_string()
                on:input=move |ev| {
                    if let Some(on_input) = on_input.as_ref() {
                        on_input.call(event_target_value(&ev));
                    }
                }
            />
        </label>
    }
}
