//! Settings desktop app: a tabbed panel of mock system preferences.
//!
//! Every control here is presentational; nothing feeds back into the shell.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::*;
use webdesk_contract::AppMountContext;
use webdesk_ui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsSection {
    System,
    Display,
    Sound,
    Network,
    Personalization,
}

impl SettingsSection {
    const ALL: [SettingsSection; 5] = [
        Self::System,
        Self::Display,
        Self::Sound,
        Self::Network,
        Self::Personalization,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::System => "System",
            Self::Display => "Display",
            Self::Sound => "Sound",
            Self::Network => "Network",
            Self::Personalization => "Personalization",
        }
    }

    fn icon(self) -> IconName {
        match self {
            Self::System => IconName::Settings,
            Self::Display => IconName::Desktop,
            Self::Sound => IconName::Speaker,
            Self::Network => IconName::Network,
            Self::Personalization => IconName::PaintBrush,
        }
    }
}

#[component]
/// Settings window contents.
pub fn SettingsApp(
    /// Mount context from the hosting window.
    ctx: AppMountContext,
) -> impl IntoView {
    let active_section = create_rw_signal(SettingsSection::System);

    view! {
        <AppShell layout_class="app-settings" window_attr=ctx.window_attr()>
            <div class="settings-workspace">
                <aside class="settings-nav" aria-label="Settings sections">
                    <div class="settings-nav-heading">"Settings"</div>
                    {SettingsSection::ALL
                        .iter()
                        .map(|section| {
                            let section = *section;
                            view! {
                                <Button
                                    variant=ButtonVariant::Quiet
                                    layout_class="settings-nav-item"
                                    selected=Signal::derive(move || {
                                        active_section.get() == section
                                    })
                                    on_click=Callback::new(move |_| active_section.set(section))
                                >
                                    <Icon icon=section.icon() size=IconSize::Sm />
                                    <span>{section.label()}</span>
                                </Button>
                            }
                        })
                        .collect_view()}
                </aside>

                <section class="settings-pane">
                    {move || match active_section.get() {
                        SettingsSection::System => view! { <SystemSection /> }.into_view(),
                        SettingsSection::Display => view! { <DisplaySection /> }.into_view(),
                        SettingsSection::Sound => view! { <SoundSection /> }.into_view(),
                        section => {
                            view! { <ComingSoonSection label=section.label() /> }.into_view()
                        }
                    }}
                </section>
            </div>
        </AppShell>
    }
}

#[component]
fn SystemSection() -> impl IntoView {
    view! {
        <div class="settings-section">
            <h3 class="settings-heading">"About"</h3>
            <div class="settings-card">
                <InfoRow label="WebDesk Version:" value="1.0.0" />
                <InfoRow label="Build:" value="2026.08.01" />
                <InfoRow label="System Type:" value="64-bit (wasm32)" />
            </div>

            <h3 class="settings-heading">"Device Specifications"</h3>
            <div class="settings-card">
                <InfoRow label="Processor:" value="Virtual CPU @ 3.2GHz" />
                <InfoRow label="Memory:" value="8 GB" />
                <InfoRow label="Storage:" value="256 GB SSD" />
            </div>
        </div>
    }
}

#[component]
fn DisplaySection() -> impl IntoView {
    view! {
        <div class="settings-section">
            <h3 class="settings-heading">"Display Settings"</h3>
            <RangeField label="Brightness" value=75 />
            <SelectField label="Resolution">
                <option value="1920 × 1080">"1920 × 1080"</option>
                <option value="1366 × 768">"1366 × 768"</option>
                <option value="1280 × 720">"1280 × 720"</option>
            </SelectField>
            <SelectField label="Scale">
                <option value="100%">"100%"</option>
                <option value="125%">"125%"</option>
                <option value="150%">"150%"</option>
            </SelectField>
        </div>
    }
}

#[component]
fn SoundSection() -> impl IntoView {
    view! {
        <div class="settings-section">
            <h3 class="settings-heading">"Sound Settings"</h3>
            <RangeField label="Volume" value=50 />
            <SelectField label="Output Device">
                <option value="Speakers">"Speakers"</option>
                <option value="Headphones">"Headphones"</option>
            </SelectField>
        </div>
    }
}

#[component]
fn ComingSoonSection(label: &'static str) -> impl IntoView {
    view! {
        <div class="settings-coming-soon">
            {format!("Settings for {label} coming soon...")}
        </div>
    }
}

#[component]
fn InfoRow(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="settings-info-row">
            <span class="settings-info-label">{label}</span>
            <span class="settings-info-value">{value}</span>
        </div>
    }
}
