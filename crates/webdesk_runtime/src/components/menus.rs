use super::*;
use webdesk_ui::{Icon, IconName, IconSize};

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <Show when=move || state.get().start_menu_open fallback=|| ()>
            <div
                id="desktop-start-menu"
                class="start-menu"
                role="menu"
                aria-label="Application launcher"
                on:mousedown=move |ev| ev.stop_propagation()
            >
                <div class="start-menu-heading">"Apps"</div>
                {apps::app_catalog()
                    .iter()
                    .map(|entry| {
                        let app_id = entry.app_id;
                        view! {
                            <button
                                type="button"
                                role="menuitem"
                                class="start-menu-item"
                                on:click=move |_| {
                                    runtime.dispatch_action(DesktopAction::LaunchApp { app_id });
                                }
                            >
                                <span class="start-menu-icon" aria-hidden="true">
                                    <Icon icon=entry.icon size=IconSize::Sm />
                                </span>
                                <span>{entry.display_name}</span>
                            </button>
                        }
                    })
                    .collect_view()}

                <div class="start-menu-separator" role="separator" aria-hidden="true"></div>

                <button type="button" role="menuitem" class="start-menu-item">
                    <span class="start-menu-icon" aria-hidden="true">
                        <Icon icon=IconName::Person size=IconSize::Sm />
                    </span>
                    <span>"User Account"</span>
                </button>
                <button type="button" role="menuitem" class="start-menu-item">
                    <span class="start-menu-icon" aria-hidden="true">
                        <Icon icon=IconName::Power size=IconSize::Sm />
                    </span>
                    <span>"Power Options"</span>
                </button>
            </div>
        </Show>
    }
}
