//! Desktop shell UI composition and interaction surfaces.

mod menus;
mod taskbar;
mod window;

use leptos::*;
use leptos::leptos_dom::helpers::WindowListenerHandle;
use webdesk_ui::{Icon, IconSize};

use self::{taskbar::Taskbar, window::DesktopWindow};
use crate::{
    apps,
    model::PointerPosition,
    reducer::DesktopAction,
    runtime_context::{use_desktop_runtime, DesktopRuntimeContext},
};

/// Height reserved for the taskbar at the bottom of the viewport.
pub const TASKBAR_HEIGHT_PX: i32 = 48;

fn pointer_from_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

/// Holds the global pointer listeners for exactly as long as a drag or
/// resize gesture is active. Acquired on gesture start, released on every
/// exit path: pointer release anywhere, gesture cancellation, and shell
/// teardown.
fn install_gesture_listeners(runtime: DesktopRuntimeContext) {
    let handles = store_value(Vec::<WindowListenerHandle>::new());

    let release_all = move || {
        handles.update_value(|held| {
            for handle in held.drain(..) {
                handle.remove();
            }
        });
    };

    create_effect(move |_| {
        let active = runtime.interaction.get().gesture_active();
        let held = handles.with_value(|held| !held.is_empty());

        if active && !held {
            let on_move = window_event_listener(ev::pointermove, move |ev| {
                let pointer = pointer_from_event(&ev);
                let gesture = runtime.interaction.get_untracked();
                if gesture.dragging.is_some() {
                    runtime.dispatch_action(DesktopAction::UpdateMove { pointer });
                }
                if gesture.resizing.is_some() {
                    runtime.dispatch_action(DesktopAction::UpdateResize { pointer });
                }
            });
            let on_up = window_event_listener(ev::pointerup, move |_| {
                runtime.dispatch_action(DesktopAction::ReleasePointer);
            });
            let on_cancel = window_event_listener(ev::pointercancel, move |_| {
                runtime.dispatch_action(DesktopAction::ReleasePointer);
            });
            handles.update_value(|held| held.extend([on_move, on_up, on_cancel]));
        } else if !active && held {
            release_all();
        }
    });

    on_cleanup(release_all);
}

#[component]
/// Renders the full desktop shell: icon surface, window layer, and taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    install_gesture_listeners(runtime);

    view! {
        <div class="desktop-shell" data-ui-primitive="true" data-ui-kind="desktop-root">
            <div
                class="desktop-backdrop"
                on:mousedown=move |_| runtime.dispatch_action(DesktopAction::CloseStartMenu)
            >
                <div class="desktop-icon-grid" data-ui-kind="desktop-icon-grid">
                    {apps::app_catalog()
                        .iter()
                        .map(|entry| {
                            let app_id = entry.app_id;
                            view! {
                                <button
                                    type="button"
                                    class="desktop-icon-button"
                                    data-app=app_id.icon_id()
                                    on:click=move |_| {
                                        runtime
                                            .dispatch_action(DesktopAction::LaunchApp { app_id });
                                    }
                                >
                                    <span class="desktop-icon-glyph" aria-hidden="true">
                                        <Icon icon=entry.icon size=IconSize::Lg />
                                    </span>
                                    <span class="desktop-icon-label">{entry.display_name}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="desktop-window-layer">
                    <For each=move || state.get().windows key=|win| win.id.0 let:win>
                        <DesktopWindow window_id=win.id />
                    </For>
                </div>
            </div>

            <Taskbar />
        </div>
    }
}
