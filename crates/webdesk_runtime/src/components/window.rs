use super::*;
use webdesk_contract::AppHost;
use webdesk_ui::{Icon, IconName, IconSize};

use crate::host::window_frame_dom_id;
use crate::model::WindowId;

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let visible = Signal::derive(move || {
        state
            .get()
            .window(window_id)
            .map(|w| !w.minimized)
            .unwrap_or(false)
    });
    let focused = Signal::derive(move || state.get().focused == Some(window_id));
    let maximized = Signal::derive(move || {
        state
            .get()
            .window(window_id)
            .map(|w| w.maximized)
            .unwrap_or(false)
    });
    // A maximized window is pinned to the desktop above the taskbar; its
    // recorded geometry only matters again after un-maximizing.
    let frame_style = Signal::derive(move || {
        let desktop = state.get();
        let Some(win) = desktop.window(window_id) else {
            return String::new();
        };
        if win.maximized {
            format!(
                "left:0;top:0;width:100vw;height:calc(100vh - {TASKBAR_HEIGHT_PX}px);z-index:{};",
                win.stack_order
            )
        } else {
            format!(
                "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                win.position.x, win.position.y, win.size.width, win.size.height, win.stack_order
            )
        }
    });

    let close = Callback::new(move |()| {
        runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
    });
    let begin_move = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id,
            pointer: pointer_from_event(&ev),
        });
    };
    let begin_resize = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize { window_id });
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::ToggleMaximize { window_id });
    };
    let swallow_press = move |ev: web_sys::PointerEvent| {
        ev.prevent_default();
        ev.stop_propagation();
    };

    view! {
        <Show when=move || visible.get() fallback=|| ()>
            {move || {
                let record = state
                    .get_untracked()
                    .window(window_id)
                    .cloned()
                    .expect("window exists while shown");
                let title = record.title.clone();
                let app_icon = apps::descriptor(record.app_id).icon;
                let contents = apps::render_window_contents(&record, AppHost::new(close));

                view! {
                    <section
                        id=window_frame_dom_id(window_id)
                        class=move || {
                            let mut class = String::from("desktop-window");
                            if focused.get() {
                                class.push_str(" focused");
                            }
                            if maximized.get() {
                                class.push_str(" maximized");
                            }
                            class
                        }
                        style=move || frame_style.get()
                        tabindex="-1"
                        role="dialog"
                        aria-label=title.clone()
                        data-app=record.app_id.icon_id()
                    >
                        <header
                            class="titlebar"
                            on:pointerdown=begin_move
                            on:dblclick=titlebar_double_click
                        >
                            <div class="titlebar-title">
                                <span class="titlebar-app-icon" aria-hidden="true">
                                    <Icon icon=app_icon size=IconSize::Sm />
                                </span>
                                <span class="titlebar-label">{title.clone()}</span>
                            </div>
                            <div class="titlebar-controls">
                                <button
                                    type="button"
                                    class="window-control"
                                    aria-label="Minimize window"
                                    on:pointerdown=swallow_press
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        runtime
                                            .dispatch_action(DesktopAction::MinimizeWindow {
                                                window_id,
                                            });
                                    }
                                >
                                    <Icon icon=IconName::WindowMinimize size=IconSize::Xs />
                                </button>
                                <button
                                    type="button"
                                    class="window-control"
                                    aria-label=move || {
                                        if maximized.get() {
                                            "Restore window"
                                        } else {
                                            "Maximize window"
                                        }
                                    }
                                    on:pointerdown=swallow_press
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        runtime
                                            .dispatch_action(DesktopAction::ToggleMaximize {
                                                window_id,
                                            });
                                    }
                                >
                                    {move || {
                                        let icon = if maximized.get() {
                                            IconName::WindowRestore
                                        } else {
                                            IconName::WindowMaximize
                                        };
                                        view! { <Icon icon=icon size=IconSize::Xs /> }
                                    }}
                                </button>
                                <button
                                    type="button"
                                    class="window-control close"
                                    aria-label="Close window"
                                    on:pointerdown=swallow_press
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        close.call(());
                                    }
                                >
                                    <Icon icon=IconName::Dismiss size=IconSize::Xs />
                                </button>
                            </div>
                        </header>

                        <div class="window-body">{contents}</div>

                        <Show when=move || !maximized.get() fallback=|| ()>
                            <div
                                class="window-resize-handle"
                                aria-hidden="true"
                                on:pointerdown=begin_resize
                            ></div>
                        </Show>
                    </section>
                }
                    .into_view()
            }}
        </Show>
    }
}
