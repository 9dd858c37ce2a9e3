use std::time::Duration;

use super::*;
use webdesk_ui::{Icon, IconName, IconSize};

use super::menus::StartMenu;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockSnapshot {
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl ClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                month: date.get_month() + 1,
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                month: 1,
                day: 1,
                hour: 0,
                minute: 0,
            }
        }
    }
}

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn format_clock_time(snapshot: ClockSnapshot) -> String {
    let mut hour = snapshot.hour % 12;
    if hour == 0 {
        hour = 12;
    }
    let suffix = if snapshot.hour >= 12 { "PM" } else { "AM" };
    format!("{:02}:{:02} {}", hour, snapshot.minute, suffix)
}

fn format_clock_date(snapshot: ClockSnapshot) -> String {
    let month = MONTH_ABBREVIATIONS
        .get(snapshot.month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("Jan");
    format!("{} {}", month, snapshot.day)
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock = create_rw_signal(ClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let running_windows = move || {
        state
            .get()
            .windows
            .iter()
            .filter(|w| !w.minimized)
            .cloned()
            .collect::<Vec<_>>()
    };

    view! {
        <footer
            class="taskbar"
            role="toolbar"
            aria-label="Desktop taskbar"
            on:mousedown=move |ev| ev.stop_propagation()
        >
            <div class="taskbar-start-region">
                <button
                    id="taskbar-start-button"
                    class=move || {
                        if state.get().start_menu_open {
                            "start-button open"
                        } else {
                            "start-button"
                        }
                    }
                    aria-label="Open application launcher"
                    aria-haspopup="menu"
                    aria-controls="desktop-start-menu"
                    aria-expanded=move || state.get().start_menu_open
                    on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleStartMenu)
                >
                    <span class="taskbar-glyph" aria-hidden="true">
                        <Icon icon=IconName::Launcher size=IconSize::Sm />
                    </span>
                    <span>"Start"</span>
                </button>

                <StartMenu />
            </div>

            <div class="taskbar-running" role="group" aria-label="Open windows">
                <For each=running_windows key=|win| win.id.0 let:win>
                    {{
                        let window_id = win.id;
                        let app_icon = apps::descriptor(win.app_id).icon;
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if state.get().focused == Some(window_id) {
                                        "taskbar-window active"
                                    } else {
                                        "taskbar-window"
                                    }
                                }
                                data-app=win.app_id.icon_id()
                                aria-pressed=move || state.get().focused == Some(window_id)
                                on:click=move |_| {
                                    runtime
                                        .dispatch_action(DesktopAction::FocusWindow { window_id });
                                }
                            >
                                <span class="taskbar-app-icon" aria-hidden="true">
                                    <Icon icon=app_icon size=IconSize::Sm />
                                </span>
                                <span class="taskbar-app-label">{win.title.clone()}</span>
                            </button>
                        }
                    }}
                </For>
            </div>

            <div class="taskbar-tray" role="group" aria-label="System tray">
                <span class="tray-glyph" title="Volume" aria-hidden="true">
                    <Icon icon=IconName::Speaker size=IconSize::Sm />
                </span>
                <span class="tray-glyph" title="Battery" aria-hidden="true">
                    <Icon icon=IconName::Battery size=IconSize::Sm />
                </span>
                <span class="tray-glyph" title="Network" aria-hidden="true">
                    <Icon icon=IconName::Network size=IconSize::Sm />
                </span>

                <div
                    class="taskbar-clock"
                    aria-label=move || {
                        format!(
                            "{}, {}",
                            format_clock_date(clock.get()),
                            format_clock_time(clock.get()),
                        )
                    }
                >
                    <div class="taskbar-clock-time">{move || format_clock_time(clock.get())}</div>
                    <div class="taskbar-clock-date">{move || format_clock_date(clock.get())}</div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{format_clock_date, format_clock_time, ClockSnapshot};

    #[test]
    fn clock_uses_twelve_hour_time() {
        let midnight = ClockSnapshot {
            month: 1,
            day: 1,
            hour: 0,
            minute: 5,
        };
        assert_eq!(format_clock_time(midnight), "12:05 AM");

        let noon = ClockSnapshot {
            month: 1,
            day: 1,
            hour: 12,
            minute: 0,
        };
        assert_eq!(format_clock_time(noon), "12:00 PM");

        let afternoon = ClockSnapshot {
            month: 1,
            day: 1,
            hour: 15,
            minute: 45,
        };
        assert_eq!(format_clock_time(afternoon), "03:45 PM");
    }

    #[test]
    fn clock_date_is_short_month_and_day() {
        let snapshot = ClockSnapshot {
            month: 8,
            day: 6,
            hour: 0,
            minute: 0,
        };
        assert_eq!(format_clock_date(snapshot), "Aug 6");
    }
}
