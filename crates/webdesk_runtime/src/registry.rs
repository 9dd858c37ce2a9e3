//! The window registry: every mutation of window chrome state lives here.
//!
//! All operations are total. Operating on an id that is not in the registry
//! is a safe no-op; the UI may legitimately race a close against queued
//! pointer events. Focus transfer is derived in exactly one place
//! ([`focus_fallback`]): the remaining non-minimized window with the highest
//! stack order, or nothing.

use crate::apps::AppDescriptor;
use crate::model::{
    DesktopState, Position, Size, WindowId, WindowRecord, CASCADE_ORIGIN, CASCADE_STEP,
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};

/// Creates a window for `descriptor`, cascaded past the existing windows,
/// and focuses it. Always succeeds.
pub fn create(state: &mut DesktopState, descriptor: &AppDescriptor) -> WindowId {
    let id = WindowId(state.next_window_id);
    state.next_window_id = state.next_window_id.saturating_add(1);

    let cascade = state.windows.len() as i32 * CASCADE_STEP;
    let record = WindowRecord {
        id,
        app_id: descriptor.app_id,
        title: descriptor.display_name.to_string(),
        minimized: false,
        maximized: false,
        stack_order: allocate_stack_order(state),
        position: Position {
            x: CASCADE_ORIGIN + cascade,
            y: CASCADE_ORIGIN + cascade,
        },
        size: Size {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        },
    };
    state.windows.push(record);
    state.focused = Some(id);
    id
}

/// Removes a window. If it was focused, focus transfers per
/// [`focus_fallback`].
pub fn close(state: &mut DesktopState, id: WindowId) {
    let before = state.windows.len();
    state.windows.retain(|w| w.id != id);
    if state.windows.len() == before {
        return;
    }
    if state.focused == Some(id) {
        state.focused = focus_fallback(state);
    }
}

/// Minimizes a window. If it was focused, focus transfers per
/// [`focus_fallback`] (the window itself no longer qualifies once hidden).
pub fn minimize(state: &mut DesktopState, id: WindowId) {
    let Some(window) = state.window_mut(id) else {
        return;
    };
    window.minimized = true;
    if state.focused == Some(id) {
        state.focused = focus_fallback(state);
    }
}

/// Un-minimizes a window, raises it to a fresh stack maximum, and focuses it.
pub fn restore_or_focus(state: &mut DesktopState, id: WindowId) {
    if state.window(id).is_none() {
        return;
    }
    let stack_order = allocate_stack_order(state);
    if let Some(window) = state.window_mut(id) {
        window.minimized = false;
        window.stack_order = stack_order;
    }
    state.focused = Some(id);
}

/// Focusing always restores: a minimized window comes back before it is
/// raised and activated.
pub fn focus(state: &mut DesktopState, id: WindowId) {
    restore_or_focus(state, id);
}

/// Flips the maximized display mode. Position and size are untouched so
/// un-maximizing restores the previous geometry.
pub fn toggle_maximize(state: &mut DesktopState, id: WindowId) {
    if let Some(window) = state.window_mut(id) {
        window.maximized = !window.maximized;
    }
}

/// Moves a window. No bounds clamping.
pub fn set_position(state: &mut DesktopState, id: WindowId, position: Position) {
    if let Some(window) = state.window_mut(id) {
        window.position = position;
    }
}

/// Resizes a window, floored at the minimum size so pathological input can
/// never enter the record.
pub fn set_size(state: &mut DesktopState, id: WindowId, size: Size) {
    if let Some(window) = state.window_mut(id) {
        window.size = size.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
    }
}

/// Hands out the next stack order. The counter only moves forward, so orders
/// stay strictly increasing even after the current topmost window closes.
fn allocate_stack_order(state: &mut DesktopState) -> u64 {
    let order = state.next_stack_order;
    state.next_stack_order = state.next_stack_order.saturating_add(1);
    order
}

/// The single focus-transfer rule: highest stack order among non-minimized
/// windows still in the registry.
fn focus_fallback(state: &DesktopState) -> Option<WindowId> {
    state
        .windows
        .iter()
        .filter(|w| !w.minimized)
        .max_by_key(|w| w.stack_order)
        .map(|w| w.id)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::apps;
    use crate::model::AppId;

    fn open(state: &mut DesktopState, app_id: AppId) -> WindowId {
        create(state, apps::descriptor(app_id))
    }

    #[test]
    fn create_assigns_strictly_increasing_unique_stack_orders() {
        let mut state = DesktopState::default();
        let ids: Vec<WindowId> = [
            AppId::FileExplorer,
            AppId::Notepad,
            AppId::Calculator,
            AppId::Settings,
        ]
        .into_iter()
        .map(|app| open(&mut state, app))
        .collect();

        let orders: Vec<u64> = ids
            .iter()
            .map(|id| state.window(*id).unwrap().stack_order)
            .collect();
        assert_eq!(orders, vec![0, 1, 2, 3]);
        assert_eq!(state.focused, Some(ids[3]));
    }

    #[test]
    fn create_cascades_placement_and_uses_default_size() {
        let mut state = DesktopState::default();
        let first = open(&mut state, AppId::Notepad);
        let second = open(&mut state, AppId::Calculator);

        let first = state.window(first).unwrap();
        let second = state.window(second).unwrap();
        assert_eq!(first.position, Position { x: 50, y: 50 });
        assert_eq!(second.position, Position { x: 80, y: 80 });
        assert_eq!(
            first.size,
            Size {
                width: 800,
                height: 600
            }
        );
    }

    #[test]
    fn close_of_focused_window_falls_back_to_highest_stack_order() {
        let mut state = DesktopState::default();
        let a = open(&mut state, AppId::FileExplorer);
        let b = open(&mut state, AppId::Notepad);
        let c = open(&mut state, AppId::Calculator);

        close(&mut state, c);
        assert_eq!(state.focused, Some(b));
        close(&mut state, b);
        assert_eq!(state.focused, Some(a));
        close(&mut state, a);
        assert_eq!(state.focused, None);
    }

    #[test]
    fn close_of_unfocused_window_leaves_focus_untouched() {
        let mut state = DesktopState::default();
        let a = open(&mut state, AppId::FileExplorer);
        let b = open(&mut state, AppId::Notepad);

        close(&mut state, a);
        assert_eq!(state.focused, Some(b));
    }

    #[test]
    fn close_skips_minimized_windows_when_transferring_focus() {
        let mut state = DesktopState::default();
        let a = open(&mut state, AppId::FileExplorer);
        let b = open(&mut state, AppId::Notepad);
        let c = open(&mut state, AppId::Calculator);

        minimize(&mut state, b);
        close(&mut state, c);
        assert_eq!(state.focused, Some(a));
    }

    #[test]
    fn minimize_of_focused_window_transfers_focus_away_from_itself() {
        let mut state = DesktopState::default();
        let a = open(&mut state, AppId::FileExplorer);
        let b = open(&mut state, AppId::Notepad);

        minimize(&mut state, b);
        assert_eq!(state.focused, Some(a));

        minimize(&mut state, a);
        assert_eq!(state.focused, None);
    }

    #[test]
    fn restore_or_focus_unminimizes_raises_and_focuses() {
        let mut state = DesktopState::default();
        let a = open(&mut state, AppId::FileExplorer);
        let b = open(&mut state, AppId::Notepad);

        minimize(&mut state, a);
        restore_or_focus(&mut state, a);

        let record = state.window(a).unwrap();
        assert!(!record.minimized);
        assert_eq!(state.focused, Some(a));
        assert!(record.stack_order > state.window(b).unwrap().stack_order);
    }

    #[test]
    fn stack_orders_survive_closing_the_topmost_window() {
        // A, B, C get [0, 1, 2]; after minimizing B and closing C, a
        // restore of A must land above every order ever handed out.
        let mut state = DesktopState::default();
        let a = open(&mut state, AppId::FileExplorer);
        let b = open(&mut state, AppId::Notepad);
        let c = open(&mut state, AppId::Calculator);

        minimize(&mut state, b);
        assert_eq!(state.focused, Some(c));

        close(&mut state, c);
        assert_eq!(state.focused, Some(a));

        restore_or_focus(&mut state, a);
        assert_eq!(state.window(a).unwrap().stack_order, 3);
        assert_eq!(state.focused, Some(a));
    }

    #[test]
    fn set_size_floors_at_minimum() {
        let mut state = DesktopState::default();
        let id = open(&mut state, AppId::Calculator);

        set_size(
            &mut state,
            id,
            Size {
                width: 120,
                height: -40,
            },
        );
        assert_eq!(
            state.window(id).unwrap().size,
            Size {
                width: 400,
                height: 300
            }
        );

        set_size(
            &mut state,
            id,
            Size {
                width: 640,
                height: 480,
            },
        );
        assert_eq!(
            state.window(id).unwrap().size,
            Size {
                width: 640,
                height: 480
            }
        );
    }

    #[test]
    fn toggle_maximize_flips_flag_and_preserves_geometry() {
        let mut state = DesktopState::default();
        let id = open(&mut state, AppId::Notepad);
        let before = state.window(id).unwrap().clone();

        toggle_maximize(&mut state, id);
        let record = state.window(id).unwrap();
        assert!(record.maximized);
        assert_eq!(record.position, before.position);
        assert_eq!(record.size, before.size);

        toggle_maximize(&mut state, id);
        assert!(!state.window(id).unwrap().maximized);
    }

    #[test]
    fn operations_on_unknown_ids_are_noops() {
        let mut state = DesktopState::default();
        let id = open(&mut state, AppId::Settings);
        let ghost = WindowId(999);
        let before = state.clone();

        close(&mut state, ghost);
        minimize(&mut state, ghost);
        restore_or_focus(&mut state, ghost);
        toggle_maximize(&mut state, ghost);
        set_position(&mut state, ghost, Position { x: 1, y: 2 });
        set_size(
            &mut state,
            ghost,
            Size {
                width: 500,
                height: 500,
            },
        );
        assert_eq!(state, before);
        assert_eq!(state.focused, Some(id));
    }
}
