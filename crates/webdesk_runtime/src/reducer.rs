//! Reducer actions, side-effect intents, and the drag/resize state machine.
//!
//! [`reduce_desktop`] is the single state-transition entry point for the
//! shell: every user intent becomes a [`DesktopAction`], and the reducer
//! forwards window mutations to the registry, launch requests to the
//! dispatcher, and pointer-gesture updates to the interaction sessions. The
//! function is total; actions naming unknown windows fall through silently.

use crate::launcher;
use crate::model::{
    DesktopState, DragSession, InteractionState, PointerPosition, Position, ResizeSession, Size,
    WindowId, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::registry;
use crate::{apps, model::AppId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// User intents accepted by [`reduce_desktop`].
pub enum DesktopAction {
    /// Launch an application (focus its live window or open a new one).
    LaunchApp { app_id: AppId },
    /// Close a window.
    CloseWindow { window_id: WindowId },
    /// Focus (and, if minimized, restore) a window.
    FocusWindow { window_id: WindowId },
    /// Minimize a window.
    MinimizeWindow { window_id: WindowId },
    /// Flip a window's maximized display mode.
    ToggleMaximize { window_id: WindowId },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Titlebar press: begin dragging a window.
    BeginMove {
        window_id: WindowId,
        pointer: PointerPosition,
    },
    /// Corner-affordance press: begin resizing a window.
    BeginResize { window_id: WindowId },
    /// Pointer moved while a drag is active.
    UpdateMove { pointer: PointerPosition },
    /// Pointer moved while a resize is active.
    UpdateResize { pointer: PointerPosition },
    /// Pointer released or cancelled anywhere; ends any active gesture.
    ReleasePointer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side-effect intents emitted by the reducer for the host to execute.
pub enum RuntimeEffect {
    /// Move DOM focus into the newly focused window's frame.
    FocusWindowContent(WindowId),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting
/// side effects.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::LaunchApp { app_id } => {
            let window_id = launcher::launch(state, apps::descriptor(app_id));
            state.start_menu_open = false;
            effects.push(RuntimeEffect::FocusWindowContent(window_id));
        }
        DesktopAction::CloseWindow { window_id } => {
            registry::close(state, window_id);
        }
        DesktopAction::FocusWindow { window_id } => {
            registry::focus(state, window_id);
            if state.focused == Some(window_id) {
                effects.push(RuntimeEffect::FocusWindowContent(window_id));
            }
        }
        DesktopAction::MinimizeWindow { window_id } => {
            registry::minimize(state, window_id);
        }
        DesktopAction::ToggleMaximize { window_id } => {
            registry::toggle_maximize(state, window_id);
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            if let Some(origin) = state.window(window_id).map(|w| w.position) {
                registry::focus(state, window_id);
                interaction.dragging = Some(DragSession {
                    window_id,
                    grab: PointerPosition {
                        x: pointer.x - origin.x,
                        y: pointer.y - origin.y,
                    },
                });
                effects.push(RuntimeEffect::FocusWindowContent(window_id));
            }
        }
        DesktopAction::BeginResize { window_id } => {
            if state.window(window_id).is_some() {
                registry::focus(state, window_id);
                interaction.resizing = Some(ResizeSession { window_id });
                effects.push(RuntimeEffect::FocusWindowContent(window_id));
            }
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging {
                // New position is the pointer minus the grab offset. A
                // maximized window records the move too; the view keeps it
                // pinned until un-maximized.
                registry::set_position(
                    state,
                    session.window_id,
                    Position {
                        x: pointer.x - session.grab.x,
                        y: pointer.y - session.grab.y,
                    },
                );
            }
        }
        DesktopAction::UpdateResize { pointer } => {
            if let Some(session) = interaction.resizing {
                if let Some(origin) = state.window(session.window_id).map(|w| w.position) {
                    let size = Size {
                        width: pointer.x - origin.x,
                        height: pointer.y - origin.y,
                    }
                    .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
                    registry::set_size(state, session.window_id, size);
                }
            }
        }
        DesktopAction::ReleasePointer => {
            interaction.dragging = None;
            interaction.resizing = None;
        }
    }
    effects
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{Position, Size};

    fn launch(state: &mut DesktopState, interaction: &mut InteractionState, app_id: AppId) -> WindowId {
        reduce_desktop(state, interaction, DesktopAction::LaunchApp { app_id });
        state.focused.expect("launch focuses a window")
    }

    #[test]
    fn launch_closes_the_start_menu_and_emits_focus_effect() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        state.start_menu_open = true;

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::LaunchApp {
                app_id: AppId::Notepad,
            },
        );

        assert!(!state.start_menu_open);
        let id = state.focused.unwrap();
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowContent(id)]);
    }

    #[test]
    fn focusing_a_minimized_window_restores_it() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = launch(&mut state, &mut interaction, AppId::Calculator);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: id },
        );
        assert!(state.window(id).unwrap().minimized);
        assert_eq!(state.focused, None);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow { window_id: id },
        );
        assert!(!state.window(id).unwrap().minimized);
        assert_eq!(state.focused, Some(id));
    }

    #[test]
    fn focusing_an_unknown_window_emits_no_effect() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow {
                window_id: WindowId(42),
            },
        );
        assert_eq!(effects, Vec::new());
        assert_eq!(state.focused, None);
    }

    #[test]
    fn drag_gesture_applies_the_captured_grab_offset() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = launch(&mut state, &mut interaction, AppId::FileExplorer);
        // First window sits at the cascade origin (50, 50).
        assert_eq!(state.window(id).unwrap().position, Position { x: 50, y: 50 });

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: id,
                pointer: PointerPosition { x: 60, y: 65 },
            },
        );
        assert_eq!(
            interaction.dragging.unwrap().grab,
            PointerPosition { x: 10, y: 15 }
        );

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 200, y: 150 },
            },
        );
        assert_eq!(
            state.window(id).unwrap().position,
            Position { x: 190, y: 135 }
        );
    }

    #[test]
    fn begin_move_focuses_and_raises_the_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let first = launch(&mut state, &mut interaction, AppId::FileExplorer);
        let second = launch(&mut state, &mut interaction, AppId::Notepad);
        assert_eq!(state.focused, Some(second));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: first,
                pointer: PointerPosition { x: 55, y: 55 },
            },
        );
        assert_eq!(state.focused, Some(first));
        assert!(
            state.window(first).unwrap().stack_order > state.window(second).unwrap().stack_order
        );
    }

    #[test]
    fn resize_gesture_floors_at_the_minimum_size() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = launch(&mut state, &mut interaction, AppId::Settings);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize { window_id: id },
        );
        // Window origin is (50, 50); a pointer at (100, 120) asks for 50x70.
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition { x: 100, y: 120 },
            },
        );
        assert_eq!(
            state.window(id).unwrap().size,
            Size {
                width: 400,
                height: 300
            }
        );

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition { x: 50 + 640, y: 50 + 480 },
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
    fn release_pointer_always_returns_to_idle() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = launch(&mut state, &mut interaction, AppId::Notepad);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: id,
                pointer: PointerPosition { x: 50, y: 50 },
            },
        );
        assert!(interaction.gesture_active());

        reduce_desktop(&mut state, &mut interaction, DesktopAction::ReleasePointer);
        assert_eq!(interaction, InteractionState::default());

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize { window_id: id },
        );
        reduce_desktop(&mut state, &mut interaction, DesktopAction::ReleasePointer);
        assert_eq!(interaction, InteractionState::default());
    }

    #[test]
    fn pointer_updates_after_a_racing_close_are_noops() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = launch(&mut state, &mut interaction, AppId::Calculator);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: id,
                pointer: PointerPosition { x: 50, y: 50 },
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: id },
        );
        let before = state.clone();

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 500, y: 500 },
            },
        );
        assert_eq!(state, before);
    }

    #[test]
    fn maximized_window_still_records_drag_output() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = launch(&mut state, &mut interaction, AppId::FileExplorer);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize { window_id: id },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: id,
                pointer: PointerPosition { x: 50, y: 50 },
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 90, y: 70 },
            },
        );

        let record = state.window(id).unwrap();
        assert!(record.maximized);
        assert_eq!(record.position, Position { x: 90, y: 70 });
    }

    #[test]
    fn start_menu_toggles_and_closes() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        reduce_desktop(&mut state, &mut interaction, DesktopAction::ToggleStartMenu);
        assert!(state.start_menu_open);
        reduce_desktop(&mut state, &mut interaction, DesktopAction::ToggleStartMenu);
        assert!(!state.start_menu_open);

        reduce_desktop(&mut state, &mut interaction, DesktopAction::ToggleStartMenu);
        reduce_desktop(&mut state, &mut interaction, DesktopAction::CloseStartMenu);
        assert!(!state.start_menu_open);
    }
}
