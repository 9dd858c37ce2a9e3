//! The launch dispatcher: single-visible-instance policy over the registry.
//!
//! The registry itself carries no per-application constraint; this layer is
//! the only window creator, so "at most one live window per app" holds for
//! every window opened through normal launch flow. A second instance can
//! only appear after the first was minimized or closed.

use crate::apps::AppDescriptor;
use crate::model::{DesktopState, WindowId};
use crate::registry;

/// Focuses the existing live (non-minimized) window for the descriptor's
/// application, or creates a fresh one. Returns the resulting window id.
pub fn launch(state: &mut DesktopState, descriptor: &AppDescriptor) -> WindowId {
    let existing = state
        .windows
        .iter()
        .find(|w| w.app_id == descriptor.app_id && !w.minimized)
        .map(|w| w.id);

    match existing {
        Some(id) => {
            registry::focus(state, id);
            id
        }
        None => registry::create(state, descriptor),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::apps;
    use crate::model::AppId;
    use crate::registry;

    #[test]
    fn second_launch_refocuses_instead_of_duplicating() {
        let mut state = DesktopState::default();
        let descriptor = apps::descriptor(AppId::Calculator);

        let first = launch(&mut state, descriptor);
        let windows_before = state.windows.clone();
        let second = launch(&mut state, descriptor);

        assert_eq!(first, second);
        assert_eq!(state.windows.len(), 1);
        assert_eq!(state.focused, Some(first));
        // Only focus/stack bookkeeping may differ from the first launch.
        assert_eq!(
            state.windows[0].stack_order,
            windows_before[0].stack_order + 1
        );
        assert_eq!(state.windows[0].position, windows_before[0].position);
        assert_eq!(state.windows[0].size, windows_before[0].size);
    }

    #[test]
    fn launch_after_minimize_creates_a_second_window() {
        let mut state = DesktopState::default();
        let descriptor = apps::descriptor(AppId::Notepad);

        let first = launch(&mut state, descriptor);
        registry::minimize(&mut state, first);
        let second = launch(&mut state, descriptor);

        assert_ne!(first, second);
        assert_eq!(state.windows.len(), 2);
        assert_eq!(state.focused, Some(second));
    }

    #[test]
    fn launch_refocuses_across_other_apps() {
        let mut state = DesktopState::default();
        let explorer = launch(&mut state, apps::descriptor(AppId::FileExplorer));
        let notepad = launch(&mut state, apps::descriptor(AppId::Notepad));
        assert_eq!(state.focused, Some(notepad));

        let again = launch(&mut state, apps::descriptor(AppId::FileExplorer));
        assert_eq!(again, explorer);
        assert_eq!(state.focused, Some(explorer));
        assert_eq!(state.windows.len(), 2);
    }
}
