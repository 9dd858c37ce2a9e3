//! Desktop window-manager runtime: state core, launch policy, pointer
//! gestures, and the shell UI composed over them.

pub mod apps;
pub mod components;
pub mod host;
pub mod launcher;
pub mod model;
pub mod reducer;
pub mod registry;

mod effect_executor;
mod runtime_context;

pub use components::DesktopShell;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
pub use runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
