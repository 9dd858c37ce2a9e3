//! Core data model for the desktop window manager.

/// Default width of a freshly created window.
pub const DEFAULT_WINDOW_WIDTH: i32 = 800;
/// Default height of a freshly created window.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 600;
/// Minimum allowed managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 400;
/// Minimum allowed managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 300;

/// Top-left corner of the first cascaded window.
pub const CASCADE_ORIGIN: i32 = 50;
/// Per-window offset of the cascade. Placement is unbounded.
pub const CASCADE_STEP: i32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unique identifier of a managed window. Never reused within a process.
pub struct WindowId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Identifies a launchable application from the static catalog.
pub enum AppId {
    /// Mock file browser.
    FileExplorer,
    /// Plain text editor.
    Notepad,
    /// Keypad calculator.
    Calculator,
    /// Settings panel.
    Settings,
}

impl AppId {
    /// Human-readable application title, copied into window records at
    /// creation time.
    pub fn title(self) -> &'static str {
        match self {
            Self::FileExplorer => "File Explorer",
            Self::Notepad => "Notepad",
            Self::Calculator => "Calculator",
            Self::Settings => "Settings",
        }
    }

    /// Stable token used for `data-app` DOM hooks.
    pub fn icon_id(self) -> &'static str {
        match self {
            Self::FileExplorer => "file-explorer",
            Self::Notepad => "notepad",
            Self::Calculator => "calculator",
            Self::Settings => "settings",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Top-left coordinate of a window in desktop space.
pub struct Position {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Content-box dimensions of a window.
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Returns the size floored at the given minimums.
    pub fn clamped_min(self, min_width: i32, min_height: i32) -> Self {
        Self {
            width: self.width.max(min_width),
            height: self.height.max(min_height),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Raw pointer coordinate, in the same space as window positions.
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq)]
/// Chrome state of one open application window.
pub struct WindowRecord {
    /// Unique window identifier.
    pub id: WindowId,
    /// Application this window hosts (lookup into the static catalog).
    pub app_id: AppId,
    /// Title shown in the titlebar and taskbar.
    pub title: String,
    /// Hidden from the desktop and the taskbar while set.
    pub minimized: bool,
    /// Display-mode toggle; position and size are preserved underneath.
    pub maximized: bool,
    /// Paint/interaction ordering; higher is frontmost. Strictly increasing
    /// assignment, not necessarily contiguous.
    pub stack_order: u64,
    /// Top-left corner, meaningless while maximized but preserved.
    pub position: Position,
    /// Content-box size, meaningless while maximized but preserved.
    pub size: Size,
}

#[derive(Debug, Clone, PartialEq)]
/// Authoritative desktop state: the window registry plus shell flags.
///
/// `windows` keeps insertion order; stacking is the per-record `stack_order`.
pub struct DesktopState {
    pub next_window_id: u64,
    pub next_stack_order: u64,
    pub windows: Vec<WindowRecord>,
    /// The single active window, if any. When set, always names a present,
    /// non-minimized window.
    pub focused: Option<WindowId>,
    pub start_menu_open: bool,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            next_window_id: 1,
            next_stack_order: 0,
            windows: Vec::new(),
            focused: None,
            start_menu_open: false,
        }
    }
}

impl DesktopState {
    /// Looks up a window record by id.
    pub fn window(&self, id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Looks up a window record by id, mutably.
    pub fn window_mut(&mut self, id: WindowId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| w.id == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// An in-progress titlebar drag.
pub struct DragSession {
    pub window_id: WindowId,
    /// Pointer-to-window-origin offset captured at press time.
    pub grab: PointerPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// An in-progress bottom-right corner resize.
pub struct ResizeSession {
    pub window_id: WindowId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Pointer-gesture state, held outside the registry. At most one gesture
/// owns the pointer at a time; both `None` means idle.
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}

impl InteractionState {
    /// True while either gesture is in progress (global pointer listeners
    /// must be held exactly as long as this is true).
    pub fn gesture_active(&self) -> bool {
        self.dragging.is_some() || self.resizing.is_some()
    }
}
