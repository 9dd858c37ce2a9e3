//! Shared UI primitive library for the desktop shell and its built-in apps.
//!
//! The crate owns the semantic icon catalog (one SVG renderer, no ad hoc
//! markup in call sites) and the small set of `data-ui-*` primitives the
//! applications compose: app chrome rows, buttons with variant/size tokens,
//! and labeled form fields. Shell and apps target the stable `data-ui-*`
//! attribute contract from CSS rather than styling raw tags.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    AppShell, Button, ButtonSize, ButtonVariant, MenuBar, RangeField, SelectField, StatusBar,
    ToolBar,
};

/// Convenience imports for application crates consuming the primitive set.
pub mod prelude {
    pub use crate::{
        AppShell, Button, ButtonSize, ButtonVariant, Icon, IconName, IconSize, MenuBar, RangeField,
        SelectField, StatusBar, ToolBar,
    };
}
