//! Platform-independent state for the portfolio shell.
//!
//! Everything here is plain Rust and runs on the host, so the browser layer
//! only has to turn [`ShellEffect`]s into DOM calls.
//!
//! - [`storage`] - Key-value persistence seam ([`KeyValueStore`])
//! - [`theme`] - [`ThemeMode`] and initial theme resolution
//! - [`background`] - Theme to background style mapping
//! - [`route`] - Static [`RouteTable`] and path resolution
//! - [`transition`] - Enter/exit state machine for page subtrees
//! - [`layer`] - Stacking order of the shell's layers
//! - [`shell`] - The [`Shell`] reducer tying it all together

pub mod background;
pub mod layer;
pub mod route;
pub mod shell;
pub mod storage;
pub mod theme;
pub mod transition;

pub use background::StyleDescriptor;
pub use layer::Layer;
pub use route::{PageId, RouteEntry, RouteError, RouteTable, Screen};
pub use shell::{Shell, ShellEffect, ShellEvent};
pub use storage::{KeyValueStore, MemoryStore, StorageError};
pub use theme::{ThemeMode, ThemeParseError, ThemePreference, THEME_KEY};
pub use transition::{MountedPage, Phase, TransitionController};
