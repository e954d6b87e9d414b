//! # chanpick-tui
//!
//! Full-screen checkbox picker using ratatui with Elm architecture.

pub mod footer;
pub mod header;
pub mod keymap;
pub mod list;
pub mod model;
pub mod styles;

pub use keymap::{map_key, KeyAction};
pub use model::{PickerApp, SessionStatus, TuiPicker};
