//! Terminal input module (session-facing).
//!
//! Maps `crossterm` key events into [`tui_spin_types::SpinAction`]. The
//! four pivot bindings are discrete presses; everything unrecognized maps
//! to `None` and is silently ignored.

pub mod map;

pub use tui_spin_types as types;

pub use map::{handle_key_event, should_quit};
