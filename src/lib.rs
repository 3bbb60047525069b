//! tui-spin (workspace facade crate).
//!
//! This package keeps the `tui_spin::{core,input,raster,term,types}` public
//! API in one place while the implementation lives in dedicated crates
//! under `crates/`.

pub use tui_spin_core as core;
pub use tui_spin_input as input;
pub use tui_spin_raster as raster;
pub use tui_spin_term as term;
pub use tui_spin_types as types;
