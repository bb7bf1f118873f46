//! Template-driven markdown styling with SVG and JPEG export.
//!
//! This crate is the application layer: it owns the editing session model
//! ([`session`]) and the facade that wires template composition, rendering,
//! and export together ([`app`]). The heavy lifting lives in the
//! `markframe-render` and `markframe-export` crates.

pub mod app;
pub mod commands;
pub mod session;

pub use app::App;
pub use session::{Action, PanelVisibility, SessionState};
