//! Terminal dashboard
//!
//! An interactive, single-screen rendition of the dashboard built on
//! ratatui and crossterm. Every panel reads from the same dashboard
//! controller the command-line reports use.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
