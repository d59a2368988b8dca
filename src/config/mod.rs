//! Configuration module for edubudget
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::EdubudgetPaths;
pub use settings::Settings;
