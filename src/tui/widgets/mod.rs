//! Reusable widgets for the TUI

pub mod carousel;
pub mod input;

pub use carousel::{cards_for_width, Carousel};
pub use input::TextInput;
