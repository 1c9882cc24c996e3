//! Terminal output formatting
//!
//! Display utilities for the line-mode game and CLI results.

pub mod display;
pub mod formatters;

pub use display::{print_check_result, write_board, write_check_result};
