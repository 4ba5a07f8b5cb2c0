//! Terminal output formatting
//!
//! Message text for every game event, and coloured printing for the terminal.

pub mod display;
pub mod formatters;

pub use display::{Style, print_config_error, print_error};
pub use formatters::{outcome_message, result_message, welcome_message};
