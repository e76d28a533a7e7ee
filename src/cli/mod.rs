//! CLI command implementations

pub mod list;
pub mod logging;
pub mod new;

use std::fmt::Display;

/// Relay a message to the user
pub fn message(text: impl Display) {
    println!("[TEMBO] {} 🐘", text);
}
