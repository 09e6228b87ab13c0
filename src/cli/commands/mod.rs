//! Command implementation modules
//!
//! Each command is implemented as a separate module.

pub mod create;
pub mod delete;

// Re-export command execution functions
pub use create::{run_create_command, CreateParams};
pub use delete::run_delete_command;
