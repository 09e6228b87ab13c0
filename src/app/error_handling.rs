//! Error handling utilities
//!
//! This module provides centralized error handling for the application.

use tracing::error;

/// Handle fatal errors and exit with appropriate status code
///
/// - For `datepoll::Error`: shows the user message, and the source chain in
///   verbose mode
/// - For other errors: shows the error message and exits with 1
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    use crate::error::Error;

    error!("Fatal error: {}", error);

    let exit_code = if let Some(app_err) = error.downcast_ref::<Error>() {
        eprintln!("{}", app_err.user_message());
        if verbose >= 1 {
            print_chain(&error);
        }
        app_err.exit_code()
    } else {
        eprintln!("Error: {error}");
        if verbose >= 1 {
            print_chain(&error);
        }
        1
    };

    std::process::exit(exit_code)
}

fn print_chain(error: &anyhow::Error) {
    eprintln!("\nError chain:");
    for (i, cause) in error.chain().enumerate() {
        eprintln!("  {}: {}", i, cause);
    }
}
