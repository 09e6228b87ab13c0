//! Command routing and execution
//!
//! This module handles routing CLI commands to their respective implementations.

use crate::app::AppConfig;
use crate::cli::args::Commands;
use crate::cli::commands::*;
use anyhow::Result;

/// Execute a CLI command based on the parsed arguments
pub async fn execute_command(command: Commands, app: &AppConfig) -> Result<()> {
    match command {
        Commands::Create {
            days,
            times,
            name,
            title,
            email,
            description,
            framadate,
            dry_run,
        } => {
            run_create_command(
                CreateParams {
                    days,
                    times,
                    name,
                    title,
                    email,
                    description,
                    framadate,
                    dry_run,
                },
                app,
            )
            .await
        }
        Commands::Delete { admin_url } => run_delete_command(admin_url, app).await,
    }
}
