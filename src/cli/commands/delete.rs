//! Delete command implementation

use anyhow::Result;

use crate::app::AppConfig;
use crate::config::DatepollConfig;
use crate::framadate::FramadateClient;
use crate::transport::TransportManager;

/// Execute `datepoll delete`
pub async fn run_delete_command(admin_url: String, app: &AppConfig) -> Result<()> {
    let config = DatepollConfig::load(app.config_path.as_deref())?;
    let client = FramadateClient::new(TransportManager::production(config.timeout()));

    client.delete_poll(&admin_url).await?;

    println!("Poll deleted.");
    Ok(())
}
