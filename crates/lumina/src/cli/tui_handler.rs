//! TUI launch command handler.

use super::books::open_library;
use lumina::{LuminaConfig, LuminaResult, run_tui};

/// Launch the terminal user interface.
pub async fn launch_tui() -> LuminaResult<()> {
    let config = LuminaConfig::load()?;
    let mut library = open_library(&config).await?;

    tracing::info!(model = %config.model(), "Launching TUI");
    run_tui(&mut library, *config.tick_rate_ms()).await?;

    Ok(())
}
