//! TUI command handler.

use std::path::Path;
use std::sync::Arc;
use tuberank::{SeoGenerator, TubeRankResult, TuiOptions, run_tui};

/// Launch the interactive terminal UI.
#[tracing::instrument(skip_all, fields(log_file = %log_file.display()))]
pub async fn launch_tui(
    generator: Arc<dyn SeoGenerator>,
    options: TuiOptions,
    log_file: &Path,
) -> TubeRankResult<()> {
    tracing::info!(?options, "Launching TUI");
    run_tui(generator, options).await?;
    Ok(())
}
