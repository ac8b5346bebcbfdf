//! One-shot generation command handler.

use std::io::Write;
use tuberank::{App, GENERATION_FAILED_MESSAGE, GenerationState, SeoGenerator, VideoCategory};

/// Run a single generation and write the result as pretty JSON.
///
/// Follows the same submit rules as the terminal UI: a blank topic is
/// rejected without calling `generator`.
///
/// # Errors
///
/// Returns the user-facing message when the topic is blank or the
/// generation fails. Details are logged.
#[tracing::instrument(skip_all, fields(category = category.key(), provider = generator.provider_name()))]
pub async fn handle_generate_command<G>(
    generator: &G,
    topic: String,
    audience: String,
    category: VideoCategory,
    out: &mut impl Write,
) -> anyhow::Result<()>
where
    G: SeoGenerator + ?Sized,
{
    let mut app = App::new();
    app.topic = topic;
    app.audience = audience;
    app.category = category;

    match app.generate_with(generator).await {
        GenerationState::Success => {
            let result = app
                .result()
                .ok_or_else(|| anyhow::anyhow!(GENERATION_FAILED_MESSAGE))?;
            serde_json::to_writer_pretty(&mut *out, result)?;
            writeln!(out)?;
            Ok(())
        }
        _ => {
            let message = app.error_message().unwrap_or(GENERATION_FAILED_MESSAGE);
            anyhow::bail!("{}", message)
        }
    }
}
