//! Terminal setup and the event loop.

use crate::app::App;
use crate::clipboard::{Clipboard, Osc52Clipboard};
use crate::input::{Action, handle_key};
use crate::progress::DEFAULT_CAPTION_INTERVAL;
use crate::ui;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use tuberank_core::{GenerationRequest, GenerationResult};
use tuberank_error::{GenerationError, TuiError};
use tuberank_interface::SeoGenerator;

type Outcome = Result<GenerationResult, GenerationError>;

/// Timing knobs for the terminal loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TuiOptions {
    /// How long to wait for input before redrawing
    pub tick: Duration,
    /// How long each progress caption stays current
    pub caption_interval: Duration,
}

impl Default for TuiOptions {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(100),
            caption_interval: DEFAULT_CAPTION_INTERVAL,
        }
    }
}

/// Run the interactive generator until the user quits.
///
/// Input polling blocks the calling worker, so this needs a multi-threaded
/// runtime. Generations run on spawned tasks and report back over a channel.
///
/// # Errors
///
/// Returns a terminal error if the screen cannot be set up, drawn or
/// restored.
#[tracing::instrument(skip_all, fields(provider = generator.provider_name(), model = generator.model_name()))]
pub async fn run_tui(generator: Arc<dyn SeoGenerator>, options: TuiOptions) -> Result<(), TuiError> {
    info!("Starting TUI");

    enable_raw_mode()?;
    let mut terminal = or_restore(enter_screen(io::stdout()), restore_terminal)?;

    let outcome = event_loop(&mut terminal, generator, options);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("TUI exited");
    outcome
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    generator: Arc<dyn SeoGenerator>,
    options: TuiOptions,
) -> Result<(), TuiError> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Outcome>();
    let mut app = App::new().with_caption_interval(options.caption_interval);
    let mut clipboard = Osc52Clipboard::stdout();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(options.tick)? {
            if let Event::Key(key) = event::read()? {
                match handle_key(&mut app, key) {
                    Action::Quit => break,
                    Action::Submit(request) => {
                        spawn_generation(Arc::clone(&generator), request, tx.clone());
                    }
                    Action::Copy(target, text) => match clipboard.copy(&text) {
                        Ok(()) => app.mark_copied(target, Instant::now()),
                        Err(e) => {
                            error!(error = %e, "Clipboard write failed");
                            app.status_message = "Copy failed".to_string();
                        }
                    },
                    Action::None => {}
                }
            }
        }

        while let Ok(outcome) = rx.try_recv() {
            app.complete(outcome);
        }
        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn enter_screen<W: Write>(mut writer: W) -> io::Result<Terminal<CrosstermBackend<W>>> {
    execute!(writer, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(writer))
}

/// Best-effort undo of raw mode and the alternate screen after a failed setup.
fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
}

/// Run `restore` when `setup` failed, then pass the result through.
fn or_restore<T>(setup: io::Result<T>, restore: impl FnOnce()) -> io::Result<T> {
    setup.inspect_err(|e| {
        error!(error = %e, "Terminal setup failed");
        restore();
    })
}

fn spawn_generation(
    generator: Arc<dyn SeoGenerator>,
    request: GenerationRequest,
    tx: mpsc::UnboundedSender<Outcome>,
) {
    tokio::spawn(async move {
        let outcome = generator.generate(&request).await;
        if tx.send(outcome).is_err() {
            tracing::debug!("UI closed before generation finished");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let result: io::Result<()> =
            or_restore(Err(io::Error::other("not a tty")), || restored.set(true));
        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn successful_setup_leaves_terminal_alone() {
        let restored = Cell::new(false);
        let result = or_restore(Ok(7), || restored.set(true));
        assert_eq!(result.unwrap(), 7);
        assert!(!restored.get());
    }
}
