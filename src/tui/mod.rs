//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading**: draws every ~80ms for a smooth spinner.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous
//! redraws.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::{info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::gis::{AddressQuery, AddressResolver, QarsResolver, maps};
use crate::tui::component::EventHandler;
use crate::tui::components::{AddressForm, FormEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub form: AddressForm,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            form: AddressForm::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

/// Build the address resolver from a resolved config.
pub fn build_resolver(config: &ResolvedConfig) -> Arc<dyn AddressResolver> {
    Arc::new(QarsResolver::new(
        Some(config.gis_base_url.clone()),
        config.gis_timeout,
    ))
}

pub fn run(config: &ResolvedConfig) -> std::io::Result<()> {
    let resolver = build_resolver(config);
    let mut app = App::from_config(resolver, config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from the background lookup task
    let (tx, rx) = mpsc::channel();

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // The spinner is the only animation; redraw continuously while loading
        let animating = app.is_loading;
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Esc and Ctrl+C both quit; an in-flight lookup cannot be
            // cancelled, only abandoned with the process.
            if matches!(event, TuiEvent::ForceQuit | TuiEvent::Escape) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Everything else goes to the form
            if let Some(form_event) = tui.form.handle_event(&event) {
                match form_event {
                    FormEvent::Submit(query) => {
                        let effect = update(&mut app, Action::Submit(query));
                        if let Effect::SpawnLookup(query) = effect {
                            spawn_lookup(app.resolver.clone(), query, tx.clone());
                        }
                    }
                    FormEvent::Incomplete => {
                        app.status_message = String::from("All three fields are required.");
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (lookup results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            match update(&mut app, action) {
                Effect::OpenMap(url) => {
                    if maps::open_in_browser(&url).is_err() {
                        // Couldn't launch a browser; surface the URL instead
                        app.status_message = format!("Open manually: {url}");
                    }
                }
                Effect::Quit => {
                    should_quit = true;
                }
                _ => {}
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

fn spawn_lookup(
    resolver: Arc<dyn AddressResolver>,
    query: AddressQuery,
    tx: mpsc::Sender<Action>,
) {
    info!(
        "Spawning lookup: zone={}, street={}, building={}",
        query.zone, query.street, query.building
    );
    tokio::spawn(async move {
        let result = resolver.resolve(&query).await;
        if tx.send(Action::LookupFinished(result)).is_err() {
            warn!("Failed to send lookup result: receiver dropped");
        }
    });
}
