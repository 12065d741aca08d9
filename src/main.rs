//! mash — a terminal rate monitor for controller button mashing.
//!
//! Run with:  `RUST_LOG=info mash`

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use mash_config::MashConfig;
use mash_core::{InputEvent, Session};
use mash_input::ControllerInput;
use mash_ui::{draw, Theme, Tui};

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    // Logs go to stderr so they don't tear the alternate-screen UI.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("mash v{} starting", env!("CARGO_PKG_VERSION"));

    let config = mash_config::load(mash_config::default_path())?;
    run(config)
}

/// The cooperative main loop: one thread polls input, advances the session
/// cadence, and renders.  No other thread touches domain state.
fn run(config: MashConfig) -> Result<()> {
    let theme = Theme::from_config(&config.theme);
    let trail_width = config.trail.width.max(1);
    let poll_delay = Duration::from_millis(config.session.poll_delay_ms);

    let mut pads = ControllerInput::new()?;
    let mut session = Session::new(config.session.update_rate_ms);
    if pads.any_connected() {
        session.handle_event(InputEvent::ControllerConnected);
    }

    let mut tui = Tui::new()?;
    let started = Instant::now();

    while session.is_running() {
        let now = started.elapsed().as_millis() as u64;

        for event in tui.poll_events()? {
            session.handle_event(event);
        }
        for event in pads.poll(now) {
            session.handle_event(event);
        }

        session.tick(now);

        if session.is_visible() {
            let view = session.view(now);
            let trail: Vec<u16> = session.trail(now, trail_width).collect();
            tui.terminal_mut()
                .draw(|frame| draw(frame, &view, &trail, trail_width, &theme))?;
        }

        std::thread::sleep(poll_delay);
    }

    tracing::info!("Session over after {} ms", started.elapsed().as_millis());
    Ok(())
}
