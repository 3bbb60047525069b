//! Terminal spinning-square runner.
//!
//! One cooperative loop owns both event sources: key presses are handled
//! between ticks, so a pivot change is always visible to the next frame.
//! The square rotates 2 degrees per 16 ms tick about the vertex selected
//! with keys 1-4; q (or Esc / Ctrl-C) stops the session.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_spin::core::{SpinSession, Viewport};
use tui_spin::input::{handle_key_event, should_quit};
use tui_spin::raster::Canvas;
use tui_spin::term::{FrameBuffer, PixelView, TerminalRenderer};
use tui_spin::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    // The surface dimensions are read once and stay fixed for the whole
    // session (no resize handling). One terminal row is reserved for the
    // status footer; each remaining row holds two pixel rows.
    let (cols, rows) = crossterm::terminal::size()?;
    let px_width = cols as usize;
    let px_height = (rows.saturating_sub(1) as usize) * 2;

    let mut canvas = Canvas::new(px_width, px_height);
    let mut session = SpinSession::new(Viewport::new(px_width as f64, px_height as f64));
    let view = PixelView;
    let mut fb = FrameBuffer::new(cols, rows);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    while session.is_running() {
        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        session.stop();
                        continue;
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply(action);
                    }
                }
            }
        }

        // Tick: render the frame, then flush it.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            session.tick(&mut canvas);
            let status = status_line(&session);
            view.render_into(&canvas, &status, &mut fb);
            term.draw_swap(&mut fb)?;
        }
    }

    Ok(())
}

fn status_line(session: &SpinSession) -> String {
    format!(
        " pivot vertex {}   keys 1-4 select pivot   q quit",
        session.pivot_index()
    )
}
