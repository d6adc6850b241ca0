//! Terminal runner (default binary).
//!
//! Polls crossterm for input until the next frame, applies the commands the
//! frame collected, advances gravity by the elapsed time and redraws.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};

use tui_blocks::core::{Board, BoardSnapshot};
use tui_blocks::input::CommandBatch;
use tui_blocks::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blocks::types::FRAME_MS;
use tui_blocks::{Cli, FrameClock, GameConfig, GravityDriver, SessionPicker};

fn main() -> Result<()> {
    let config = Cli::parse().into_config()?;
    let mut board = config.build_board()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut board, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(
    term: &mut TerminalRenderer,
    board: &mut Board<SessionPicker>,
    config: &GameConfig,
) -> Result<()> {
    let view = GameView::new(config.cell_width, 1);
    let mut gravity = GravityDriver::new(config.gravity_ms);
    let mut batch = CommandBatch::new();
    let mut snapshot = BoardSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut clock = FrameClock::new(Instant::now());

    board.spawn();

    loop {
        // Render.
        board.snapshot_into(&mut snapshot);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input until the next frame; drain whatever else is queued.
        batch.clear();
        let timeout = frame.saturating_sub(clock.since(Instant::now()));
        if event::poll(timeout)? {
            loop {
                match event::read()? {
                    Event::Key(key) => batch.push_key(key),
                    Event::Resize(..) => term.invalidate(),
                    _ => {}
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        if batch.quit_requested() {
            return Ok(());
        }
        if batch.restart_requested() && board.is_topped_out() {
            board.reset();
            gravity.reset();
            board.spawn();
        }
        for &command in batch.commands() {
            board.apply(command);
        }

        // Gravity.
        let now = Instant::now();
        if clock.since(now) >= frame {
            gravity.advance(clock.take_ms(now), board);
        }
    }
}
