//! Command-line configuration.
//!
//! [`Cli`] is the raw clap surface; [`Cli::into_config`] validates it into a
//! [`GameConfig`], which is what the rest of the binary consumes.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{ensure, Context, Result};
use clap::{Parser, ValueEnum};

use crate::core::{fits_at_spawn, min_board_size, BagPicker, Board, PiecePicker, RandomPicker};
use crate::types::{PieceKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, GRAVITY_MS};

/// Largest board edge the terminal view is laid out for
pub const MAX_BOARD_EDGE: i32 = 200;

/// How the next piece kind is chosen
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Randomizer {
    /// Independent uniform pick per spawn
    #[default]
    Uniform,
    /// Every kind once per shuffled bag
    Bag,
}

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Board width in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH)]
    pub width: i32,
    /// Board height in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT)]
    pub height: i32,
    /// Milliseconds between gravity steps
    #[arg(long, default_value_t = GRAVITY_MS)]
    pub gravity_ms: u32,
    /// Seed for piece selection; taken from the clock when omitted
    #[arg(long)]
    pub seed: Option<u32>,
    /// Piece selection strategy
    #[arg(long, value_enum, default_value_t = Randomizer::Uniform)]
    pub randomizer: Randomizer,
    /// Terminal columns per board cell
    #[arg(long, default_value_t = 2)]
    pub cell_width: u16,
}

/// Validated game settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub gravity_ms: u32,
    pub seed: u32,
    pub randomizer: Randomizer,
    pub cell_width: u16,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            gravity_ms: GRAVITY_MS,
            seed: 1,
            randomizer: Randomizer::Uniform,
            cell_width: 2,
        }
    }
}

impl Cli {
    pub fn into_config(self) -> Result<GameConfig> {
        ensure!(
            self.width <= MAX_BOARD_EDGE && self.height <= MAX_BOARD_EDGE,
            "board is limited to {MAX_BOARD_EDGE}x{MAX_BOARD_EDGE}, got {}x{}",
            self.width,
            self.height
        );
        ensure!(self.gravity_ms > 0, "--gravity-ms must be positive");
        ensure!(
            (1..=4).contains(&self.cell_width),
            "--cell-width must be between 1 and 4, got {}",
            self.cell_width
        );

        let config = GameConfig {
            width: self.width,
            height: self.height,
            gravity_ms: self.gravity_ms,
            seed: self.seed.unwrap_or_else(clock_seed),
            randomizer: self.randomizer,
            cell_width: self.cell_width,
        };
        // Surface bad dimensions here rather than after the terminal is raw.
        config.build_board()?;
        let (min_width, min_height) = min_board_size();
        ensure!(
            fits_at_spawn(config.width, config.height),
            "board {}x{} cannot spawn every piece, need at least {min_width}x{min_height}",
            config.width,
            config.height
        );
        Ok(config)
    }
}

impl GameConfig {
    pub fn picker(&self) -> SessionPicker {
        match self.randomizer {
            Randomizer::Uniform => SessionPicker::Uniform(RandomPicker::new(self.seed)),
            Randomizer::Bag => SessionPicker::Bag(BagPicker::new(self.seed)),
        }
    }

    pub fn build_board(&self) -> Result<Board<SessionPicker>> {
        Board::with_picker(self.width, self.height, self.picker()).with_context(|| {
            format!("invalid board size {}x{}", self.width, self.height)
        })
    }
}

/// Picker chosen at runtime from [`Randomizer`]
#[derive(Debug, Clone)]
pub enum SessionPicker {
    Uniform(RandomPicker),
    Bag(BagPicker),
}

impl PiecePicker for SessionPicker {
    fn pick(&mut self) -> PieceKind {
        match self {
            SessionPicker::Uniform(picker) => picker.pick(),
            SessionPicker::Bag(picker) => picker.pick(),
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
