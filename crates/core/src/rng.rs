//! RNG module - piece selection
//!
//! The board asks a [`PiecePicker`] for the next kind on every spawn. Three
//! pickers are provided:
//!
//! - [`RandomPicker`]: uniform index into the catalog (the default)
//! - [`BagPicker`]: each kind once per shuffled bag, then a new bag
//! - [`ScriptedPicker`]: a fixed sequence, repeated, for deterministic play
//!
//! Randomness comes from a small LCG so that a seed fully determines a game.

use crate::types::PieceKind;

/// 32-bit linear congruential generator
///
/// Multiplier and increment are the Numerical Recipes pair; the modulus is
/// the `u32` wrap. Low bits of such a generator cycle quickly, so bounded
/// draws use the high bits.
#[derive(Debug, Clone)]
pub struct Lcg32 {
    state: u32,
}

impl Lcg32 {
    const MULTIPLIER: u32 = 1_664_525;
    const INCREMENT: u32 = 1_013_904_223;

    /// A zero seed is bumped to one.
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        self.state
    }

    /// Uniform draw from `0..bound`
    pub fn below(&mut self, bound: u32) -> u32 {
        ((u64::from(self.next_u32()) * u64::from(bound)) >> 32) as u32
    }

    /// Fisher-Yates, back to front
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for hi in (1..items.len()).rev() {
            let lo = self.below(hi as u32 + 1) as usize;
            items.swap(hi, lo);
        }
    }
}

/// Chooses the kind of each newly spawned piece
pub trait PiecePicker {
    fn pick(&mut self) -> PieceKind;
}

impl<P: PiecePicker + ?Sized> PiecePicker for &mut P {
    fn pick(&mut self) -> PieceKind {
        (**self).pick()
    }
}

/// Uniformly random catalog index
#[derive(Debug, Clone)]
pub struct RandomPicker {
    rng: Lcg32,
}

impl RandomPicker {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: Lcg32::new(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PiecePicker for RandomPicker {
    fn pick(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.below(PieceKind::ALL.len() as u32) as usize]
    }
}

/// Shuffled bag of every catalog kind
///
/// Kinds are dealt from the back of the bag; an empty bag is reshuffled on
/// the next pick.
#[derive(Debug, Clone)]
pub struct BagPicker {
    bag: [PieceKind; PieceKind::ALL.len()],
    left: usize,
    rng: Lcg32,
}

impl BagPicker {
    pub fn new(seed: u32) -> Self {
        Self {
            bag: PieceKind::ALL,
            left: 0,
            rng: Lcg32::new(seed),
        }
    }
}

impl Default for BagPicker {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PiecePicker for BagPicker {
    fn pick(&mut self) -> PieceKind {
        if self.left == 0 {
            self.bag = PieceKind::ALL;
            self.rng.shuffle(&mut self.bag);
            self.left = self.bag.len();
        }
        self.left -= 1;
        self.bag[self.left]
    }
}

/// Replays a fixed sequence of kinds, wrapping around at the end
#[derive(Debug, Clone)]
pub struct ScriptedPicker {
    script: Vec<PieceKind>,
    next: usize,
}

impl ScriptedPicker {
    /// # Panics
    ///
    /// Panics if `script` is empty.
    pub fn new(script: impl IntoIterator<Item = PieceKind>) -> Self {
        let script: Vec<PieceKind> = script.into_iter().collect();
        assert!(!script.is_empty(), "scripted picker needs at least one kind");
        Self { script, next: 0 }
    }

    /// Always the same kind
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new([kind])
    }
}

impl PiecePicker for ScriptedPicker {
    fn pick(&mut self) -> PieceKind {
        let kind = self.script[self.next];
        self.next = (self.next + 1) % self.script.len();
        kind
    }
}
