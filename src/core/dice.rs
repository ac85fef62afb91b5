//! Dice: a d6 over a seeded RNG, substitutable for tests.
//!
//! The turn engine is generic over [`DiceRoller`], so a scripted sequence
//! can drive deterministic game tests without touching engine logic.

use std::collections::VecDeque;

use super::rng::GameRng;

/// A source of d6 rolls.
pub trait DiceRoller {
    /// Roll once: uniform integer in `[1, 6]`.
    fn roll(&mut self) -> u8;
}

/// Check whether a roll grants an extra turn.
#[must_use]
pub const fn is_six(value: u8) -> bool {
    value == 6
}

/// Standard die backed by a [`GameRng`] stream.
#[derive(Clone, Debug)]
pub struct Dice {
    rng: GameRng,
}

impl Dice {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Die over a fresh stream from the given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Die over a random seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(GameRng::from_entropy())
    }
}

impl DiceRoller for Dice {
    fn roll(&mut self) -> u8 {
        self.rng.gen_range(1..7) as u8
    }
}

/// Replays a fixed cycle of roll values.
///
/// Intended for tests and replays: the script wraps around when exhausted,
/// so bounded play loops never run dry.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    script: VecDeque<u8>,
}

impl ScriptedDice {
    /// Build from a non-empty list of values in `[1, 6]`.
    #[must_use]
    pub fn new(rolls: impl Into<Vec<u8>>) -> Self {
        let script: VecDeque<u8> = rolls.into().into();
        debug_assert!(!script.is_empty(), "scripted dice need at least one roll");
        debug_assert!(script.iter().all(|&r| (1..=6).contains(&r)));
        Self { script }
    }
}

impl DiceRoller for ScriptedDice {
    fn roll(&mut self) -> u8 {
        // wrap around: pop the front, push it back
        let value = self.script.pop_front().unwrap_or(1);
        self.script.push_back(value);
        value
    }
}
