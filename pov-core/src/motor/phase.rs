//! Coil phase table and motor phase state
//!
//! Half-step sequence for a 28BYJ-48 style motor behind a ULN2003 array.
//! Bit `i` of a pattern energizes coil output `i`, in the order
//! A1, A2, B1, B2.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of entries in the half-step sequence
pub const PHASE_COUNT: u8 = 8;

/// Half-steps per output shaft rotation (64:1 gearbox, 8 phases)
pub const STEPS_PER_ROTATION: u32 = 4096;

/// Motor rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    /// Clockwise rotation (phase index counts up)
    #[default]
    Clockwise,
    /// Counter-clockwise rotation (phase index counts down)
    CounterClockwise,
}

impl Direction {
    /// Get the opposite direction
    pub fn opposite(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Signed phase increment for one tick (+1 or -1)
    pub const fn step(self) -> i8 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    /// Parse a signed increment; only ±1 are valid
    pub const fn from_step(step: i8) -> Option<Self> {
        match step {
            1 => Some(Direction::Clockwise),
            -1 => Some(Direction::CounterClockwise),
            _ => None,
        }
    }
}

/// Four-bit coil activation pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CoilPattern(u8);

impl CoilPattern {
    /// All coils de-energized
    pub const OFF: Self = Self(0);

    /// Create a pattern from its low four bits
    pub const fn new(bits: u8) -> Self {
        Self(bits & 0x0F)
    }

    /// Raw pattern bits
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether coil output `index` (0..4) is energized
    pub const fn coil(self, index: usize) -> bool {
        (self.0 >> index) & 1 == 1
    }
}

/// Static half-step lookup table
pub struct MotorPhaseTable;

impl MotorPhaseTable {
    const PATTERNS: [CoilPattern; PHASE_COUNT as usize] = [
        CoilPattern::new(0b1000),
        CoilPattern::new(0b1100),
        CoilPattern::new(0b0100),
        CoilPattern::new(0b0110),
        CoilPattern::new(0b0010),
        CoilPattern::new(0b0011),
        CoilPattern::new(0b0001),
        CoilPattern::new(0b1001),
    ];

    /// Coil pattern for a phase index (taken modulo [`PHASE_COUNT`])
    pub const fn pattern(index: u8) -> CoilPattern {
        Self::PATTERNS[(index % PHASE_COUNT) as usize]
    }
}

/// Current position in the phase sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorState {
    phase_index: u8,
}

impl MotorState {
    /// Start at phase 0
    pub const fn new() -> Self {
        Self { phase_index: 0 }
    }

    /// Current phase index (0..8)
    pub fn phase_index(&self) -> u8 {
        self.phase_index
    }

    /// Coil pattern for the current phase
    pub fn pattern(&self) -> CoilPattern {
        MotorPhaseTable::pattern(self.phase_index)
    }

    /// Move one phase in `direction`, wrapping modulo 8
    pub fn advance(&mut self, direction: Direction) {
        let next = self.phase_index as i8 + PHASE_COUNT as i8 + direction.step();
        self.phase_index = (next as u8) % PHASE_COUNT;
    }
}
