//! Rotor: rotating substitution stage.
//!
//! A rotor combines a fixed permutation wiring with a mutable rotational
//! offset. The offset displaces the wiring frame on the forward pass and
//! is subtracted back out on the return pass, so a rotor is self-inverse
//! for a signal that traverses it in both directions at the same offset.
//! Offsets advance odometer-style, one step per processed symbol, with
//! the wrap reported to the caller as a carry flag.

use crate::alphabet::ALPHABET_LEN;
use crate::wiring::Wiring;

/// A single rotor: permutation wiring plus rotational offset.
#[derive(Debug, Clone)]
pub struct Rotor {
    wiring: Wiring,
    offset: u8,
}

impl Rotor {
    /// Creates a rotor at offset 0 (position 1).
    pub fn new(wiring: Wiring) -> Self {
        Rotor { wiring, offset: 0 }
    }

    /// Sets the rotor to a 1-indexed position.
    ///
    /// Any integer is accepted: the position wraps silently modulo 26,
    /// so 27 lands on position 1 and 0 lands on position 26.
    ///
    /// # Parameters
    /// - `position`: 1-indexed rotor position.
    pub fn set_position(&mut self, position: i32) {
        self.offset = (position - 1).rem_euclid(i32::from(ALPHABET_LEN)) as u8;
    }

    /// Returns the current 1-indexed position (`offset + 1`).
    pub fn position(&self) -> u8 {
        self.offset + 1
    }

    /// Returns the current 0-indexed offset.
    pub fn offset(&self) -> u8 {
        self.offset
    }

    /// Returns the rotor's wiring table.
    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    /// Resets the offset to 0 (position 1).
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Advances the offset by one step.
    ///
    /// # Returns
    /// `true` if the offset wrapped back to 0 (carry into the next rotor).
    pub fn advance(&mut self) -> bool {
        self.offset = (self.offset + 1) % ALPHABET_LEN;
        self.offset == 0
    }

    /// Forward pass: signal entering the rotor's current rotational frame.
    ///
    /// # Parameters
    /// - `index`: Alphabet position of the incoming symbol.
    ///
    /// # Returns
    /// Alphabet position of the substituted symbol,
    /// `wiring[(offset + index) mod 26]`.
    pub fn forward(&self, index: u8) -> u8 {
        self.wiring.image_of((self.offset + index) % ALPHABET_LEN)
    }

    /// Backward pass: inverse lookup through the rotational frame.
    ///
    /// # Parameters
    /// - `index`: Alphabet position of the incoming symbol.
    ///
    /// # Returns
    /// `(position_of(index) - offset) mod 26`.
    pub fn backward(&self, index: u8) -> u8 {
        (self.wiring.position_of(index) + ALPHABET_LEN - self.offset) % ALPHABET_LEN
    }
}
