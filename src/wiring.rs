//! Validated 26-symbol substitution wiring tables.
//!
//! A [`Wiring`] is a total bijection over the alphabet, stored as a
//! fixed-size array of alphabet positions. Construction goes through
//! [`FromStr`] and rejects anything that is not a permutation of A–Z,
//! so a `Wiring` value is valid by type: malformed wiring strings fail
//! at configuration load instead of surfacing mid-encoding.
//!
//! The built-in default tables are the historical 1939 M3 & M4 Naval
//! rotors VI/VII/VIII and reflector A.

use std::fmt;
use std::str::FromStr;

use crate::alphabet::{self, ALPHABET_LEN};
use crate::error::RotorwerkError;

/// Rotor #VI - 1939 - M3 & M4 Naval (FEB 1942).
pub const ROTOR_VI: &str = "JPGVOUMFYQBENHZRDKASXLICTW";

/// Rotor #VII - 1939 - M3 & M4 Naval (FEB 1942).
pub const ROTOR_VII: &str = "NZJHGRCXMYSWBOUFAIVLPEKQDT";

/// Rotor #VIII - 1939 - M3 & M4 Naval (FEB 1942).
pub const ROTOR_VIII: &str = "FKQHTLXOCBJSPDZRAMEWNIUYGV";

/// Reflector A.
pub const REFLECTOR_A: &str = "EJMZALYXVBWFCRQUONTSPIKHGD";

/// Default plugboard wiring: ten fixed pairs
/// (A-M, B-D, C-L, E-P, F-H, G-S, I-J, K-X, N-Z, O-Q).
pub const DEFAULT_PLUGBOARD: &str = "MDLBPHSFJIXCAZQEORGTUVWKYN";

/// A permutation of the alphabet: position `i` holds the alphabet
/// position that symbol `i` maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wiring {
    map: [u8; 26],
}

impl Wiring {
    /// Builds a wiring from a raw index table without re-validation.
    ///
    /// Callers must guarantee `map` is a permutation of `0..26`; the
    /// plugboard pairing codec constructs its tables this way.
    pub(crate) fn from_map(map: [u8; 26]) -> Self {
        Wiring { map }
    }

    /// Returns the image of alphabet position `index` under this wiring.
    ///
    /// # Parameters
    /// - `index`: Alphabet position (0..26).
    pub fn image_of(&self, index: u8) -> u8 {
        self.map[index as usize]
    }

    /// Returns the position within the wiring where `index` occurs
    /// (inverse lookup).
    ///
    /// # Parameters
    /// - `index`: Alphabet position (0..26) to locate.
    pub fn position_of(&self, index: u8) -> u8 {
        // A validated permutation contains every alphabet position.
        self.map
            .iter()
            .position(|&v| v == index)
            .map(|p| p as u8)
            .expect("wiring is a validated permutation")
    }

    /// Returns `true` if the wiring is its own inverse
    /// (`map[map[x]] == x` for all `x`).
    pub fn is_involution(&self) -> bool {
        (0..ALPHABET_LEN).all(|i| self.map[self.map[i as usize] as usize] == i)
    }
}

impl FromStr for Wiring {
    type Err = RotorwerkError;

    /// Parses a 26-symbol permutation string.
    ///
    /// # Errors
    /// - [`RotorwerkError::WiringLength`] if the string is not 26 symbols.
    /// - [`RotorwerkError::SymbolOutOfAlphabet`] for symbols outside A–Z.
    /// - [`RotorwerkError::DuplicateSymbol`] if any symbol repeats.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != ALPHABET_LEN as usize {
            return Err(RotorwerkError::WiringLength(len));
        }

        let mut map = [0u8; 26];
        let mut seen = [false; 26];
        for (i, c) in s.chars().enumerate() {
            let idx = alphabet::index_of(c).ok_or(RotorwerkError::SymbolOutOfAlphabet(c))?;
            if seen[idx as usize] {
                return Err(RotorwerkError::DuplicateSymbol(c));
            }
            seen[idx as usize] = true;
            map[i] = idx;
        }

        Ok(Wiring { map })
    }
}

impl fmt::Display for Wiring {
    /// Renders the canonical 26-symbol string form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &idx in &self.map {
            write!(f, "{}", alphabet::symbol_at(idx))?;
        }
        Ok(())
    }
}
