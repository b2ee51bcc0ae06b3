//! Error types for the rotorwerk library.

use thiserror::Error;

/// Errors produced by the rotorwerk library.
///
/// Plugboard pairing validation is deliberately *not* represented here:
/// an invalid pairing is a recoverable condition signalled through the
/// boolean return of [`Rotorwerk::set_plugboard`](crate::Rotorwerk::set_plugboard).
/// These variants cover malformed configuration input, which is fatal to
/// the operation that encounters it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RotorwerkError {
    /// Wiring string is not exactly 26 symbols long.
    #[error("wiring must be exactly 26 symbols, got {0}")]
    WiringLength(usize),
    /// Wiring string contains a symbol outside A–Z.
    #[error("wiring symbol '{0}' is outside A-Z")]
    SymbolOutOfAlphabet(char),
    /// Wiring string is not a permutation of the alphabet.
    #[error("wiring is not a permutation: '{0}' appears more than once")]
    DuplicateSymbol(char),
    /// Reflector wiring maps a symbol to itself.
    #[error("reflector maps '{0}' to itself")]
    ReflectorFixedPoint(char),
    /// Reflector wiring is not its own inverse.
    #[error("reflector is not an involution: '{from}' maps to '{to}' but '{to}' maps to '{back}'")]
    ReflectorNotInvolutive {
        /// Symbol whose image breaks the involution.
        from: char,
        /// Image of `from`.
        to: char,
        /// Image of `to`, which should have been `from`.
        back: char,
    },
    /// Installed plugboard wiring yields a self-contradictory pairing view.
    #[error("inconsistent plugboard mapping: '{from}' maps to '{to}', but '{to}' already mapped to '{prior}'")]
    InconsistentPlugboard {
        /// Symbol being paired when the contradiction surfaced.
        from: char,
        /// Its claimed partner.
        to: char,
        /// The partner `to` was already committed to.
        prior: char,
    },
}
