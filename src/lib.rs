//! Rotorwerk historically-inspired rotor cipher engine.
//!
//! Rotorwerk is a deterministic, stateful symbol substitution machine:
//! text is encrypted and decrypted through a sequence of reversible
//! letter-substitution stages whose positional state advances with every
//! processed character. The machine is reciprocal — the same
//! configuration and starting positions decrypt what they encrypted.
//!
//! This is a toy in the cryptographic sense (the underlying design was
//! broken in the 1940s); the crate exists to model the machine exactly.
//!
//! # Architecture
//!
//! ```text
//! Plugboard   (static involutive swap panel, at most 10 pairs)
//!     ↕
//! Rotors ×3   (rotating permutation stages, odometer stepping)
//!     ↕
//! Reflector   (static involution, bounces the signal back)
//! ```
//!
//! Per symbol: plugboard → rotors forward → reflector → rotors backward
//! → plugboard, then the rotor odometer steps once.
//!
//! # Examples
//!
//! Encrypt and decrypt with the built-in wirings:
//!
//! ```
//! use rotorwerk::Rotorwerk;
//!
//! let mut machine = Rotorwerk::new();
//! let encrypted = machine.scramble_text("ATTACK AT DAWN");
//!
//! machine.set_positions(1, 1, 1);
//! assert_eq!(machine.scramble_text(&encrypted), "ATTACK AT DAWN");
//! ```
//!
//! Patch the plugboard and load a persisted configuration:
//!
//! ```
//! use rotorwerk::{MachineConfig, Pairing, Rotorwerk};
//!
//! let mut machine = Rotorwerk::new();
//! let mut pairs = Pairing::new();
//! pairs.insert('E', 'P');
//! pairs.insert('P', 'E');
//! assert!(machine.set_plugboard(&pairs));
//!
//! let config = machine.export_config("my-seed");
//! let restored = Rotorwerk::from_config(&config).unwrap();
//! assert_eq!(restored.get_plugboard().unwrap(), pairs);
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod config;
pub mod error;
pub mod plugboard;
pub mod reflector;
pub mod rotor;
pub mod wiring;

mod rotorwerk;

pub use config::MachineConfig;
pub use error::RotorwerkError;
pub use plugboard::Pairing;
pub use rotorwerk::Rotorwerk;
