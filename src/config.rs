//! External machine configuration record.
//!
//! The record mirrors the document shape an external store persists: four
//! 26-symbol permutation strings (three rotors plus the reflector), the
//! plugboard wiring, and the opaque seed the external generator used to
//! produce the wirings. The seed is carried through untouched — nothing
//! in this crate interprets it. Rotor positions are session state and are
//! not part of the record.

use serde::{Deserialize, Serialize};

use crate::wiring::{DEFAULT_PLUGBOARD, REFLECTOR_A, ROTOR_VI, ROTOR_VII, ROTOR_VIII};

/// Complete reproducible wiring state of one machine instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// The three rotor wirings, in canonical rotor order.
    pub rotors: [String; 3],
    /// The reflector wiring.
    pub reflector: String,
    /// The plugboard wiring.
    pub plugboard: String,
    /// Opaque seed used by an external deterministic generator to
    /// reproduce the wirings. Not interpreted by this crate.
    pub seed: String,
}

impl Default for MachineConfig {
    /// The built-in historical wirings with an empty seed.
    fn default() -> Self {
        MachineConfig {
            rotors: [
                ROTOR_VI.to_string(),
                ROTOR_VII.to_string(),
                ROTOR_VIII.to_string(),
            ],
            reflector: REFLECTOR_A.to_string(),
            plugboard: DEFAULT_PLUGBOARD.to_string(),
            seed: String::new(),
        }
    }
}
