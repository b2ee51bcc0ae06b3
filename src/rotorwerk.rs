//! Rotorwerk: rotor cipher machine orchestrator.
//!
//! Drives one symbol at a time through plugboard, rotor stack, and
//! reflector, then steps the rotor odometer. Encryption and decryption
//! are the same operation: the pipeline is reciprocal whenever the rotor
//! positions match.

use crate::alphabet;
use crate::config::MachineConfig;
use crate::error::RotorwerkError;
use crate::plugboard::{self, Pairing, Plugboard};
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::wiring::{REFLECTOR_A, ROTOR_VI, ROTOR_VII, ROTOR_VIII};

/// Number of rotors in the machine.
const NUM_ROTORS: usize = 3;

/// Rotor cipher machine: plugboard, three rotors, and a reflector.
///
/// # Architecture
///
/// Each alphabetic symbol travels plugboard → rotors forward (rotor 0
/// first) → reflector → rotors backward (rotor 2 first) → plugboard.
/// After every substituted symbol the rotor positions advance
/// odometer-style: rotor 0 steps always, rotor 1 steps when rotor 0
/// wraps, rotor 2 steps when rotor 1 wraps. The advancing state is what
/// makes the substitution non-stationary — the same plaintext symbol
/// encodes differently at every step.
///
/// One instance models one operator's machine: operations are
/// synchronous, mutate the instance in place, and never block.
pub struct Rotorwerk {
    rotors: [Rotor; NUM_ROTORS],
    reflector: Reflector,
    plugboard: Plugboard,
}

impl Default for Rotorwerk {
    fn default() -> Self {
        Self::new()
    }
}

impl Rotorwerk {
    /// Creates a machine with the built-in historical wirings
    /// (rotors VI/VII/VIII, reflector A, default plugboard) at
    /// positions (1, 1, 1).
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorwerk::Rotorwerk;
    ///
    /// let mut machine = Rotorwerk::new();
    /// let encrypted = machine.scramble_text("HELLO WORLD");
    /// assert_ne!(encrypted, "HELLO WORLD");
    ///
    /// machine.set_positions(1, 1, 1);
    /// assert_eq!(machine.scramble_text(&encrypted), "HELLO WORLD");
    /// ```
    pub fn new() -> Self {
        Self::with_positions(1, 1, 1)
    }

    /// Creates a machine with the built-in wirings at the given
    /// 1-indexed rotor positions.
    ///
    /// Any integers are accepted; positions wrap silently modulo 26.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorwerk::Rotorwerk;
    ///
    /// let machine = Rotorwerk::with_positions(27, 28, 29);
    /// assert_eq!(machine.get_positions(), [1, 2, 3]);
    /// ```
    pub fn with_positions(p1: i32, p2: i32, p3: i32) -> Self {
        let mut machine = Rotorwerk {
            rotors: [
                Rotor::new(ROTOR_VI.parse().expect("built-in rotor wiring is valid")),
                Rotor::new(ROTOR_VII.parse().expect("built-in rotor wiring is valid")),
                Rotor::new(ROTOR_VIII.parse().expect("built-in rotor wiring is valid")),
            ],
            reflector: Reflector::new(
                REFLECTOR_A.parse().expect("built-in reflector wiring is valid"),
            )
            .expect("built-in reflector wiring is an involution"),
            plugboard: Plugboard::default(),
        };
        machine.set_positions(p1, p2, p3);
        machine
    }

    /// Creates a machine from an external configuration record,
    /// overriding the built-in wirings. Positions start at (1, 1, 1).
    ///
    /// Validation is fail-fast: every wiring string must be a
    /// permutation of A–Z and the reflector an involution without fixed
    /// points. The plugboard string is only checked to be a permutation;
    /// a non-involutive plugboard surfaces later through
    /// [`get_plugboard`](Self::get_plugboard).
    ///
    /// # Errors
    /// Any [`RotorwerkError`] wiring-validation variant for the first
    /// malformed string encountered.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorwerk::{MachineConfig, Rotorwerk};
    ///
    /// let machine = Rotorwerk::from_config(&MachineConfig::default()).unwrap();
    /// assert_eq!(machine.get_positions(), [1, 1, 1]);
    /// ```
    ///
    /// ```
    /// use rotorwerk::{MachineConfig, Rotorwerk};
    ///
    /// let config = MachineConfig {
    ///     reflector: "NOT A WIRING".to_string(),
    ///     ..MachineConfig::default()
    /// };
    /// assert!(Rotorwerk::from_config(&config).is_err());
    /// ```
    pub fn from_config(config: &MachineConfig) -> Result<Self, RotorwerkError> {
        let rotors = [
            Rotor::new(config.rotors[0].parse()?),
            Rotor::new(config.rotors[1].parse()?),
            Rotor::new(config.rotors[2].parse()?),
        ];
        let reflector = Reflector::new(config.reflector.parse()?)?;
        let plugboard = Plugboard::new(config.plugboard.parse()?);
        Ok(Rotorwerk {
            rotors,
            reflector,
            plugboard,
        })
    }

    /// Exports the current wirings in the persisted record shape.
    ///
    /// # Parameters
    /// - `seed`: Opaque generator seed to carry in the record.
    pub fn export_config(&self, seed: &str) -> MachineConfig {
        MachineConfig {
            rotors: [
                self.rotors[0].wiring().to_string(),
                self.rotors[1].wiring().to_string(),
                self.rotors[2].wiring().to_string(),
            ],
            reflector: self.reflector.wiring().to_string(),
            plugboard: self.plugboard.wiring().to_string(),
            seed: seed.to_string(),
        }
    }

    /// Sets all three rotors to 1-indexed positions, wrapping silently.
    ///
    /// # Parameters
    /// - `p1`, `p2`, `p3`: 1-indexed positions in canonical rotor order.
    pub fn set_positions(&mut self, p1: i32, p2: i32, p3: i32) {
        self.rotors[0].set_position(p1);
        self.rotors[1].set_position(p2);
        self.rotors[2].set_position(p3);
    }

    /// Returns the current 1-indexed rotor positions in canonical order.
    pub fn get_positions(&self) -> [u8; NUM_ROTORS] {
        [
            self.rotors[0].position(),
            self.rotors[1].position(),
            self.rotors[2].position(),
        ]
    }

    /// Resets all rotor positions to 1. Wirings and plugboard are
    /// untouched.
    pub fn reset(&mut self) {
        for rotor in &mut self.rotors {
            rotor.reset();
        }
    }

    /// Encodes a single symbol, case-insensitively.
    ///
    /// A literal space and any symbol outside A–Z pass through unchanged
    /// (uppercased) without touching rotor state. An alphabetic symbol is
    /// substituted through the full pipeline and the rotor odometer then
    /// steps once, so repeated calls with the same symbol produce
    /// different output.
    ///
    /// # Parameters
    /// - `symbol`: The symbol to encode.
    ///
    /// # Returns
    /// The substituted symbol, always uppercase.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorwerk::Rotorwerk;
    ///
    /// let mut machine = Rotorwerk::new();
    /// assert_eq!(machine.scramble_char('A'), 'G');
    /// assert_eq!(machine.get_positions(), [2, 1, 1]);
    ///
    /// assert_eq!(machine.scramble_char('!'), '!');
    /// assert_eq!(machine.get_positions(), [2, 1, 1]);
    /// ```
    pub fn scramble_char(&mut self, symbol: char) -> char {
        let upper = symbol.to_ascii_uppercase();
        if upper == ' ' {
            return ' ';
        }
        let Some(input) = alphabet::index_of(upper) else {
            return upper;
        };

        // Plugboard in
        let mut index = self.plugboard.swap(input);

        // Forward pass, rotor 0 first
        for rotor in &self.rotors {
            index = rotor.forward(index);
        }

        // Reflector
        index = self.reflector.reflect(index);

        // Backward pass, last rotor first
        for rotor in self.rotors.iter().rev() {
            index = rotor.backward(index);
        }

        // Plugboard out
        index = self.plugboard.swap(index);

        // Odometer step: ripple the carry while a rotor wraps
        if self.rotors[0].advance() && self.rotors[1].advance() {
            self.rotors[2].advance();
        }

        alphabet::symbol_at(index)
    }

    /// Encodes a whole text: uppercases the input and feeds every
    /// character through [`scramble_char`](Self::scramble_char).
    ///
    /// Rotor state carries across characters — the sequence of
    /// substitutions depends on everything encoded before it.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorwerk::Rotorwerk;
    ///
    /// let mut machine = Rotorwerk::new();
    /// assert_eq!(machine.scramble_text("HELLO WORLD"), "PDBDZ PEWCX");
    /// ```
    pub fn scramble_text(&mut self, text: &str) -> String {
        text.to_uppercase()
            .chars()
            .map(|c| self.scramble_char(c))
            .collect()
    }

    /// Validates a proposed plugboard pairing without installing it.
    ///
    /// See [`plugboard::is_valid_pairing`] for the rules.
    pub fn is_valid_plugboard(&self, pairs: &Pairing) -> bool {
        plugboard::is_valid_pairing(pairs)
    }

    /// Validates and installs a new plugboard pairing.
    ///
    /// # Returns
    /// `false` (no state change) if the pairing is invalid, `true` once
    /// the rebuilt wiring is installed. The update is all-or-nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorwerk::{Pairing, Rotorwerk};
    ///
    /// let mut machine = Rotorwerk::new();
    /// let mut pairs = Pairing::new();
    /// pairs.insert('A', 'B');
    /// pairs.insert('B', 'A');
    /// assert!(machine.set_plugboard(&pairs));
    ///
    /// pairs.insert('C', 'C');
    /// assert!(!machine.set_plugboard(&pairs));
    /// ```
    pub fn set_plugboard(&mut self, pairs: &Pairing) -> bool {
        self.plugboard.set_pairs(pairs)
    }

    /// Returns the plugboard's pairing view: only the swapped symbols,
    /// both directions of every pair.
    ///
    /// # Errors
    /// [`RotorwerkError::InconsistentPlugboard`] if the installed wiring
    /// contradicts itself — possible only for wirings loaded through
    /// [`from_config`](Self::from_config).
    pub fn get_plugboard(&self) -> Result<Pairing, RotorwerkError> {
        self.plugboard.pairs()
    }
}
