//! Behavioral property tests for the cipher machine.
//!
//! Covers the contract a caller can rely on: reciprocity, deterministic
//! stepping with carry, passthrough rules, plugboard validation and
//! round-trips, and configuration record handling.

use rotorwerk::{MachineConfig, Pairing, Rotorwerk, RotorwerkError};

fn pairing(pairs: &[(char, char)]) -> Pairing {
    let mut map = Pairing::new();
    for &(a, b) in pairs {
        map.insert(a, b);
        map.insert(b, a);
    }
    map
}

// ═══════════════════════════════════════════════════════════════════════
// Reciprocity
// ═══════════════════════════════════════════════════════════════════════

/// Encoding the ciphertext from the same starting positions returns the
/// plaintext, across a spread of positions and plugboard settings.
#[test]
fn reciprocity_across_positions() {
    let texts = ["A", "HELLO WORLD", "THE QUICK BROWN FOX", "ZZZZZZZZZZ"];
    let positions = [(1, 1, 1), (26, 26, 26), (13, 7, 21), (2, 25, 14)];

    for &(p1, p2, p3) in &positions {
        for text in texts {
            let mut machine = Rotorwerk::with_positions(p1, p2, p3);
            let encrypted = machine.scramble_text(text);
            machine.set_positions(p1, p2, p3);
            assert_eq!(
                machine.scramble_text(&encrypted),
                text,
                "round trip failed at positions ({p1},{p2},{p3}) for {text:?}"
            );
        }
    }
}

#[test]
fn reciprocity_with_plugboard() {
    let pairs = pairing(&[('A', 'Z'), ('B', 'Y'), ('C', 'X')]);
    let mut machine = Rotorwerk::with_positions(9, 18, 3);
    assert!(machine.set_plugboard(&pairs));

    let encrypted = machine.scramble_text("MEET ME AT MIDNIGHT");
    machine.set_positions(9, 18, 3);
    assert_eq!(machine.scramble_text(&encrypted), "MEET ME AT MIDNIGHT");
}

/// A symbol never encodes to itself: the reflector has no fixed point,
/// so the pipeline cannot either.
#[test]
fn no_symbol_maps_to_itself() {
    let mut machine = Rotorwerk::new();
    for c in "ABCDEFGHIJKLMNOPQRSTUVWXYZ".chars() {
        for _ in 0..3 {
            assert_ne!(machine.scramble_char(c), c);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Stepping
// ═══════════════════════════════════════════════════════════════════════

/// Every alphabetic character moves the first rotor by exactly one.
#[test]
fn first_rotor_steps_once_per_letter() {
    for start in 1..=26 {
        let mut machine = Rotorwerk::with_positions(start, 1, 1);
        machine.scramble_char('K');
        let expected = if start == 26 { 1 } else { start + 1 };
        assert_eq!(machine.get_positions()[0], expected as u8);
    }
}

/// Carry fires into the second rotor only when the first wraps.
#[test]
fn carry_into_second_rotor() {
    let mut machine = Rotorwerk::with_positions(26, 1, 1);
    machine.scramble_char('A');
    assert_eq!(machine.get_positions(), [1, 2, 1]);
}

/// From (26,26,1) both carries fire in sequence.
#[test]
fn double_carry_into_third_rotor() {
    let mut machine = Rotorwerk::with_positions(26, 26, 1);
    machine.scramble_char('A');
    assert_eq!(machine.get_positions(), [1, 1, 2]);
}

/// Non-letters and spaces never step any rotor.
#[test]
fn passthrough_does_not_step() {
    let mut machine = Rotorwerk::with_positions(26, 26, 26);
    for symbol in [' ', '1', '9', '!', '.', ';', '#'] {
        assert_eq!(machine.scramble_char(symbol), symbol);
    }
    assert_eq!(machine.get_positions(), [26, 26, 26]);
}

#[test]
fn empty_text_is_identity() {
    let mut machine = Rotorwerk::new();
    assert_eq!(machine.scramble_text(""), "");
    assert_eq!(machine.get_positions(), [1, 1, 1]);
}

#[test]
fn case_insensitive_input() {
    let mut machine = Rotorwerk::new();
    let mixed = machine.scramble_text("Hello World");
    machine.reset();
    let upper = machine.scramble_text("HELLO WORLD");
    assert_eq!(mixed, upper);
}

// ═══════════════════════════════════════════════════════════════════════
// Plugboard
// ═══════════════════════════════════════════════════════════════════════

/// Any valid pairing survives an install/read round trip unchanged.
#[test]
fn plugboard_pairing_roundtrip() {
    let cases = [
        pairing(&[]),
        pairing(&[('A', 'B')]),
        pairing(&[('E', 'P'), ('F', 'H'), ('G', 'S'), ('I', 'J')]),
        pairing(&[
            ('A', 'B'),
            ('C', 'D'),
            ('E', 'F'),
            ('G', 'H'),
            ('I', 'J'),
            ('K', 'L'),
            ('M', 'N'),
            ('O', 'P'),
            ('Q', 'R'),
            ('S', 'T'),
        ]),
    ];

    for pairs in cases {
        let mut machine = Rotorwerk::new();
        assert!(machine.set_plugboard(&pairs), "rejected {pairs:?}");
        assert_eq!(machine.get_plugboard().unwrap(), pairs);
    }
}

/// The rejection table from the validation rules. Each invalid pairing
/// leaves the installed panel untouched.
#[test]
fn plugboard_rejection_table() {
    let mut self_pair = Pairing::new();
    self_pair.insert('A', 'A');

    let mut asymmetric = Pairing::new();
    asymmetric.insert('A', 'B');
    asymmetric.insert('B', 'C');
    asymmetric.insert('C', 'B');

    let non_alphabet = pairing(&[('A', '1')]);
    let lowercase = pairing(&[('a', 'b')]);

    let mut eleven_pairs = pairing(&[
        ('A', 'B'),
        ('C', 'D'),
        ('E', 'F'),
        ('G', 'H'),
        ('I', 'J'),
        ('K', 'L'),
        ('M', 'N'),
        ('O', 'P'),
        ('Q', 'R'),
        ('S', 'T'),
    ]);
    eleven_pairs.insert('U', 'V');
    eleven_pairs.insert('V', 'U');

    for (label, pairs) in [
        ("self pair", &self_pair),
        ("asymmetric", &asymmetric),
        ("non-alphabet", &non_alphabet),
        ("lowercase", &lowercase),
        ("eleven pairs", &eleven_pairs),
    ] {
        let mut machine = Rotorwerk::new();
        let before = machine.get_plugboard().unwrap();
        assert!(!machine.is_valid_plugboard(pairs), "{label} accepted");
        assert!(!machine.set_plugboard(pairs), "{label} installed");
        assert_eq!(machine.get_plugboard().unwrap(), before, "{label} mutated state");
    }
}

/// The 20-distinct-symbols cap is exactly the 10-pair cap: the set is
/// accumulated over raw map entries, which store both directions.
#[test]
fn plugboard_cap_equivalence() {
    let ten_pairs = pairing(&[
        ('A', 'B'),
        ('C', 'D'),
        ('E', 'F'),
        ('G', 'H'),
        ('I', 'J'),
        ('K', 'L'),
        ('M', 'N'),
        ('O', 'P'),
        ('Q', 'R'),
        ('S', 'T'),
    ]);
    assert_eq!(ten_pairs.len(), 20, "both directions stored");

    let mut machine = Rotorwerk::new();
    assert!(machine.set_plugboard(&ten_pairs));
    assert_eq!(machine.get_plugboard().unwrap().len(), 20);
}

/// Plugboard changes do not move the rotors.
#[test]
fn set_plugboard_preserves_positions() {
    let mut machine = Rotorwerk::with_positions(3, 14, 15);
    machine.set_plugboard(&pairing(&[('A', 'B')]));
    assert_eq!(machine.get_positions(), [3, 14, 15]);
}

// ═══════════════════════════════════════════════════════════════════════
// Configuration record
// ═══════════════════════════════════════════════════════════════════════

/// The record serializes to the persisted JSON document shape and back.
#[test]
fn config_serde_roundtrip() {
    let config = MachineConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let back: MachineConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn config_json_field_names() {
    let config = MachineConfig {
        seed: "abc_user".to_string(),
        ..MachineConfig::default()
    };
    let value = serde_json::to_value(&config).unwrap();
    assert!(value.get("rotors").unwrap().is_array());
    assert!(value.get("reflector").unwrap().is_string());
    assert!(value.get("plugboard").unwrap().is_string());
    assert_eq!(value.get("seed").unwrap(), "abc_user");
}

/// Loading a config and exporting it again reproduces the wirings; the
/// seed is whatever the caller passes through.
#[test]
fn config_load_export_roundtrip() {
    let config = MachineConfig {
        seed: "roundtrip".to_string(),
        ..MachineConfig::default()
    };
    let machine = Rotorwerk::from_config(&config).unwrap();
    assert_eq!(machine.export_config("roundtrip"), config);
}

/// Two machines from the same record are indistinguishable and isolated.
#[test]
fn config_machines_are_isolated() {
    let config = MachineConfig::default();
    let mut a = Rotorwerk::from_config(&config).unwrap();
    let mut b = Rotorwerk::from_config(&config).unwrap();

    assert_eq!(a.scramble_text("ISOLATION"), b.scramble_text("ISOLATION"));

    a.scramble_text("DRIFT");
    assert_ne!(a.get_positions(), b.get_positions());
}

/// Malformed records fail fast with the specific wiring error.
#[test]
fn config_rejects_malformed_wirings() {
    let short_rotor = MachineConfig {
        rotors: [
            "ABC".to_string(),
            MachineConfig::default().rotors[1].clone(),
            MachineConfig::default().rotors[2].clone(),
        ],
        ..MachineConfig::default()
    };
    assert_eq!(
        Rotorwerk::from_config(&short_rotor).err(),
        Some(RotorwerkError::WiringLength(3))
    );

    let duplicate_plugboard = MachineConfig {
        plugboard: "AACDEFGHIJKLMNOPQRSTUVWXYZ".to_string(),
        ..MachineConfig::default()
    };
    assert_eq!(
        Rotorwerk::from_config(&duplicate_plugboard).err(),
        Some(RotorwerkError::DuplicateSymbol('A'))
    );

    let identity_reflector = MachineConfig {
        reflector: "ABCDEFGHIJKLMNOPQRSTUVWXYZ".to_string(),
        ..MachineConfig::default()
    };
    assert_eq!(
        Rotorwerk::from_config(&identity_reflector).err(),
        Some(RotorwerkError::ReflectorFixedPoint('A'))
    );
}
