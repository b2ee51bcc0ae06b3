//! Reflector: static involutive substitution stage.
//!
//! The reflector bounces the signal back through the rotor stack. Its
//! wiring must be an involution with no fixed point: every symbol maps to
//! a different partner that maps straight back. That property is what
//! makes the whole pipeline reciprocal, so it is checked at construction.

use crate::alphabet::{self, ALPHABET_LEN};
use crate::error::RotorwerkError;
use crate::wiring::Wiring;

/// A fixed involutive permutation of the alphabet.
#[derive(Debug, Clone)]
pub struct Reflector {
    wiring: Wiring,
}

impl Reflector {
    /// Creates a reflector, validating the involution property.
    ///
    /// # Errors
    /// - [`RotorwerkError::ReflectorFixedPoint`] if any symbol maps to itself.
    /// - [`RotorwerkError::ReflectorNotInvolutive`] if any mapping is not
    ///   mirrored by its partner.
    pub fn new(wiring: Wiring) -> Result<Self, RotorwerkError> {
        for i in 0..ALPHABET_LEN {
            let image = wiring.image_of(i);
            if image == i {
                return Err(RotorwerkError::ReflectorFixedPoint(alphabet::symbol_at(i)));
            }
            let back = wiring.image_of(image);
            if back != i {
                return Err(RotorwerkError::ReflectorNotInvolutive {
                    from: alphabet::symbol_at(i),
                    to: alphabet::symbol_at(image),
                    back: alphabet::symbol_at(back),
                });
            }
        }
        Ok(Reflector { wiring })
    }

    /// Substitutes alphabet position `index` through the reflector.
    pub fn reflect(&self, index: u8) -> u8 {
        self.wiring.image_of(index)
    }

    /// Returns the reflector's wiring table.
    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }
}
