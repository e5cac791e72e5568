//! Expanded key schedules
//!
//! A [`KeySchedule`] is built once per key and direction and is immutable
//! afterwards, so it can be shared read-only across concurrent streams.
//! Alongside the direction-specific schedule it always carries a second,
//! always-encrypt schedule expanded from the same raw key bytes: 1-bit
//! cipher feedback only ever runs the forward transform, even when the
//! overall direction is decrypt.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::codec;
use crate::error::Result;
use crate::primitive::BlockPrimitive;
use crate::types::{Direction, KeyBits};

/// Direction-tagged expanded key schedule
#[derive(Debug)]
pub struct KeySchedule<P: BlockPrimitive> {
    direction: Direction,
    key_bits: KeyBits,
    rounds: usize,
    round_keys: P::RoundKeys,
    forward_round_keys: P::RoundKeys,
}

impl<P: BlockPrimitive> KeySchedule<P> {
    /// Builds a key schedule from hex key material
    ///
    /// `key_bits` must be 128, 192, or 256; the key material must be
    /// exactly `key_bits / 4` hex characters. The primitive's key
    /// expansion runs once for `direction` and once forced to encrypt,
    /// over the same raw bytes. The raw bytes are zeroized before this
    /// function returns.
    pub fn new(direction: Direction, key_bits: usize, key_material: &str) -> Result<Self> {
        let key_bits = KeyBits::try_from(key_bits)?;
        let raw_key = codec::decode_key(key_material, key_bits)?;

        let (round_keys, rounds) = P::expand_key(&raw_key, key_bits, direction)?;
        let (forward_round_keys, _) = P::expand_key(&raw_key, key_bits, Direction::Encrypt)?;

        Ok(Self {
            direction,
            key_bits,
            rounds,
            round_keys,
            forward_round_keys,
        })
    }

    /// Direction this schedule was expanded for
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Key size
    pub fn key_bits(&self) -> KeyBits {
        self.key_bits
    }

    /// Round count reported by the primitive's key expansion
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Schedule for this schedule's direction
    pub fn round_keys(&self) -> &P::RoundKeys {
        &self.round_keys
    }

    /// Always-encrypt schedule used by cipher feedback
    pub fn forward_round_keys(&self) -> &P::RoundKeys {
        &self.forward_round_keys
    }
}

impl<P: BlockPrimitive> Clone for KeySchedule<P> {
    fn clone(&self) -> Self {
        Self {
            direction: self.direction,
            key_bits: self.key_bits,
            rounds: self.rounds,
            round_keys: self.round_keys.clone(),
            forward_round_keys: self.forward_round_keys.clone(),
        }
    }
}

impl<P: BlockPrimitive> Zeroize for KeySchedule<P> {
    fn zeroize(&mut self) {
        self.round_keys.zeroize();
        self.forward_round_keys.zeroize();
    }
}

impl<P: BlockPrimitive> Drop for KeySchedule<P> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<P: BlockPrimitive> ZeroizeOnDrop for KeySchedule<P> {}
