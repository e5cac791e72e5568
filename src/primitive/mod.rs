//! Capability surface of the external block primitive
//!
//! The mode layer is built over a raw 16-byte block transform supplied by a
//! collaborator: key expansion producing an opaque round-key schedule and a
//! round count, plus forward and inverse transforms over one block. The
//! round arithmetic (substitution tables, finite-field work) lives entirely
//! behind this trait.

use zeroize::Zeroize;

use crate::error::Result;
use crate::types::{Block, Direction, KeyBits};

/// External 128-bit block transform
///
/// Implementations are expected to return a round count of 10, 12, or 14
/// for 128-, 192-, and 256-bit keys respectively, and to expand
/// direction-specific schedules: a schedule expanded for [`Direction::Encrypt`]
/// feeds [`transform`](Self::transform), one expanded for
/// [`Direction::Decrypt`] feeds [`transform_inv`](Self::transform_inv).
pub trait BlockPrimitive {
    /// Opaque expanded round-key schedule
    type RoundKeys: Clone + Zeroize;

    /// Expands raw key bytes into a round-key schedule for one direction
    ///
    /// `raw_key` must hold exactly `key_bits.byte_len()` bytes. Returns the
    /// schedule together with the round count.
    fn expand_key(
        raw_key: &[u8],
        key_bits: KeyBits,
        direction: Direction,
    ) -> Result<(Self::RoundKeys, usize)>;

    /// Applies the forward transform to one block in place
    fn transform(round_keys: &Self::RoundKeys, rounds: usize, block: &mut Block);

    /// Applies the inverse transform to one block in place
    fn transform_inv(round_keys: &Self::RoundKeys, rounds: usize, block: &mut Block);
}

#[cfg(test)]
pub(crate) mod testcipher;
