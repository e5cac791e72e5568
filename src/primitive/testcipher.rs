//! Test-only block primitive
//!
//! A small invertible substitution-permutation cipher with the same shape
//! as a real collaborator: direction-specific schedules derived from the
//! raw key, 10/12/14 rounds per key size, and forward/inverse transforms
//! that only compose correctly when the engine hands them the schedule
//! expanded for the matching direction (the decrypt schedule stores its
//! round keys in reverse round order).

use crate::error::{validate, Result};
use crate::types::{Block, Direction, KeyBits, BLOCK_SIZE};

#[derive(Debug)]
pub(crate) enum TestCipher {}

fn rounds_for(key_bits: KeyBits) -> usize {
    match key_bits {
        KeyBits::Bits128 => 10,
        KeyBits::Bits192 => 12,
        KeyBits::Bits256 => 14,
    }
}

fn round_key(raw_key: &[u8], round: usize) -> Block {
    let mut rk = [0u8; BLOCK_SIZE];
    for (i, b) in rk.iter_mut().enumerate() {
        *b = raw_key[(round + i) % raw_key.len()]
            ^ (round as u8).wrapping_mul(0x2b)
            ^ (i as u8).wrapping_mul(0x11);
    }
    rk
}

fn forward_round(block: &mut Block, rk: &[u8]) {
    for (b, k) in block.iter_mut().zip(rk) {
        *b = (*b ^ k).wrapping_mul(5);
    }
    let prev = *block;
    for i in 0..BLOCK_SIZE {
        block[i] = prev[(i + 3) % BLOCK_SIZE];
    }
}

fn inverse_round(block: &mut Block, rk: &[u8]) {
    let prev = *block;
    for i in 0..BLOCK_SIZE {
        block[i] = prev[(i + BLOCK_SIZE - 3) % BLOCK_SIZE];
    }
    // 205 is the multiplicative inverse of 5 modulo 256
    for (b, k) in block.iter_mut().zip(rk) {
        *b = b.wrapping_mul(205) ^ k;
    }
}

impl super::BlockPrimitive for TestCipher {
    type RoundKeys = Vec<u8>;

    fn expand_key(
        raw_key: &[u8],
        key_bits: KeyBits,
        direction: Direction,
    ) -> Result<(Self::RoundKeys, usize)> {
        validate::key_material(
            raw_key.len() == key_bits.byte_len(),
            "raw key length does not match key size",
        )?;

        let rounds = rounds_for(key_bits);
        let mut keys = Vec::with_capacity(rounds * BLOCK_SIZE);
        match direction {
            Direction::Encrypt => {
                for r in 0..rounds {
                    keys.extend_from_slice(&round_key(raw_key, r));
                }
            }
            Direction::Decrypt => {
                for r in (0..rounds).rev() {
                    keys.extend_from_slice(&round_key(raw_key, r));
                }
            }
        }
        Ok((keys, rounds))
    }

    fn transform(round_keys: &Self::RoundKeys, rounds: usize, block: &mut Block) {
        for rk in round_keys.chunks_exact(BLOCK_SIZE).take(rounds) {
            forward_round(block, rk);
        }
    }

    fn transform_inv(round_keys: &Self::RoundKeys, rounds: usize, block: &mut Block) {
        for rk in round_keys.chunks_exact(BLOCK_SIZE).take(rounds) {
            inverse_round(block, rk);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::BlockPrimitive;

    #[test]
    fn test_single_block_inverts() {
        let raw_key: Vec<u8> = (0u8..16).collect();
        let (enc, rounds) =
            TestCipher::expand_key(&raw_key, KeyBits::Bits128, Direction::Encrypt).unwrap();
        let (dec, dec_rounds) =
            TestCipher::expand_key(&raw_key, KeyBits::Bits128, Direction::Decrypt).unwrap();
        assert_eq!(rounds, 10);
        assert_eq!(dec_rounds, rounds);

        let original: Block = *b"0123456789abcdef";
        let mut block = original;
        TestCipher::transform(&enc, rounds, &mut block);
        assert_ne!(block, original);
        TestCipher::transform_inv(&dec, rounds, &mut block);
        assert_eq!(block, original);
    }

    #[test]
    fn test_round_counts_per_key_size() {
        let raw24: Vec<u8> = (0u8..24).collect();
        let raw32: Vec<u8> = (0u8..32).collect();
        let (_, r192) = TestCipher::expand_key(&raw24, KeyBits::Bits192, Direction::Encrypt).unwrap();
        let (_, r256) = TestCipher::expand_key(&raw32, KeyBits::Bits256, Direction::Encrypt).unwrap();
        assert_eq!(r192, 12);
        assert_eq!(r256, 14);
    }

    #[test]
    fn test_mismatched_raw_key_rejected() {
        let raw_key = [0u8; 24];
        assert!(TestCipher::expand_key(&raw_key, KeyBits::Bits128, Direction::Encrypt).is_err());
    }
}
