//! 1-bit cipher feedback (CFB-1) processing
//!
//! Segment size is one bit: for every bit of input the register is run
//! through the forward transform, the top bit of the result is the
//! keystream bit, and the register shifts left by one with the ciphertext
//! bit entering at the low end. The ciphertext bit is what re-enters the
//! register on both encrypt and decrypt; feeding back the derived
//! plaintext instead would break the mode. Only the always-encrypt
//! schedule is used, so a decrypt stream works fine with an
//! encrypt-direction key.
//!
//! 128 bits are processed per 16-byte block; like the other block
//! operations, a trailing partial block is ignored.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::primitive::BlockPrimitive;
use crate::schedule::KeySchedule;
use crate::state::FeedbackRegister;
use crate::types::{Block, BLOCK_SIZE};

const BLOCK_BITS: usize = BLOCK_SIZE * 8;

/// Bit `k` of a block, numbered from the most significant bit of byte 0
fn bit_at(block: &Block, k: usize) -> u8 {
    (block[k / 8] >> (7 - k % 8)) & 1
}

/// Overwrites bit `k` of a block
fn put_bit(block: &mut Block, k: usize, bit: u8) {
    let mask = 0x80 >> (k % 8);
    if bit & 1 == 1 {
        block[k / 8] |= mask;
    } else {
        block[k / 8] &= !mask;
    }
}

/// One keystream bit: the top bit of the forward-transformed register
fn keystream_bit<P: BlockPrimitive>(schedule: &KeySchedule<P>, register: &FeedbackRegister) -> u8 {
    let mut stream: Block = *register.bytes();
    P::transform(schedule.forward_round_keys(), schedule.rounds(), &mut stream);
    stream[0] >> 7
}

/// Encrypts block-aligned input bit by bit
pub(super) fn encrypt_blocks<P: BlockPrimitive>(
    schedule: &KeySchedule<P>,
    register: &mut FeedbackRegister,
    input: &[u8],
    out: &mut Vec<u8>,
) {
    for chunk in input.chunks_exact(BLOCK_SIZE) {
        let mut block: Block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        for k in 0..BLOCK_BITS {
            let ciphertext_bit = bit_at(&block, k) ^ keystream_bit(schedule, register);
            put_bit(&mut block, k, ciphertext_bit);
            register.shift_in_bit(ciphertext_bit);
        }
        out.extend_from_slice(&block);
    }
}

/// Decrypts block-aligned input bit by bit
pub(super) fn decrypt_blocks<P: BlockPrimitive>(
    schedule: &KeySchedule<P>,
    register: &mut FeedbackRegister,
    input: &[u8],
    out: &mut Vec<u8>,
) {
    for chunk in input.chunks_exact(BLOCK_SIZE) {
        let mut block: Block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        for k in 0..BLOCK_BITS {
            let ciphertext_bit = bit_at(&block, k);
            put_bit(&mut block, k, ciphertext_bit ^ keystream_bit(schedule, register));
            register.shift_in_bit(ciphertext_bit);
        }
        out.extend_from_slice(&block);
    }
}
