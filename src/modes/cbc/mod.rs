//! Cipher block chaining (CBC) processing
//!
//! Each plaintext block is XORed with the running register before the
//! forward transform; the register is then re-seeded with the produced
//! ciphertext block. On decrypt the register is re-seeded with the
//! just-consumed ciphertext block, so a corrupted block disturbs exactly
//! two plaintext blocks. The caller owns the register and commits it back
//! to the stream state on success.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::primitive::BlockPrimitive;
use crate::schedule::KeySchedule;
use crate::types::{Block, BLOCK_SIZE};

/// Encrypts block-aligned input, chaining through `register`
pub(super) fn encrypt_blocks<P: BlockPrimitive>(
    schedule: &KeySchedule<P>,
    register: &mut Block,
    input: &[u8],
    out: &mut Vec<u8>,
) {
    for chunk in input.chunks_exact(BLOCK_SIZE) {
        let mut block: Block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        for (b, r) in block.iter_mut().zip(register.iter()) {
            *b ^= r;
        }
        P::transform(schedule.round_keys(), schedule.rounds(), &mut block);
        *register = block;
        out.extend_from_slice(&block);
    }
}

/// Decrypts block-aligned input, chaining through `register`
pub(super) fn decrypt_blocks<P: BlockPrimitive>(
    schedule: &KeySchedule<P>,
    register: &mut Block,
    input: &[u8],
    out: &mut Vec<u8>,
) {
    for chunk in input.chunks_exact(BLOCK_SIZE) {
        let mut block: Block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        let ciphertext_block = block;
        P::transform_inv(schedule.round_keys(), schedule.rounds(), &mut block);
        for (b, r) in block.iter_mut().zip(register.iter()) {
            *b ^= r;
        }
        *register = ciphertext_block;
        out.extend_from_slice(&block);
    }
}

#[cfg(test)]
mod tests;
