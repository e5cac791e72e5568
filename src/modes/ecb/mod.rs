//! Electronic codebook (ECB) processing
//!
//! Each block is transformed independently; the feedback register is never
//! consulted. Identical plaintext blocks therefore produce identical
//! ciphertext blocks, which is why ECB is only suitable as a building
//! block or for data that is itself non-repeating.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::primitive::BlockPrimitive;
use crate::schedule::KeySchedule;
use crate::types::{Block, BLOCK_SIZE};

/// Transforms block-aligned input forward, block by block
pub(super) fn encrypt_blocks<P: BlockPrimitive>(
    schedule: &KeySchedule<P>,
    input: &[u8],
    out: &mut Vec<u8>,
) {
    for chunk in input.chunks_exact(BLOCK_SIZE) {
        let mut block: Block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        P::transform(schedule.round_keys(), schedule.rounds(), &mut block);
        out.extend_from_slice(&block);
    }
}

/// Transforms block-aligned input inverse, block by block
pub(super) fn decrypt_blocks<P: BlockPrimitive>(
    schedule: &KeySchedule<P>,
    input: &[u8],
    out: &mut Vec<u8>,
) {
    for chunk in input.chunks_exact(BLOCK_SIZE) {
        let mut block: Block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        P::transform_inv(schedule.round_keys(), schedule.rounds(), &mut block);
        out.extend_from_slice(&block);
    }
}
