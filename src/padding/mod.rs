//! Always-pad padding scheme
//!
//! Deterministic padding over 16-byte blocks: `pad_len = 16 - (len mod 16)`,
//! which is a full extra block when the input is already aligned and
//! between 1 and 15 bytes otherwise. Every pad byte carries the pad length
//! (unlike PKCS#7 verification conventions, all bytes are checked, not
//! just the last). Verification on decrypt is fail-closed and compares the
//! whole pad tail in constant time.

use subtle::{Choice, ConstantTimeEq};

use crate::error::{validate, Result};
use crate::types::{Block, BLOCK_SIZE};

/// Pad length the scheme assigns to an input of `len` bytes
///
/// Always in `1..=16`: aligned input still gets a full padding block.
pub fn pad_len(len: usize) -> usize {
    BLOCK_SIZE - (len % BLOCK_SIZE)
}

/// Builds the final block from the trailing partial input
///
/// `tail` is the input remainder after all full blocks, so it holds
/// between 0 and 15 bytes; the rest of the block is filled with the pad
/// length value.
pub fn fill_final_block(tail: &[u8]) -> Block {
    debug_assert!(tail.len() < BLOCK_SIZE);
    let fill = (BLOCK_SIZE - tail.len()) as u8;
    let mut block = [fill; BLOCK_SIZE];
    block[..tail.len()].copy_from_slice(tail);
    block
}

/// Verifies the pad tail of the final decrypted block, returning the pad length
///
/// The pad length is read from the last byte and must be in `1..=16`; the
/// last `pad_len` bytes must all carry that value. The fill comparison is
/// accumulated over the whole tail rather than exiting early.
pub fn verify_final_block(block: &Block) -> Result<usize> {
    let pad = block[BLOCK_SIZE - 1] as usize;
    validate::data(pad >= 1 && pad <= BLOCK_SIZE, "padding length out of range")?;

    let mut uniform = Choice::from(1u8);
    for byte in &block[BLOCK_SIZE - pad..] {
        uniform &= byte.ct_eq(&(pad as u8));
    }
    validate::data(bool::from(uniform), "padding bytes are not uniform")?;
    Ok(pad)
}
