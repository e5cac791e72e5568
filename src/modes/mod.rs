//! Mode engine
//!
//! The four engine operations over a key schedule, a stream state, and a
//! byte buffer. The unpadded pair processes whole 16-byte blocks and
//! silently ignores a trailing partial block; the padded pair applies the
//! always-pad scheme and is defined for ECB and CBC only. Chaining modes
//! advance the state's feedback register on a local copy and commit it
//! only when the whole call succeeds, so a rejected operation never leaves
//! the register half-advanced.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::{validate, Error, Result};
use crate::padding;
use crate::primitive::BlockPrimitive;
use crate::schedule::KeySchedule;
use crate::state::CipherState;
use crate::types::{Block, Direction, Mode, BLOCK_SIZE};

mod cbc;
mod cfb1;
mod ecb;

/// Encrypts whole blocks without padding
///
/// Requires an encrypt-direction schedule. Output holds one ciphertext
/// block per whole 16-byte input block; any trailing partial block is
/// ignored. Empty (or sub-block) input is a benign no-op producing empty
/// output.
pub fn block_encrypt<P: BlockPrimitive>(
    schedule: &KeySchedule<P>,
    state: &mut CipherState,
    input: &[u8],
) -> Result<Vec<u8>> {
    validate::cipher_state(
        schedule.direction() == Direction::Encrypt,
        "block encrypt",
        "requires an encrypt-direction key schedule",
    )?;

    let aligned = &input[..input.len() - input.len() % BLOCK_SIZE];
    let mut out = Vec::with_capacity(aligned.len());
    if aligned.is_empty() {
        return Ok(out);
    }

    match state.mode() {
        Mode::Ecb => ecb::encrypt_blocks(schedule, aligned, &mut out),
        Mode::Cbc => {
            let mut register: Block = *state.register().bytes();
            cbc::encrypt_blocks(schedule, &mut register, aligned, &mut out);
            state.register_mut().load(register);
        }
        Mode::Cfb1 => {
            let mut register = state.register().clone();
            cfb1::encrypt_blocks(schedule, &mut register, aligned, &mut out);
            *state.register_mut() = register;
        }
    }
    Ok(out)
}

/// Decrypts whole blocks without padding
///
/// Requires a decrypt-direction schedule, except in CFB-1 where an
/// encrypt-direction key is explicitly permitted: the feedback path only
/// ever runs the forward transform. Trailing partial blocks and empty
/// input behave as in [`block_encrypt`].
pub fn block_decrypt<P: BlockPrimitive>(
    schedule: &KeySchedule<P>,
    state: &mut CipherState,
    input: &[u8],
) -> Result<Vec<u8>> {
    validate::cipher_state(
        state.mode() == Mode::Cfb1 || schedule.direction() == Direction::Decrypt,
        "block decrypt",
        "requires a decrypt-direction key schedule outside CFB-1",
    )?;

    let aligned = &input[..input.len() - input.len() % BLOCK_SIZE];
    let mut out = Vec::with_capacity(aligned.len());
    if aligned.is_empty() {
        return Ok(out);
    }

    match state.mode() {
        Mode::Ecb => ecb::decrypt_blocks(schedule, aligned, &mut out),
        Mode::Cbc => {
            let mut register: Block = *state.register().bytes();
            cbc::decrypt_blocks(schedule, &mut register, aligned, &mut out);
            state.register_mut().load(register);
        }
        Mode::Cfb1 => {
            let mut register = state.register().clone();
            cfb1::decrypt_blocks(schedule, &mut register, aligned, &mut out);
            *state.register_mut() = register;
        }
    }
    Ok(out)
}

/// Encrypts with always-pad padding (ECB and CBC only)
///
/// Accepts any input length. Full blocks are processed exactly as in
/// [`block_encrypt`]; one final block is then built from the trailing
/// partial input plus `padLen` bytes of value `padLen`, where
/// `padLen = 16 - (len mod 16)` — a full extra block when the input is
/// already aligned. Output is always `input.len() + padLen` bytes. Empty
/// input is a benign no-op producing empty output.
pub fn pad_encrypt<P: BlockPrimitive>(
    schedule: &KeySchedule<P>,
    state: &mut CipherState,
    input: &[u8],
) -> Result<Vec<u8>> {
    validate::cipher_state(
        schedule.direction() == Direction::Encrypt,
        "pad encrypt",
        "requires an encrypt-direction key schedule",
    )?;

    if input.is_empty() {
        return Ok(Vec::new());
    }

    let full = input.len() / BLOCK_SIZE * BLOCK_SIZE;
    let (body, tail) = input.split_at(full);
    let final_block = padding::fill_final_block(tail);
    let mut out = Vec::with_capacity(full + BLOCK_SIZE);

    match state.mode() {
        Mode::Ecb => {
            ecb::encrypt_blocks(schedule, body, &mut out);
            ecb::encrypt_blocks(schedule, &final_block, &mut out);
        }
        Mode::Cbc => {
            let mut register: Block = *state.register().bytes();
            cbc::encrypt_blocks(schedule, &mut register, body, &mut out);
            cbc::encrypt_blocks(schedule, &mut register, &final_block, &mut out);
            state.register_mut().load(register);
        }
        Mode::Cfb1 => {
            return Err(Error::CipherState {
                operation: "pad encrypt",
                details: "not defined for 1-bit cipher feedback",
            })
        }
    }
    Ok(out)
}

/// Decrypts and strips always-pad padding (ECB and CBC only)
///
/// Input must be a whole number of blocks. The final decrypted block's
/// last byte names the pad length, which must be in `1..=16` with every
/// pad byte carrying that value; anything else is rejected as bad data
/// with no partial plaintext returned, and the feedback register is left
/// exactly as it was before the call. Empty input is a benign no-op.
pub fn pad_decrypt<P: BlockPrimitive>(
    schedule: &KeySchedule<P>,
    state: &mut CipherState,
    input: &[u8],
) -> Result<Vec<u8>> {
    validate::cipher_state(
        schedule.direction() == Direction::Decrypt,
        "pad decrypt",
        "requires a decrypt-direction key schedule",
    )?;

    if input.is_empty() {
        return Ok(Vec::new());
    }

    validate::data(
        input.len() % BLOCK_SIZE == 0,
        "ciphertext length is not a multiple of the block size",
    )?;

    let mut out = Vec::with_capacity(input.len());
    match state.mode() {
        Mode::Ecb => {
            ecb::decrypt_blocks(schedule, input, &mut out);
            let pad = verify_tail(&out)?;
            out.truncate(input.len() - pad);
        }
        Mode::Cbc => {
            let mut register: Block = *state.register().bytes();
            cbc::decrypt_blocks(schedule, &mut register, input, &mut out);
            let pad = verify_tail(&out)?;
            out.truncate(input.len() - pad);
            state.register_mut().load(register);
        }
        Mode::Cfb1 => {
            return Err(Error::CipherState {
                operation: "pad decrypt",
                details: "not defined for 1-bit cipher feedback",
            })
        }
    }
    Ok(out)
}

/// Runs padding verification over the final decrypted block
fn verify_tail(decrypted: &[u8]) -> Result<usize> {
    let mut last: Block = [0u8; BLOCK_SIZE];
    last.copy_from_slice(&decrypted[decrypted.len() - BLOCK_SIZE..]);
    padding::verify_final_block(&last)
}
