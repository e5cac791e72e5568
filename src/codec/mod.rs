//! Key material and IV codec
//!
//! Key material and IVs cross this layer's boundary as fixed-width hex
//! strings: exactly `keyBits / 4` characters for a key, exactly 32 for an
//! IV. Decoding is strict — any other length or any non-hex character is
//! rejected, and an absent IV yields the all-zero register.

#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::error::{validate, Error, Result};
use crate::types::{Block, KeyBits, BLOCK_SIZE};

/// Decodes hex key material into raw key bytes
///
/// The input must be exactly `key_bits.hex_len()` characters of
/// `[0-9a-fA-F]`; two characters combine into one byte, most-significant
/// nibble first. The decoded bytes are zeroized when dropped.
pub fn decode_key(key_material: &str, key_bits: KeyBits) -> Result<Zeroizing<Vec<u8>>> {
    validate::key_material(
        key_material.len() == key_bits.hex_len(),
        "key material length does not match key size",
    )?;

    let raw = hex::decode(key_material).map_err(|_| Error::KeyMaterial {
        reason: "non-hex character in key material",
    })?;
    Ok(Zeroizing::new(raw))
}

/// Decodes a hex IV into a 16-byte register value
///
/// An absent IV yields the all-zero register; a present IV must be exactly
/// 32 hex characters.
pub fn decode_iv(iv: Option<&str>) -> Result<Block> {
    let iv = match iv {
        None => return Ok([0u8; BLOCK_SIZE]),
        Some(iv) => iv,
    };

    validate::cipher_instance(
        iv.len() == 2 * BLOCK_SIZE,
        "initialization vector must be 32 hex characters",
    )?;

    let raw = hex::decode(iv).map_err(|_| Error::CipherInstance {
        reason: "non-hex character in initialization vector",
    })?;

    let mut register = [0u8; BLOCK_SIZE];
    register.copy_from_slice(&raw);
    Ok(register)
}

/// Generates random key material in the hex exchange format
///
/// Convenience for callers that feed [`KeySchedule::new`](crate::KeySchedule::new)
/// directly; the returned string is zeroized when dropped.
pub fn generate_key_hex<R: RngCore + CryptoRng>(
    key_bits: KeyBits,
    rng: &mut R,
) -> Zeroizing<String> {
    let mut raw = Zeroizing::new(vec![0u8; key_bits.byte_len()]);
    rng.fill_bytes(&mut raw);
    Zeroizing::new(hex::encode(&*raw))
}
