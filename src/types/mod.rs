//! Scalar selectors and block-sized values
//!
//! The small vocabulary the rest of the crate is built from: the fixed
//! 16-byte block, the key direction, the operating mode, and the three
//! supported key sizes.

use crate::error::{Error, Result};

/// Block size of the underlying primitive, in bytes (128 bits)
pub const BLOCK_SIZE: usize = 16;

/// One block of the underlying primitive
pub type Block = [u8; BLOCK_SIZE];

/// Key direction, fixed at schedule construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Schedule expanded for the forward transform
    Encrypt,
    /// Schedule expanded for the inverse transform
    Decrypt,
}

impl Direction {
    /// Direction name for diagnostics
    pub fn name(self) -> &'static str {
        match self {
            Direction::Encrypt => "encrypt",
            Direction::Decrypt => "decrypt",
        }
    }
}

/// Operating mode of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Electronic codebook: each block transformed independently
    Ecb,
    /// Cipher block chaining: each block XORed with the previous ciphertext
    Cbc,
    /// Cipher feedback with a 1-bit segment size
    Cfb1,
}

impl Mode {
    /// Mode name for diagnostics
    pub fn name(self) -> &'static str {
        match self {
            Mode::Ecb => "ECB",
            Mode::Cbc => "CBC",
            Mode::Cfb1 => "CFB-1",
        }
    }
}

/// Supported key sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBits {
    /// 128-bit key
    Bits128,
    /// 192-bit key
    Bits192,
    /// 256-bit key
    Bits256,
}

impl KeyBits {
    /// Key size in bits
    pub fn bits(self) -> usize {
        match self {
            KeyBits::Bits128 => 128,
            KeyBits::Bits192 => 192,
            KeyBits::Bits256 => 256,
        }
    }

    /// Key size in bytes
    pub fn byte_len(self) -> usize {
        self.bits() / 8
    }

    /// Key material size in hex characters
    pub fn hex_len(self) -> usize {
        self.bits() / 4
    }
}

impl TryFrom<usize> for KeyBits {
    type Error = Error;

    fn try_from(bits: usize) -> Result<Self> {
        match bits {
            128 => Ok(KeyBits::Bits128),
            192 => Ok(KeyBits::Bits192),
            256 => Ok(KeyBits::Bits256),
            _ => Err(Error::KeyMaterial {
                reason: "key size must be 128, 192, or 256 bits",
            }),
        }
    }
}
