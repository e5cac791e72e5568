//! Per-stream cipher state
//!
//! A [`CipherState`] pairs an operating mode with the 16-byte feedback
//! register: the IV at rest, re-seeded with each processed block's
//! ciphertext in CBC, and shifted left bit by bit in 1-bit cipher
//! feedback. One state value drives exactly one logical stream of calls;
//! parallel streams need independent states (optionally sharing one
//! immutable [`KeySchedule`](crate::KeySchedule)).

use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::codec;
use crate::error::Result;
use crate::types::{Block, Mode, BLOCK_SIZE};

/// The 16-byte feedback register carried across blocks
///
/// An explicit bit-shift-register abstraction so byte and bit indexing
/// never mix: the register shifts left one bit at a time, taking the new
/// bit at the low end.
#[derive(Debug, Clone, Zeroize, ZeroizeOnDrop)]
pub struct FeedbackRegister(Block);

impl FeedbackRegister {
    /// Creates a register from an initial 16-byte value
    pub fn new(value: Block) -> Self {
        Self(value)
    }

    /// Current register contents
    pub fn bytes(&self) -> &Block {
        &self.0
    }

    /// Replaces the register contents
    pub fn load(&mut self, value: Block) {
        self.0 = value;
    }

    /// Shifts the register left by one bit, inserting `bit` at the low end
    pub fn shift_in_bit(&mut self, bit: u8) {
        for i in 0..BLOCK_SIZE - 1 {
            self.0[i] = (self.0[i] << 1) | (self.0[i + 1] >> 7);
        }
        self.0[BLOCK_SIZE - 1] = (self.0[BLOCK_SIZE - 1] << 1) | (bit & 1);
    }
}

/// Mode selector plus feedback register for one cipher stream
#[derive(Debug, Clone, Zeroize, ZeroizeOnDrop)]
pub struct CipherState {
    #[zeroize(skip)]
    mode: Mode,
    register: FeedbackRegister,
}

impl CipherState {
    /// Initializes a cipher state from an optional hex IV
    ///
    /// An absent IV seeds the register with zeroes; a present IV must be
    /// exactly 32 hex characters. In ECB mode the register exists but is
    /// never consulted.
    pub fn new(mode: Mode, iv: Option<&str>) -> Result<Self> {
        let register = FeedbackRegister::new(codec::decode_iv(iv)?);
        Ok(Self { mode, register })
    }

    /// Initializes a cipher state from raw register bytes
    pub fn from_register(mode: Mode, register: Block) -> Self {
        Self {
            mode,
            register: FeedbackRegister::new(register),
        }
    }

    /// Initializes a cipher state with a random IV
    pub fn random<R: RngCore + CryptoRng>(mode: Mode, rng: &mut R) -> Self {
        let mut register = [0u8; BLOCK_SIZE];
        rng.fill_bytes(&mut register);
        Self::from_register(mode, register)
    }

    /// Re-seeds the register for a fresh stream under the same key
    ///
    /// Accepts the same IV format as [`CipherState::new`].
    pub fn reset(&mut self, iv: Option<&str>) -> Result<()> {
        self.register.load(codec::decode_iv(iv)?);
        Ok(())
    }

    /// Operating mode of this state
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The feedback register
    pub fn register(&self) -> &FeedbackRegister {
        &self.register
    }

    pub(crate) fn register_mut(&mut self) -> &mut FeedbackRegister {
        &mut self.register
    }
}
