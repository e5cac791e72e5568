//! Block cipher modes of operation over a pluggable 128-bit block primitive
//!
//! This crate turns a single fixed-size block transform into a usable
//! byte-stream cipher. It provides three operating modes (ECB, CBC, and
//! 1-bit cipher feedback), hex key/IV parsing, a deterministic always-pad
//! padding scheme, and strict fail-closed validation on decrypt.
//!
//! The block transform itself is an external collaborator supplied through
//! the [`BlockPrimitive`] trait: key expansion producing a round-key
//! schedule and a round count, plus forward and inverse transforms over one
//! 16-byte block. This crate never implements the round arithmetic.
//!
//! # Usage
//!
//! A caller builds a [`KeySchedule`] once per key and direction, a
//! [`CipherState`] once per stream, then drives the engine operations over
//! successive buffers. The state's feedback register advances between calls
//! so chaining is preserved across an internally buffered stream:
//!
//! ```ignore
//! use rijndael_modes::{block_encrypt, CipherState, Direction, KeySchedule, Mode};
//!
//! let key = KeySchedule::<MyCipher>::new(
//!     Direction::Encrypt,
//!     128,
//!     "000102030405060708090a0b0c0d0e0f",
//! )?;
//! let mut state = CipherState::new(Mode::Cbc, Some("00000000000000000000000000000000"))?;
//! let ciphertext = block_encrypt(&key, &mut state, &plaintext)?;
//! ```
//!
//! # Security notes
//!
//! - Key-derived material (round-key schedules, decoded key bytes, the
//!   feedback register) is zeroized on drop.
//! - Padding verification accumulates a constant-time comparison over the
//!   whole pad tail rather than exiting on the first mismatch.
//! - A [`KeySchedule`] is immutable after construction and safe to share;
//!   a [`CipherState`] is a single-stream value and must not be driven by
//!   two threads concurrently.
//!
//! No message authentication is provided; this layer is confidentiality
//! plumbing only.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Scalar selectors and block-sized values
pub mod types;
pub use types::{Block, Direction, KeyBits, Mode, BLOCK_SIZE};

// External block transform capability surface
pub mod primitive;
pub use primitive::BlockPrimitive;

// Key material and IV codec
pub mod codec;

// Expanded key schedules
pub mod schedule;
pub use schedule::KeySchedule;

// Per-stream cipher state
pub mod state;
pub use state::{CipherState, FeedbackRegister};

// Always-pad padding scheme
pub mod padding;

// Mode engine
pub mod modes;
pub use modes::{block_decrypt, block_encrypt, pad_decrypt, pad_encrypt};
