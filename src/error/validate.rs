//! Validation utilities for the mode-of-operation layer

use super::{Error, Result};

/// Validate a key material condition
#[inline(always)]
pub fn key_material(condition: bool, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::KeyMaterial { reason });
    }
    Ok(())
}

/// Validate a cipher instance condition
#[inline(always)]
pub fn cipher_instance(condition: bool, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::CipherInstance { reason });
    }
    Ok(())
}

/// Validate that an operation matches the direction/mode it was invoked with
#[inline(always)]
pub fn cipher_state(condition: bool, operation: &'static str, details: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::CipherState { operation, details });
    }
    Ok(())
}

/// Validate a data condition on decrypt
#[inline(always)]
pub fn data(condition: bool, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Data { reason });
    }
    Ok(())
}
