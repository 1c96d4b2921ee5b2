//! Program constants for the ICO pool program.
//!
//! PDA seeds and the byte sizes used to lay out the pool account.

/// Seed prefix for the pool signer PDA (the keyless pool authority).
///
/// Full seeds: `[POOL_SIGNER_SEED, native_mint, [nonce]]`.
pub const POOL_SIGNER_SEED: &[u8] = b"pool_signer";

/// Anchor account discriminator length
pub const DISCRIMINATOR_LENGTH: usize = 8;

pub const PUBLIC_KEY_LENGTH: usize = 32;

pub const NONCE_LENGTH: usize = 1;

pub const U64_LENGTH: usize = 8;

pub const TIMESTAMP_LENGTH: usize = 8;
