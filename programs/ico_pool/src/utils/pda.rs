use anchor_lang::prelude::*;

use crate::constants::POOL_SIGNER_SEED;

/// Derives the pool signer for `native_mint` with an explicit `nonce`.
///
/// Returns `None` when the seeds land on the ed25519 curve, i.e. the nonce
/// does not produce a valid program address.
pub fn derive_pool_signer(program_id: &Pubkey, native_mint: &Pubkey, nonce: u8) -> Option<Pubkey> {
    Pubkey::create_program_address(
        &[POOL_SIGNER_SEED, native_mint.as_ref(), &[nonce]],
        program_id,
    )
    .ok()
}

/// Canonical pool signer and nonce, for clients building `initialize_pool`.
pub fn find_pool_signer(program_id: &Pubkey, native_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL_SIGNER_SEED, native_mint.as_ref()], program_id)
}
