//! Error types for the ICO pool program.
//!
//! Every variant aborts the whole instruction; the runtime rolls back any
//! token movement that happened before the failure.
//!
//! ## Error Code Ranges
//! - 6000-6001: Authorization errors
//! - 6002-6006: Phase/schedule errors
//! - 6007-6010: Input/balance errors
//! - 6011-6013: Math/overflow errors
//! - 6014-6019: Derivation/account validation errors

use anchor_lang::prelude::*;

/// Custom error codes for the ICO pool program.
///
/// Error codes start at 6000 (Anchor's custom error offset).
#[error_code]
pub enum IcoError {
    // ========== Authorization Errors (6000-6001) ==========

    /// [6000] Signer is not the pool's distribution authority.
    #[msg("Unauthorized: signer is not the distribution authority")]
    Unauthorized,

    /// [6001] Token account is not owned by the expected wallet or PDA.
    #[msg("Token account owner mismatch")]
    InvalidOwner,

    // ========== Phase/Schedule Errors (6002-6006) ==========

    /// [6002] The sale must start after the pool is created.
    #[msg("ICO must start in the future")]
    IcoFuture,

    /// [6003] Schedule is not start < end <= withdraw.
    #[msg("ICO times are non-sequential")]
    SeqTimes,

    /// [6004] Deposit attempted before the sale window opens.
    #[msg("ICO has not started")]
    SaleNotStarted,

    /// [6005] Deposit attempted at or after the sale window closes.
    #[msg("ICO has ended")]
    SaleEnded,

    /// [6006] Redemption or withdrawal attempted before it is allowed.
    #[msg("ICO has not finished yet")]
    IcoNotOver,

    // ========== Input/Balance Errors (6007-6010) ==========

    /// [6007] Amount arguments must be non-zero.
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    /// [6008] Depositor does not hold enough USDC.
    #[msg("Insufficient USDC")]
    LowUsdc,

    /// [6009] Holder does not hold enough redeemable tokens.
    #[msg("Insufficient redeemable tokens")]
    LowRedeemable,

    /// [6010] Pool USDC account holds less than the requested withdrawal.
    #[msg("Insufficient USDC in pool")]
    LowPoolUsdc,

    // ========== Math/Overflow Errors (6011-6013) ==========

    /// [6011] Arithmetic overflow occurred during calculation.
    #[msg("Arithmetic overflow occurred during calculation")]
    MathOverflow,

    /// [6012] No redeemable supply outstanding.
    #[msg("Division by zero attempted")]
    DivisionByZero,

    /// [6013] Integer conversion failed (value out of range).
    #[msg("Integer conversion failed - value out of range")]
    ConversionOverflow,

    // ========== Derivation/Account Validation Errors (6014-6019) ==========

    /// [6014] Nonce does not derive the supplied pool signer.
    #[msg("Given nonce is invalid")]
    InvalidNonce,

    /// [6015] Token account mint does not match the pool's mint.
    #[msg("Token mint mismatch")]
    MintMismatch,

    /// [6016] Redeemable mint authority is not the pool signer.
    #[msg("Redeemable mint authority must be the pool signer")]
    RedeemableMintAuthority,

    /// [6017] Redeemable mint already has supply at pool creation.
    #[msg("Redeemable mint supply must be zero")]
    RedeemableSupplyNotZero,

    /// [6018] Redeemable and USDC mints must share decimals for a 1:1 rate.
    #[msg("USDC and redeemable mint decimals must match")]
    DecimalsMismatch,

    /// [6019] A holding account or mint does not belong to this pool.
    #[msg("Account does not belong to this pool")]
    PoolAccountMismatch,
}
