//! # ICO Pool Program
//!
//! A fixed-supply token sale with pro-rata redemption.
//!
//! A creator locks `num_ico_tokens` native tokens in a pool. While the sale is
//! open, depositors swap USDC for redeemable tokens 1:1. Once redemption opens,
//! each redeemable token burns for `pool_native / redeemable_supply` native
//! tokens, so the whole reserve is split in proportion to what each depositor
//! put in. After the sale closes, the distribution authority withdraws the USDC.
//!
//! ## Schedule
//! - `[start_ico_ts, end_ico_ts)`: deposits accepted
//! - `>= end_ico_ts`: proceeds withdrawable
//! - `>= withdraw_native_ts`: redemption open
//!
//! ## Custody
//! Holding accounts and the redeemable mint are controlled by a keyless PDA
//! derived from `[POOL_SIGNER_SEED, native_mint, nonce]`.

use anchor_lang::prelude::*;

declare_id!("4UJV9VxwoewYhw1qZKtPoVAdhd4tW8AaaDzpawuN9YuA");

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

#[program]
pub mod ico_pool {
    use super::*;

    /// Creates a pool and locks the native token supply in it.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for initialization
    /// * `num_ico_tokens` - Native tokens to lock
    /// * `nonce` - Bump deriving the pool signer from the native mint
    /// * `start_ico_ts` - Sale start (inclusive)
    /// * `end_ico_ts` - Sale end (exclusive)
    /// * `withdraw_native_ts` - Redemption start
    ///
    /// # Errors
    /// Returns an error if:
    /// - The nonce does not derive the supplied pool signer
    /// - The schedule is not in the future or not sequential
    /// - The creator cannot cover `num_ico_tokens`
    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        num_ico_tokens: u64,
        nonce: u8,
        start_ico_ts: i64,
        end_ico_ts: i64,
        withdraw_native_ts: i64,
    ) -> Result<()> {
        instructions::initialize_pool::handler(
            ctx,
            num_ico_tokens,
            nonce,
            start_ico_ts,
            end_ico_ts,
            withdraw_native_ts,
        )
    }

    /// Distribution authority only: replaces the sale schedule.
    ///
    /// # Errors
    /// Returns an error if the caller is not the distribution authority or the
    /// schedule is not sequential.
    pub fn modify_ico_time(
        ctx: Context<ModifyIcoTime>,
        start_ico_ts: i64,
        end_ico_ts: i64,
        withdraw_native_ts: i64,
    ) -> Result<()> {
        instructions::modify_ico_time::handler(ctx, start_ico_ts, end_ico_ts, withdraw_native_ts)
    }

    /// Deposits USDC and mints the same amount of redeemable tokens.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The sale window is not open
    /// - Amount is zero or exceeds the user's USDC balance
    pub fn exchange_usdc_for_redeemable(
        ctx: Context<ExchangeUsdcForRedeemable>,
        amount: u64,
    ) -> Result<()> {
        instructions::exchange_usdc_for_redeemable::handler(ctx, amount)
    }

    /// Burns redeemable tokens for a pro-rata share of the native reserve.
    /// A share that rounds down to zero still burns.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Redemption has not opened
    /// - Amount is zero or exceeds the user's redeemable balance
    pub fn exchange_redeemable_for_native(
        ctx: Context<ExchangeRedeemableForNative>,
        amount: u64,
    ) -> Result<()> {
        instructions::exchange_redeemable_for_native::handler(ctx, amount)
    }

    /// Distribution authority only: withdraws USDC proceeds after the sale.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The caller is not the distribution authority
    /// - The sale has not ended
    /// - Amount is zero or exceeds the pool's USDC balance
    pub fn withdraw_pool_usdc(ctx: Context<WithdrawPoolUsdc>, amount: u64) -> Result<()> {
        instructions::withdraw_pool_usdc::handler(ctx, amount)
    }
}
