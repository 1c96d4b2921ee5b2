use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::IcoError;

#[account]
pub struct PoolAccount {
    pub distribution_authority: Pubkey,
    pub redeemable_mint: Pubkey,
    pub native_mint: Pubkey,
    pub usdc_mint: Pubkey,
    pub pool_native: Pubkey,
    pub pool_usdc: Pubkey,

    pub nonce: u8,

    /// Native tokens locked at creation. Never changes afterwards.
    pub num_ico_tokens: u64,

    pub start_ico_ts: i64,
    pub end_ico_ts: i64,
    pub withdraw_native_ts: i64,

    // Bookkeeping only; redemption math reads live balances.
    pub total_usdc_deposited: u64,
    pub total_native_redeemed: u64,

    pub created_at: i64,
}

/// Where a pool sits on its schedule at a given timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolPhase {
    /// `now < start_ico_ts`
    PreSale,
    /// `start_ico_ts <= now < end_ico_ts`; deposits accepted.
    Sale,
    /// `end_ico_ts <= now < withdraw_native_ts`; proceeds may be withdrawn.
    Settling,
    /// `now >= withdraw_native_ts`; redeemable tokens may be burned for native.
    Redemption,
}

impl PoolAccount {
    pub const LEN: usize = DISCRIMINATOR_LENGTH
        + PUBLIC_KEY_LENGTH * 6
        + NONCE_LENGTH
        + U64_LENGTH // num_ico_tokens
        + TIMESTAMP_LENGTH * 3
        + U64_LENGTH * 2 // deposit/redeem totals
        + TIMESTAMP_LENGTH; // created_at

    /// Rejects schedules that are not `start < end <= withdraw`.
    pub fn validate_schedule(start_ico_ts: i64, end_ico_ts: i64, withdraw_native_ts: i64) -> Result<()> {
        require!(
            start_ico_ts < end_ico_ts && end_ico_ts <= withdraw_native_ts,
            IcoError::SeqTimes
        );
        Ok(())
    }

    pub fn phase(&self, now: i64) -> PoolPhase {
        if now < self.start_ico_ts {
            PoolPhase::PreSale
        } else if now < self.end_ico_ts {
            PoolPhase::Sale
        } else if now < self.withdraw_native_ts {
            PoolPhase::Settling
        } else {
            PoolPhase::Redemption
        }
    }

    /// Deposits are only accepted inside `[start_ico_ts, end_ico_ts)`.
    pub fn require_sale_open(&self, now: i64) -> Result<()> {
        match self.phase(now) {
            PoolPhase::PreSale => err!(IcoError::SaleNotStarted),
            PoolPhase::Sale => Ok(()),
            PoolPhase::Settling | PoolPhase::Redemption => err!(IcoError::SaleEnded),
        }
    }

    pub fn require_sale_over(&self, now: i64) -> Result<()> {
        match self.phase(now) {
            PoolPhase::Settling | PoolPhase::Redemption => Ok(()),
            PoolPhase::PreSale | PoolPhase::Sale => err!(IcoError::IcoNotOver),
        }
    }

    pub fn require_redemption_open(&self, now: i64) -> Result<()> {
        match self.phase(now) {
            PoolPhase::Redemption => Ok(()),
            _ => err!(IcoError::IcoNotOver),
        }
    }

    /// Signer seeds for the pool signer PDA, borrowed from this account.
    pub fn signer_seeds(&self) -> [&[u8]; 3] {
        [
            POOL_SIGNER_SEED,
            self.native_mint.as_ref(),
            std::slice::from_ref(&self.nonce),
        ]
    }

    pub fn record_deposit(&mut self, amount: u64) -> Result<()> {
        self.total_usdc_deposited = self
            .total_usdc_deposited
            .checked_add(amount)
            .ok_or(IcoError::MathOverflow)?;
        Ok(())
    }

    pub fn record_redemption(&mut self, native_amount: u64) -> Result<()> {
        self.total_native_redeemed = self
            .total_native_redeemed
            .checked_add(native_amount)
            .ok_or(IcoError::MathOverflow)?;
        Ok(())
    }
}
