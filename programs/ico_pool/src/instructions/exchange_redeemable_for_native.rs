//! Redemption instruction handler.
//!
//! Burns redeemable tokens for a pro-rata share of the native reserve.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::IcoError;
use crate::events::NativeRedeemed;
use crate::state::PoolAccount;
use crate::utils::redeemable_to_native;

/// Accounts required for a redemption.
#[derive(Accounts)]
pub struct ExchangeRedeemableForNative<'info> {
    /// The redeemer.
    pub user_authority: Signer<'info>,

    /// The pool.
    #[account(
        mut,
        has_one = redeemable_mint @ IcoError::PoolAccountMismatch,
        has_one = pool_native @ IcoError::PoolAccountMismatch
    )]
    pub pool_account: Box<Account<'info, PoolAccount>>,

    /// Keyless pool authority, owner of the native holding account.
    /// CHECK: Seeds and stored nonce pin this to the pool's PDA.
    #[account(
        seeds = [POOL_SIGNER_SEED, pool_account.native_mint.as_ref()],
        bump = pool_account.nonce
    )]
    pub pool_signer: UncheckedAccount<'info>,

    /// Redeemable mint. Its live supply is the divisor of the payout.
    #[account(
        mut,
        constraint = redeemable_mint.mint_authority == COption::Some(pool_signer.key())
            @ IcoError::RedeemableMintAuthority
    )]
    pub redeemable_mint: Box<Account<'info, Mint>>,

    /// Pool's native holding account. Its live balance is the reserve.
    #[account(
        mut,
        constraint = pool_native.owner == pool_signer.key() @ IcoError::InvalidOwner
    )]
    pub pool_native: Box<Account<'info, TokenAccount>>,

    /// Redeemer's native token account.
    #[account(
        mut,
        constraint = user_native.mint == pool_account.native_mint @ IcoError::MintMismatch,
        constraint = user_native.owner == user_authority.key() @ IcoError::InvalidOwner
    )]
    pub user_native: Box<Account<'info, TokenAccount>>,

    /// Redeemer's redeemable token account.
    #[account(
        mut,
        constraint = user_redeemable.mint == redeemable_mint.key() @ IcoError::MintMismatch,
        constraint = user_redeemable.owner == user_authority.key() @ IcoError::InvalidOwner
    )]
    pub user_redeemable: Box<Account<'info, TokenAccount>>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Burn `amount` redeemable tokens and pay out native tokens.
///
/// Payout is `floor(amount * pool_native / redeemable_supply)`, both read
/// from the accounts as they stand in this transaction.
///
/// # Arguments
/// * `ctx` - ExchangeRedeemableForNative accounts context
/// * `amount` - Redeemable tokens to burn
pub fn handler(ctx: Context<ExchangeRedeemableForNative>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;

    ctx.accounts
        .pool_account
        .require_redemption_open(clock.unix_timestamp)?;

    require!(amount > 0, IcoError::ZeroAmount);
    require!(
        ctx.accounts.user_redeemable.amount >= amount,
        IcoError::LowRedeemable
    );

    let pool_native_before = ctx.accounts.pool_native.amount;
    let redeemable_supply_before = ctx.accounts.redeemable_mint.supply;

    let native_amount =
        redeemable_to_native(amount, pool_native_before, redeemable_supply_before)?;

    // Burn the user's redeemable tokens
    let cpi_accounts = Burn {
        mint: ctx.accounts.redeemable_mint.to_account_info(),
        from: ctx.accounts.user_redeemable.to_account_info(),
        authority: ctx.accounts.user_authority.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::burn(cpi_ctx, amount)?;

    // A payout that rounds to zero still burns, which shrinks the supply
    // for the holders that follow.
    if native_amount > 0 {
        let seeds = ctx.accounts.pool_account.signer_seeds();
        let signer_seeds = &[&seeds[..]];

        let cpi_accounts = Transfer {
            from: ctx.accounts.pool_native.to_account_info(),
            to: ctx.accounts.user_native.to_account_info(),
            authority: ctx.accounts.pool_signer.to_account_info(),
        };
        let cpi_program = ctx.accounts.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
        token::transfer(cpi_ctx, native_amount)?;
    }

    let pool_account = &mut ctx.accounts.pool_account;
    pool_account.record_redemption(native_amount)?;

    msg!(
        "Redeemed {} redeemable tokens for {} native tokens",
        amount,
        native_amount
    );
    msg!(
        "Reserve before: {}, supply before: {}",
        pool_native_before,
        redeemable_supply_before
    );

    emit!(NativeRedeemed {
        pool: pool_account.key(),
        user: ctx.accounts.user_authority.key(),
        redeemable_amount: amount,
        native_amount,
        pool_native_before,
        redeemable_supply_before,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
