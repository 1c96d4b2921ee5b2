//! Deposit instruction handler.
//!
//! Swaps USDC for redeemable tokens at a fixed 1:1 rate while the sale is open.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::IcoError;
use crate::events::UsdcDeposited;
use crate::state::PoolAccount;

/// Accounts required for a deposit.
#[derive(Accounts)]
pub struct ExchangeUsdcForRedeemable<'info> {
    /// The depositor.
    pub user_authority: Signer<'info>,

    /// The pool.
    #[account(
        mut,
        has_one = redeemable_mint @ IcoError::PoolAccountMismatch,
        has_one = pool_usdc @ IcoError::PoolAccountMismatch
    )]
    pub pool_account: Box<Account<'info, PoolAccount>>,

    /// Keyless pool authority, mint authority of the redeemable mint.
    /// CHECK: Seeds and stored nonce pin this to the pool's PDA.
    #[account(
        seeds = [POOL_SIGNER_SEED, pool_account.native_mint.as_ref()],
        bump = pool_account.nonce
    )]
    pub pool_signer: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = redeemable_mint.mint_authority == COption::Some(pool_signer.key())
            @ IcoError::RedeemableMintAuthority
    )]
    pub redeemable_mint: Box<Account<'info, Mint>>,

    /// Pool's USDC holding account.
    #[account(
        mut,
        constraint = pool_usdc.owner == pool_signer.key() @ IcoError::InvalidOwner
    )]
    pub pool_usdc: Box<Account<'info, TokenAccount>>,

    /// Depositor's USDC account.
    #[account(
        mut,
        constraint = user_usdc.mint == pool_account.usdc_mint @ IcoError::MintMismatch,
        constraint = user_usdc.owner == user_authority.key() @ IcoError::InvalidOwner
    )]
    pub user_usdc: Box<Account<'info, TokenAccount>>,

    /// Depositor's redeemable token account.
    #[account(
        mut,
        constraint = user_redeemable.mint == redeemable_mint.key() @ IcoError::MintMismatch,
        constraint = user_redeemable.owner == user_authority.key() @ IcoError::InvalidOwner
    )]
    pub user_redeemable: Box<Account<'info, TokenAccount>>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Deposit USDC and receive the same amount of redeemable tokens.
///
/// The pool never needs to know the final raise: each redeemable token is a
/// claim on `1 / final_supply` of the native reserve, settled at redemption.
///
/// # Arguments
/// * `ctx` - ExchangeUsdcForRedeemable accounts context
/// * `amount` - USDC to deposit
pub fn handler(ctx: Context<ExchangeUsdcForRedeemable>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;

    ctx.accounts.pool_account.require_sale_open(clock.unix_timestamp)?;

    require!(amount > 0, IcoError::ZeroAmount);
    require!(ctx.accounts.user_usdc.amount >= amount, IcoError::LowUsdc);

    // Transfer USDC from user to pool
    let cpi_accounts = Transfer {
        from: ctx.accounts.user_usdc.to_account_info(),
        to: ctx.accounts.pool_usdc.to_account_info(),
        authority: ctx.accounts.user_authority.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    // Mint redeemable tokens 1:1 using the pool signer
    let seeds = ctx.accounts.pool_account.signer_seeds();
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = MintTo {
        mint: ctx.accounts.redeemable_mint.to_account_info(),
        to: ctx.accounts.user_redeemable.to_account_info(),
        authority: ctx.accounts.pool_signer.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
    token::mint_to(cpi_ctx, amount)?;

    let pool_account = &mut ctx.accounts.pool_account;
    pool_account.record_deposit(amount)?;

    msg!("Exchanged {} USDC for redeemable tokens", amount);
    msg!("Total USDC deposited: {}", pool_account.total_usdc_deposited);

    emit!(UsdcDeposited {
        pool: pool_account.key(),
        user: ctx.accounts.user_authority.key(),
        amount,
        total_usdc_deposited: pool_account.total_usdc_deposited,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
