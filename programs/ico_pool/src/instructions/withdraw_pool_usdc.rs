/// Proceeds withdrawal instruction handler.
///
/// ## Security Guarantees
/// - Only the pool's distribution authority can withdraw
/// - Destination must be a USDC account owned by that authority
/// - Withdrawal opens once the sale window has closed

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::IcoError;
use crate::events::ProceedsWithdrawn;
use crate::state::PoolAccount;

/// Accounts required for withdrawing sale proceeds.
#[derive(Accounts)]
pub struct WithdrawPoolUsdc<'info> {
    /// The pool.
    #[account(
        has_one = pool_usdc @ IcoError::PoolAccountMismatch,
        has_one = distribution_authority @ IcoError::Unauthorized
    )]
    pub pool_account: Box<Account<'info, PoolAccount>>,

    /// Keyless pool authority, owner of the USDC holding account.
    /// CHECK: Seeds and stored nonce pin this to the pool's PDA.
    #[account(
        seeds = [POOL_SIGNER_SEED, pool_account.native_mint.as_ref()],
        bump = pool_account.nonce
    )]
    pub pool_signer: UncheckedAccount<'info>,

    /// Pool's USDC holding account.
    #[account(
        mut,
        constraint = pool_usdc.owner == pool_signer.key() @ IcoError::InvalidOwner
    )]
    pub pool_usdc: Box<Account<'info, TokenAccount>>,

    /// Must sign and match `pool_account.distribution_authority`.
    pub distribution_authority: Signer<'info>,

    /// Destination for the proceeds.
    #[account(
        mut,
        constraint = creator_usdc.mint == pool_account.usdc_mint @ IcoError::MintMismatch,
        constraint = creator_usdc.owner == distribution_authority.key() @ IcoError::InvalidOwner
    )]
    pub creator_usdc: Box<Account<'info, TokenAccount>>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Withdraw `amount` USDC from the pool to the distribution authority.
///
/// # Arguments
/// * `ctx` - WithdrawPoolUsdc accounts context
/// * `amount` - USDC to withdraw
pub fn handler(ctx: Context<WithdrawPoolUsdc>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;

    ctx.accounts
        .pool_account
        .require_sale_over(clock.unix_timestamp)?;

    require!(amount > 0, IcoError::ZeroAmount);
    require!(ctx.accounts.pool_usdc.amount >= amount, IcoError::LowPoolUsdc);

    let seeds = ctx.accounts.pool_account.signer_seeds();
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.pool_usdc.to_account_info(),
        to: ctx.accounts.creator_usdc.to_account_info(),
        authority: ctx.accounts.pool_signer.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
    token::transfer(cpi_ctx, amount)?;

    ctx.accounts.pool_usdc.reload()?;

    msg!("Withdrew {} USDC from pool", amount);
    msg!("Remaining pool USDC: {}", ctx.accounts.pool_usdc.amount);
    msg!("Authority: {}", ctx.accounts.distribution_authority.key());

    emit!(ProceedsWithdrawn {
        pool: ctx.accounts.pool_account.key(),
        destination: ctx.accounts.creator_usdc.key(),
        amount,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
