/// Initialize pool instruction handler.
///
/// Creates a sale pool and locks the full native token supply in it.
///
/// ## Security Guarantees
/// - Pool signer must be the PDA derived from the native mint and `nonce`
/// - Both holding accounts are owned by the pool signer
/// - Redeemable mint is controlled by the pool signer and starts empty
/// - All parameters validated before any token moves

use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::error::IcoError;
use crate::events::PoolInitialized;
use crate::state::PoolAccount;
use crate::utils::derive_pool_signer;

/// Accounts required for pool initialization.
///
/// ## Security Notes
/// - `pool_signer` is checked against the seed derivation in the handler
/// - Holding account and mint relationships are fixed here and stored in pool state
#[derive(Accounts)]
pub struct InitializePool<'info> {
    /// The new pool account. Allocated from a fresh keypair.
    #[account(init, payer = payer, space = PoolAccount::LEN)]
    pub pool_account: Box<Account<'info, PoolAccount>>,

    /// Keyless pool authority.
    /// CHECK: Verified against `derive_pool_signer(native_mint, nonce)` in the handler.
    pub pool_signer: UncheckedAccount<'info>,

    /// Claim token mint. Must be mintable only by the pool signer and start empty.
    #[account(
        constraint = redeemable_mint.mint_authority == COption::Some(pool_signer.key())
            @ IcoError::RedeemableMintAuthority,
        constraint = redeemable_mint.supply == 0 @ IcoError::RedeemableSupplyNotZero
    )]
    pub redeemable_mint: Box<Account<'info, Mint>>,

    /// Stable asset mint. Shares decimals with the redeemable mint so 1:1 holds.
    #[account(
        constraint = usdc_mint.decimals == redeemable_mint.decimals @ IcoError::DecimalsMismatch
    )]
    pub usdc_mint: Box<Account<'info, Mint>>,

    /// Native asset mint.
    pub native_mint: Box<Account<'info, Mint>>,

    /// Pool's native holding account.
    #[account(
        mut,
        constraint = pool_native.mint == native_mint.key() @ IcoError::MintMismatch,
        constraint = pool_native.owner == pool_signer.key() @ IcoError::InvalidOwner
    )]
    pub pool_native: Box<Account<'info, TokenAccount>>,

    /// Pool's USDC holding account.
    #[account(
        constraint = pool_usdc.mint == usdc_mint.key() @ IcoError::MintMismatch,
        constraint = pool_usdc.owner == pool_signer.key() @ IcoError::InvalidOwner
    )]
    pub pool_usdc: Box<Account<'info, TokenAccount>>,

    /// Operator allowed to reschedule the sale and withdraw proceeds.
    /// CHECK: Only its key is stored.
    pub distribution_authority: UncheckedAccount<'info>,

    /// Creator funding the pool.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Creator's native token account.
    #[account(
        mut,
        constraint = creator_native.mint == native_mint.key() @ IcoError::MintMismatch,
        constraint = creator_native.owner == payer.key() @ IcoError::InvalidOwner
    )]
    pub creator_native: Box<Account<'info, TokenAccount>>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,

    /// Token program for the native transfer.
    pub token_program: Program<'info, Token>,
}

/// Initialize a new sale pool.
///
/// # Arguments
/// * `ctx` - InitializePool accounts context
/// * `num_ico_tokens` - Native tokens locked for the sale
/// * `nonce` - Bump for the pool signer PDA
/// * `start_ico_ts` - Sale opens (inclusive)
/// * `end_ico_ts` - Sale closes (exclusive)
/// * `withdraw_native_ts` - Redemption opens
///
/// # Returns
/// Result indicating success or error
pub fn handler(
    ctx: Context<InitializePool>,
    num_ico_tokens: u64,
    nonce: u8,
    start_ico_ts: i64,
    end_ico_ts: i64,
    withdraw_native_ts: i64,
) -> Result<()> {
    // === DERIVATION ===

    let expected_signer =
        derive_pool_signer(ctx.program_id, &ctx.accounts.native_mint.key(), nonce)
            .ok_or(IcoError::InvalidNonce)?;
    require_keys_eq!(
        ctx.accounts.pool_signer.key(),
        expected_signer,
        IcoError::InvalidNonce
    );

    // === INPUT VALIDATION ===

    require!(num_ico_tokens > 0, IcoError::ZeroAmount);

    let clock = Clock::get()?;
    require!(clock.unix_timestamp < start_ico_ts, IcoError::IcoFuture);
    PoolAccount::validate_schedule(start_ico_ts, end_ico_ts, withdraw_native_ts)?;

    // === TOKEN TRANSFER ===

    let cpi_accounts = Transfer {
        from: ctx.accounts.creator_native.to_account_info(),
        to: ctx.accounts.pool_native.to_account_info(),
        authority: ctx.accounts.payer.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, num_ico_tokens)?;

    // === STATE INITIALIZATION ===

    let pool_account = &mut ctx.accounts.pool_account;

    pool_account.distribution_authority = ctx.accounts.distribution_authority.key();
    pool_account.redeemable_mint = ctx.accounts.redeemable_mint.key();
    pool_account.native_mint = ctx.accounts.native_mint.key();
    pool_account.usdc_mint = ctx.accounts.usdc_mint.key();
    pool_account.pool_native = ctx.accounts.pool_native.key();
    pool_account.pool_usdc = ctx.accounts.pool_usdc.key();
    pool_account.nonce = nonce;
    pool_account.num_ico_tokens = num_ico_tokens;
    pool_account.start_ico_ts = start_ico_ts;
    pool_account.end_ico_ts = end_ico_ts;
    pool_account.withdraw_native_ts = withdraw_native_ts;
    pool_account.total_usdc_deposited = 0;
    pool_account.total_native_redeemed = 0;
    pool_account.created_at = clock.unix_timestamp;

    msg!("ICO pool initialized");
    msg!("Distribution authority: {}", pool_account.distribution_authority);
    msg!("Native mint: {}", pool_account.native_mint);
    msg!("Locked native tokens: {}", num_ico_tokens);
    msg!(
        "Schedule - start: {}, end: {}, withdraw: {}",
        start_ico_ts,
        end_ico_ts,
        withdraw_native_ts
    );

    emit!(PoolInitialized {
        pool: pool_account.key(),
        distribution_authority: pool_account.distribution_authority,
        native_mint: pool_account.native_mint,
        redeemable_mint: pool_account.redeemable_mint,
        num_ico_tokens,
        start_ico_ts,
        end_ico_ts,
        withdraw_native_ts,
    });

    Ok(())
}
