/// Schedule update instruction handler.
///
/// ## Security Guarantees
/// - Only the pool's distribution authority can reschedule
/// - New schedule must be sequential

use anchor_lang::prelude::*;

use crate::error::IcoError;
use crate::events::ScheduleModified;
use crate::state::PoolAccount;

/// Accounts required for rescheduling.
#[derive(Accounts)]
pub struct ModifyIcoTime<'info> {
    /// The pool to reschedule.
    #[account(
        mut,
        has_one = distribution_authority @ IcoError::Unauthorized
    )]
    pub pool_account: Account<'info, PoolAccount>,

    /// Must sign and match `pool_account.distribution_authority`.
    pub distribution_authority: Signer<'info>,
}

/// Overwrite the sale schedule.
///
/// Has no monetary effect. Repeating the call with the same arguments leaves
/// the pool unchanged.
///
/// # Arguments
/// * `ctx` - ModifyIcoTime accounts context
/// * `start_ico_ts` - New sale start (inclusive)
/// * `end_ico_ts` - New sale end (exclusive)
/// * `withdraw_native_ts` - New redemption start
pub fn handler(
    ctx: Context<ModifyIcoTime>,
    start_ico_ts: i64,
    end_ico_ts: i64,
    withdraw_native_ts: i64,
) -> Result<()> {
    PoolAccount::validate_schedule(start_ico_ts, end_ico_ts, withdraw_native_ts)?;

    let pool_account = &mut ctx.accounts.pool_account;

    msg!(
        "Rescheduling ICO - Old: start={}, end={}, withdraw={}",
        pool_account.start_ico_ts,
        pool_account.end_ico_ts,
        pool_account.withdraw_native_ts
    );

    pool_account.start_ico_ts = start_ico_ts;
    pool_account.end_ico_ts = end_ico_ts;
    pool_account.withdraw_native_ts = withdraw_native_ts;

    msg!(
        "New schedule - start={}, end={}, withdraw={}",
        start_ico_ts,
        end_ico_ts,
        withdraw_native_ts
    );
    msg!("Authority: {}", ctx.accounts.distribution_authority.key());

    emit!(ScheduleModified {
        pool: pool_account.key(),
        start_ico_ts,
        end_ico_ts,
        withdraw_native_ts,
    });

    Ok(())
}
