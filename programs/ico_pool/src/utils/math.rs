use crate::error::IcoError;
use anchor_lang::prelude::*;

/// Native tokens owed for burning `redeemable_amount` claim tokens.
///
/// Formula: payout = floor(redeemable_amount * pool_native / redeemable_supply)
///
/// `pool_native` and `redeemable_supply` must be read live at redemption time.
/// Each redeemer then sees the ratio left behind by earlier redeemers, so the
/// last holder to burn the remaining supply receives the remaining reserve.
/// Rounding is toward zero and always favours the pool.
pub fn redeemable_to_native(
    redeemable_amount: u64,
    pool_native: u64,
    redeemable_supply: u64,
) -> Result<u64> {
    require!(redeemable_supply > 0, IcoError::DivisionByZero);
    require!(
        redeemable_amount <= redeemable_supply,
        IcoError::LowRedeemable
    );

    // Multiply first in u128 so no precision is lost before the division.
    let payout = (redeemable_amount as u128)
        .checked_mul(pool_native as u128)
        .ok_or(IcoError::MathOverflow)?
        .checked_div(redeemable_supply as u128)
        .ok_or(IcoError::DivisionByZero)?;

    let payout = u64::try_from(payout).map_err(|_| IcoError::ConversionOverflow)?;

    Ok(payout)
}
