use anchor_lang::prelude::*;

#[event]
pub struct PoolInitialized {
    pub pool: Pubkey,
    pub distribution_authority: Pubkey,
    pub native_mint: Pubkey,
    pub redeemable_mint: Pubkey,
    pub num_ico_tokens: u64,
    pub start_ico_ts: i64,
    pub end_ico_ts: i64,
    pub withdraw_native_ts: i64,
}

#[event]
pub struct ScheduleModified {
    pub pool: Pubkey,
    pub start_ico_ts: i64,
    pub end_ico_ts: i64,
    pub withdraw_native_ts: i64,
}

#[event]
pub struct UsdcDeposited {
    pub pool: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub total_usdc_deposited: u64,
    pub timestamp: i64,
}

#[event]
pub struct NativeRedeemed {
    pub pool: Pubkey,
    pub user: Pubkey,
    pub redeemable_amount: u64,
    pub native_amount: u64,
    pub pool_native_before: u64,
    pub redeemable_supply_before: u64,
    pub timestamp: i64,
}

#[event]
pub struct ProceedsWithdrawn {
    pub pool: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
