//! Instruction handlers for the ICO pool program.
//!
//! One module per instruction.

pub mod exchange_redeemable_for_native;
pub mod exchange_usdc_for_redeemable;
pub mod initialize_pool;
pub mod modify_ico_time;
pub mod withdraw_pool_usdc;

pub use exchange_redeemable_for_native::*;
pub use exchange_usdc_for_redeemable::*;
pub use initialize_pool::*;
pub use modify_ico_time::*;
pub use withdraw_pool_usdc::*;
