//! State structures for the ICO pool program.

pub mod pool_account;

pub use pool_account::*;
