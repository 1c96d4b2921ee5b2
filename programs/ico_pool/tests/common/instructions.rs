//! Instruction builders and a pool fixture wired to real SPL token accounts.

use anchor_lang::{InstructionData, ToAccountMetas};
use ico_pool::utils::find_pool_signer;
use litesvm::LiteSVM;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use solana_sdk::system_program;
use solana_sdk::transaction::TransactionError;

use super::setup::{funded_keypair, send, END, START, WITHDRAW};
use super::token::{create_mint, create_token_account, mint_to, set_mint_authority};

/// Knobs for the mints and funding behind a pool.
pub struct PoolOptions {
    pub num_ico_tokens: u64,
    /// Native tokens minted to the creator before initialization.
    pub creator_native: u64,
    pub usdc_decimals: u8,
    pub redeemable_decimals: u8,
    /// Redeemable tokens already in circulation when the pool is created.
    pub redeemable_premint: u64,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            num_ico_tokens: 5_000_000,
            creator_native: 5_000_000,
            usdc_decimals: 6,
            redeemable_decimals: 6,
            redeemable_premint: 0,
        }
    }
}

/// A depositor with one token account per pool mint.
pub struct Depositor {
    pub keypair: Keypair,
    pub usdc: Pubkey,
    pub redeemable: Pubkey,
    pub native: Pubkey,
}

/// Every account a pool touches. `authority` creates the pool, holds the
/// distribution authority and mints the native and USDC test tokens.
pub struct TestPool {
    pub pool_account: Keypair,
    pub authority: Keypair,
    pub pool_signer: Pubkey,
    pub nonce: u8,
    pub native_mint: Pubkey,
    pub usdc_mint: Pubkey,
    pub redeemable_mint: Pubkey,
    pub pool_native: Pubkey,
    pub pool_usdc: Pubkey,
    pub creator_native: Pubkey,
    pub creator_usdc: Pubkey,
    pub num_ico_tokens: u64,
}

/// Prepare and initialize a pool on the default schedule.
pub fn setup_pool(svm: &mut LiteSVM, num_ico_tokens: u64) -> TestPool {
    let pool = TestPool::prepare(
        svm,
        PoolOptions {
            num_ico_tokens,
            creator_native: num_ico_tokens,
            ..PoolOptions::default()
        },
    );
    pool.initialize(svm).expect("initialize_pool should succeed");
    pool
}

impl TestPool {
    /// Create the mints and holding accounts without initializing the pool.
    pub fn prepare(svm: &mut LiteSVM, options: PoolOptions) -> Self {
        let authority = funded_keypair(svm);

        let native_mint = create_mint(svm, &authority, &authority.pubkey(), 9);
        let usdc_mint = create_mint(svm, &authority, &authority.pubkey(), options.usdc_decimals);
        let (pool_signer, nonce) = find_pool_signer(&ico_pool::ID, &native_mint);

        let redeemable_mint = create_mint(
            svm,
            &authority,
            &authority.pubkey(),
            options.redeemable_decimals,
        );
        if options.redeemable_premint > 0 {
            let holder =
                create_token_account(svm, &authority, &redeemable_mint, &authority.pubkey());
            mint_to(svm, &authority, &redeemable_mint, &holder, options.redeemable_premint);
        }
        set_mint_authority(svm, &authority, &redeemable_mint, &pool_signer);

        let pool_native = create_token_account(svm, &authority, &native_mint, &pool_signer);
        let pool_usdc = create_token_account(svm, &authority, &usdc_mint, &pool_signer);
        let creator_native =
            create_token_account(svm, &authority, &native_mint, &authority.pubkey());
        let creator_usdc = create_token_account(svm, &authority, &usdc_mint, &authority.pubkey());
        if options.creator_native > 0 {
            mint_to(svm, &authority, &native_mint, &creator_native, options.creator_native);
        }

        Self {
            pool_account: Keypair::new(),
            authority,
            pool_signer,
            nonce,
            native_mint,
            usdc_mint,
            redeemable_mint,
            pool_native,
            pool_usdc,
            creator_native,
            creator_usdc,
            num_ico_tokens: options.num_ico_tokens,
        }
    }

    pub fn initialize_ix(&self, nonce: u8, start: i64, end: i64, withdraw: i64) -> Instruction {
        Instruction {
            program_id: ico_pool::ID,
            accounts: ico_pool::accounts::InitializePool {
                pool_account: self.pool_account.pubkey(),
                pool_signer: self.pool_signer,
                redeemable_mint: self.redeemable_mint,
                usdc_mint: self.usdc_mint,
                native_mint: self.native_mint,
                pool_native: self.pool_native,
                pool_usdc: self.pool_usdc,
                distribution_authority: self.authority.pubkey(),
                payer: self.authority.pubkey(),
                creator_native: self.creator_native,
                system_program: system_program::ID,
                token_program: anchor_spl::token::ID,
            }
            .to_account_metas(None),
            data: ico_pool::instruction::InitializePool {
                num_ico_tokens: self.num_ico_tokens,
                nonce,
                start_ico_ts: start,
                end_ico_ts: end,
                withdraw_native_ts: withdraw,
            }
            .data(),
        }
    }

    /// Initialize with the canonical nonce on the default schedule.
    pub fn initialize(&self, svm: &mut LiteSVM) -> Result<(), TransactionError> {
        self.initialize_with(svm, self.nonce, START, END, WITHDRAW)
    }

    pub fn initialize_with(
        &self,
        svm: &mut LiteSVM,
        nonce: u8,
        start: i64,
        end: i64,
        withdraw: i64,
    ) -> Result<(), TransactionError> {
        let ix = self.initialize_ix(nonce, start, end, withdraw);
        send(svm, &[ix], &[&self.authority, &self.pool_account])
    }

    pub fn modify_ico_time(
        &self,
        svm: &mut LiteSVM,
        signer: &Keypair,
        start: i64,
        end: i64,
        withdraw: i64,
    ) -> Result<(), TransactionError> {
        let ix = Instruction {
            program_id: ico_pool::ID,
            accounts: ico_pool::accounts::ModifyIcoTime {
                pool_account: self.pool_account.pubkey(),
                distribution_authority: signer.pubkey(),
            }
            .to_account_metas(None),
            data: ico_pool::instruction::ModifyIcoTime {
                start_ico_ts: start,
                end_ico_ts: end,
                withdraw_native_ts: withdraw,
            }
            .data(),
        };
        send(svm, &[ix], &[signer])
    }

    pub fn deposit(
        &self,
        svm: &mut LiteSVM,
        user: &Depositor,
        amount: u64,
    ) -> Result<(), TransactionError> {
        let ix = Instruction {
            program_id: ico_pool::ID,
            accounts: ico_pool::accounts::ExchangeUsdcForRedeemable {
                user_authority: user.keypair.pubkey(),
                pool_account: self.pool_account.pubkey(),
                pool_signer: self.pool_signer,
                redeemable_mint: self.redeemable_mint,
                pool_usdc: self.pool_usdc,
                user_usdc: user.usdc,
                user_redeemable: user.redeemable,
                token_program: anchor_spl::token::ID,
            }
            .to_account_metas(None),
            data: ico_pool::instruction::ExchangeUsdcForRedeemable { amount }.data(),
        };
        send(svm, &[ix], &[&user.keypair])
    }

    pub fn redeem(
        &self,
        svm: &mut LiteSVM,
        user: &Depositor,
        amount: u64,
    ) -> Result<(), TransactionError> {
        let ix = Instruction {
            program_id: ico_pool::ID,
            accounts: ico_pool::accounts::ExchangeRedeemableForNative {
                user_authority: user.keypair.pubkey(),
                pool_account: self.pool_account.pubkey(),
                pool_signer: self.pool_signer,
                redeemable_mint: self.redeemable_mint,
                pool_native: self.pool_native,
                user_native: user.native,
                user_redeemable: user.redeemable,
                token_program: anchor_spl::token::ID,
            }
            .to_account_metas(None),
            data: ico_pool::instruction::ExchangeRedeemableForNative { amount }.data(),
        };
        send(svm, &[ix], &[&user.keypair])
    }

    /// Withdraw proceeds from `pool_usdc` into `destination`, signed by `signer`.
    pub fn withdraw_from(
        &self,
        svm: &mut LiteSVM,
        pool_usdc: Pubkey,
        signer: &Keypair,
        destination: Pubkey,
        amount: u64,
    ) -> Result<(), TransactionError> {
        let ix = Instruction {
            program_id: ico_pool::ID,
            accounts: ico_pool::accounts::WithdrawPoolUsdc {
                pool_account: self.pool_account.pubkey(),
                pool_signer: self.pool_signer,
                pool_usdc,
                distribution_authority: signer.pubkey(),
                creator_usdc: destination,
                token_program: anchor_spl::token::ID,
            }
            .to_account_metas(None),
            data: ico_pool::instruction::WithdrawPoolUsdc { amount }.data(),
        };
        send(svm, &[ix], &[signer])
    }

    /// Withdraw proceeds to the authority's USDC account.
    pub fn withdraw(&self, svm: &mut LiteSVM, amount: u64) -> Result<(), TransactionError> {
        self.withdraw_from(svm, self.pool_usdc, &self.authority, self.creator_usdc, amount)
    }

    /// A funded wallet with empty native/redeemable accounts and `usdc` USDC.
    pub fn add_depositor(&self, svm: &mut LiteSVM, usdc: u64) -> Depositor {
        let keypair = funded_keypair(svm);
        let owner = keypair.pubkey();
        let usdc_account = create_token_account(svm, &keypair, &self.usdc_mint, &owner);
        let redeemable = create_token_account(svm, &keypair, &self.redeemable_mint, &owner);
        let native = create_token_account(svm, &keypair, &self.native_mint, &owner);
        if usdc > 0 {
            mint_to(svm, &self.authority, &self.usdc_mint, &usdc_account, usdc);
        }
        Depositor {
            keypair,
            usdc: usdc_account,
            redeemable,
            native,
        }
    }
}
