use anchor_lang::prelude::*;

declare_id!("AYYEJ3jpktohhxW4Y8CscANn75nBsW99R1d5Ne5BkdvW");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Tipper Program
 *
 * A Solana program for collecting capped SOL tips into a named tip jar.
 *
 * Key Features:
 * - One tip jar per (target name, authority) pair, enforced by PDA derivation
 * - Any signer can deposit a tip with a short message attached
 * - Every deposit leaves an immutable Tip receipt account
 * - The jar closes itself once its balance reaches the configured ceiling
 * - Only the authority can drain the jar, which also closes the account
 *
 * Architecture:
 * - Tipper PDA: Stores the jar configuration, running balance and state
 * - Tip PDAs: One receipt per (author, tipper, message) triple
 *
 * Workflow:
 * 1. Authority initializes a tipper with a target name and max balance
 * 2. Authors send tips until the balance reaches max balance
 * 3. Authority withdraws the balance and closes the tipper
 */
#[program]
pub mod tipper {
    use super::*;

    /**
     * Opens a new tip jar
     *
     * @param ctx - Account context containing the authority and the new tipper PDA
     * @param target_name - Human readable label, at most 32 UTF-8 bytes
     * @param max_balance - Balance ceiling in lamports that closes the jar
     *
     * Access Control: Authority (payer) only
     * Note: A second call with the same name and authority fails because the PDA is in use
     */
    pub fn initialize(
        ctx: Context<InitializeTipper>,
        target_name: String,
        max_balance: u64,
    ) -> Result<()> {
        handle_initialize_tipper(ctx, target_name, max_balance)
    }

    /**
     * Deposits a tip into an open tip jar
     *
     * @param ctx - Account context containing the author, tipper and new tip PDA
     * @param amount - Lamports to deposit, must be greater than 0
     * @param message - Note attached to the tip, at most 32 UTF-8 bytes
     *
     * Access Control: Any signer
     */
    pub fn tip(ctx: Context<AddTip>, amount: u64, message: String) -> Result<()> {
        handle_add_tip(ctx, amount, message)
    }

    /**
     * Withdraws the whole balance and closes the tip jar
     *
     * @param ctx - Account context containing the tipper and the caller
     *
     * Access Control: Authority only, in any state
     */
    pub fn withdraw_and_close(ctx: Context<WithdrawAndClose>) -> Result<()> {
        handle_withdraw_and_close(ctx)
    }
}
