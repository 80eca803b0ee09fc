use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{encode_text, transfer_lamports};
use anchor_lang::prelude::*;

/**
 * Account context for depositing a tip
 *
 * Moves lamports from the author into the tipper and writes a Tip receipt.
 *
 * Access Control: Any signer can tip an open tipper
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(amount: u64, message: String)]
pub struct AddTip<'info> {
    /// The author sending the tip
    /// - Pays the tip amount and the rent for the receipt
    #[account(mut)]
    pub author: Signer<'info>,

    /// The tipper receiving the tip
    /// - Re-derived from its stored target name, authority and bump
    #[account(
        mut,
        seeds = [tipper.target_name_bytes(), tipper.authority.as_ref()],
        bump = tipper.bump
    )]
    pub tipper: Account<'info, Tipper>,

    /// Receipt for this tip (PDA)
    /// - Derived from: [author, tipper, message]
    /// - Reusing a message for the same author and tipper fails as already in use
    #[account(
        init,
        payer = author,
        space = Tip::LEN,
        seeds = [author.key().as_ref(), tipper.key().as_ref(), message.as_bytes()],
        bump
    )]
    pub tip: Account<'info, Tip>,

    pub system_program: Program<'info, System>,
}

/**
 * Deposits a tip
 *
 * @param ctx - The account context containing author, tipper and tip accounts
 * @param amount - Lamports to deposit
 * @param message - Note stored on the receipt
 *
 * Validation Process:
 * 1. Message fits the receipt buffer
 * 2. Amount is non-zero, tipper is open and the balance does not overflow
 * 3. Transfer lamports, then record the receipt
 */
pub fn handle_add_tip(ctx: Context<AddTip>, amount: u64, message: String) -> Result<()> {
    let (message_data, message_len) =
        encode_text::<MESSAGE_LENGTH>(&message).ok_or(TipperError::MessageTooLong)?;

    let closed = ctx.accounts.tipper.deposit(amount)?;

    transfer_lamports(
        ctx.accounts.author.to_account_info(),
        ctx.accounts.tipper.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        amount,
    )?;

    let author = ctx.accounts.author.key();
    let tipper_key = ctx.accounts.tipper.key();
    let tip_key = ctx.accounts.tip.key();

    ctx.accounts.tip.set_inner(Tip::new(
        author,
        tipper_key,
        amount,
        message_data,
        message_len,
        ctx.bumps.tip,
    ));

    let tipper = &ctx.accounts.tipper;

    emit_cpi!(TipDeposited {
        tipper: tipper_key,
        tip: tip_key,
        author,
        amount,
        balance: tipper.balance,
    });

    if closed {
        msg!(
            "Tipper {} reached {} of {} lamports and is now closed",
            tipper.target_name(),
            tipper.balance,
            tipper.max_balance
        );

        emit_cpi!(TipperCapacityReached {
            tipper: tipper_key,
            balance: tipper.balance,
            max_balance: tipper.max_balance,
        });
    }

    Ok(())
}
