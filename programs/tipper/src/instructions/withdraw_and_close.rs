use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::withdraw_program_lamports;
use anchor_lang::prelude::*;

/**
 * Account context for withdrawing and closing a tipper
 *
 * Access Control: Only the stored authority, whether the tipper is Open or Closed
 *
 * Business Logic:
 * - Moves the tipped balance to the authority
 * - Closes the tipper, returning its rent to the authority as well
 */
#[event_cpi]
#[derive(Accounts)]
pub struct WithdrawAndClose<'info> {
    /// The tipper to drain and close
    /// - Re-derived from its stored target name, authority and bump
    #[account(
        mut,
        close = user,
        seeds = [tipper.target_name_bytes(), tipper.authority.as_ref()],
        bump = tipper.bump,
        constraint = tipper.is_authority(&user.key()) @ TipperError::Unauthorized
    )]
    pub tipper: Account<'info, Tipper>,

    /// Caller, must be the tipper authority
    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_withdraw_and_close(ctx: Context<WithdrawAndClose>) -> Result<()> {
    let amount_withdrawn = ctx.accounts.tipper.take_balance();

    withdraw_program_lamports(
        &ctx.accounts.tipper.to_account_info(),
        &ctx.accounts.user.to_account_info(),
        amount_withdrawn,
    )?;

    msg!(
        "Withdrew {} lamports from tipper {}",
        amount_withdrawn,
        ctx.accounts.tipper.target_name()
    );

    emit_cpi!(TipperWithdrawn {
        tipper: ctx.accounts.tipper.key(),
        authority: ctx.accounts.user.key(),
        amount_withdrawn,
    });

    // The tipper account itself is closed by the close = user constraint on exit
    Ok(())
}
