use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

/**
 * Account context for opening a tip jar
 *
 * Creates the tipper PDA for (target_name, authority). Because `init` refuses an
 * address that is already in use, this is also what stops a tipper from being
 * initialized twice.
 *
 * Access Control: The authority signs and pays for the account
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(target_name: String)]
pub struct InitializeTipper<'info> {
    /// Owner of the new tipper
    /// - Pays rent for the tipper account
    /// - The only key that can later withdraw
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The tipper account (PDA)
    /// - Derived from: [target_name, authority]
    #[account(
        init,
        payer = authority,
        space = Tipper::LEN,
        seeds = [target_name.as_bytes(), authority.key().as_ref()],
        bump
    )]
    pub tipper: Account<'info, Tipper>,

    pub system_program: Program<'info, System>,
}

/**
 * Initializes a tipper in the Open state
 *
 * @param ctx - The account context containing the authority and tipper accounts
 * @param target_name - Label of the jar, at most 32 UTF-8 bytes
 * @param max_balance - Balance ceiling in lamports
 */
pub fn handle_initialize_tipper(
    ctx: Context<InitializeTipper>,
    target_name: String,
    max_balance: u64,
) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let tipper = &mut ctx.accounts.tipper;

    tipper.initialize(authority, &target_name, max_balance, ctx.bumps.tipper)?;

    if max_balance == 0 {
        msg!("Tipper {} has max balance 0 and will close on its first tip", target_name);
    }
    msg!("Opened tipper {} for {}", target_name, authority);

    emit_cpi!(TipperInitialized {
        tipper: tipper.key(),
        authority,
        target_name,
        max_balance,
    });

    Ok(())
}
