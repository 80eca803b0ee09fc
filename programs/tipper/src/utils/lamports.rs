use anchor_lang::prelude::*;
use anchor_lang::system_program;

/// Moves lamports out of a system-owned signer through the system program
pub fn transfer_lamports<'a>(
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    system_program_account: AccountInfo<'a>,
    amount: u64,
) -> Result<()> {
    let cpi_accounts = system_program::Transfer { from, to };

    system_program::transfer(
        CpiContext::new(system_program_account, cpi_accounts),
        amount,
    )
}

/// Moves lamports out of an account owned by this program by editing balances directly
pub fn withdraw_program_lamports(
    from: &AccountInfo,
    to: &AccountInfo,
    amount: u64,
) -> Result<()> {
    let debited = from
        .lamports()
        .checked_sub(amount)
        .ok_or(ProgramError::InsufficientFunds)?;
    let credited = to
        .lamports()
        .checked_add(amount)
        .ok_or(ProgramError::ArithmeticOverflow)?;

    **from.try_borrow_mut_lamports()? = debited;
    **to.try_borrow_mut_lamports()? = credited;

    Ok(())
}
