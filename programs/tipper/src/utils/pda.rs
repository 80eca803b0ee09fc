use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;

/// Derives the tipper PDA from seeds [target_name, authority]
pub fn find_tipper_address(target_name: &str, authority: &Pubkey) -> Result<(Pubkey, u8)> {
    require!(
        target_name.len() <= MAX_SEED_LEN,
        TipperError::TargetNameTooLong
    );

    Ok(Pubkey::find_program_address(
        &[target_name.as_bytes(), authority.as_ref()],
        &crate::ID,
    ))
}

/// Derives the tip PDA from seeds [author, tipper, message]
pub fn find_tip_address(
    author: &Pubkey,
    tipper: &Pubkey,
    message: &str,
) -> Result<(Pubkey, u8)> {
    require!(message.len() <= MAX_SEED_LEN, TipperError::MessageTooLong);

    Ok(Pubkey::find_program_address(
        &[author.as_ref(), tipper.as_ref(), message.as_bytes()],
        &crate::ID,
    ))
}

/// Checks `address` against the seeds and bump stored on a tipper
/// - Seeds: [target_name[..target_name_len], authority, bump]
/// - Mirrors the `seeds` + `bump = tipper.bump` constraint, for clients holding fetched account data
/// - Returns false when the stored bump does not produce a valid PDA
pub fn verify_tipper_address(tipper: &crate::state::Tipper, address: &Pubkey) -> bool {
    Pubkey::create_program_address(
        &[
            tipper.target_name_bytes(),
            tipper.authority.as_ref(),
            &[tipper.bump],
        ],
        &crate::ID,
    )
    .map_or(false, |derived| derived == *address)
}
