use anchor_lang::prelude::*;
use crate::constants::*;
use crate::utils::decode_text;

/**
 * Tip receipt account
 *
 * Write-once record of a single deposit into a tipper.
 *
 * Derivation: [author, tipper, message]
 *
 * Design Notes:
 * - The same author sending the same message to the same tipper twice maps to
 *   the same PDA, so the second deposit fails; clients must vary the message
 */
#[account]
#[derive(Default, Debug)]
pub struct Tip {
    /// Signer who paid the tip
    pub author: Pubkey,

    /// Tipper that received the tip
    pub parent_tipper: Pubkey,

    /// Lamports deposited, always greater than 0
    pub amount: u64,

    /// UTF-8 message, zero-padded
    pub message: [u8; MESSAGE_LENGTH],

    pub message_len: u8,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl Tip {
    /// Space required for this account
    /// - 8-byte discriminator + Pubkey + Pubkey + u64 + message buffer + u8 + u8
    pub const LEN: usize = 8 + 32 + 32 + 8 + MESSAGE_LENGTH + 1 + 1;

    pub fn new(
        author: Pubkey,
        parent_tipper: Pubkey,
        amount: u64,
        message: [u8; MESSAGE_LENGTH],
        message_len: u8,
        bump: u8,
    ) -> Self {
        Self {
            author,
            parent_tipper,
            amount,
            message,
            message_len,
            bump,
        }
    }

    pub fn message(&self) -> &str {
        decode_text(&self.message, self.message_len)
    }
}
