use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::utils::{decode_text, encode_text};

/// Lifecycle of a tipper
///
/// Variant order is part of the account layout: a zeroed account reads as `Uninitialized`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum State {
    #[default]
    Uninitialized,
    Open,
    Closed,
}

/**
 * Tip jar state account
 *
 * Holds the configuration and running balance of a single tip jar. The lamports
 * backing `balance` sit on this account on top of its rent-exempt reserve.
 *
 * Derivation: [target_name, authority]
 *
 * Lifecycle:
 * 1. Created during initialize (state = Open, balance = 0)
 * 2. Balance grows with every tip; the tip that reaches max_balance flips state to Closed
 * 3. Closed during withdraw_and_close, lamports returned to the authority
 *
 * Design Notes:
 * - The PDA doubles as the uniqueness constraint: re-initializing the same
 *   (target_name, authority) pair fails because the account is already in use
 * - balance may end above max_balance; the crossing deposit is never clamped
 */
#[account]
#[derive(Default, Debug)]
pub struct Tipper {
    /// Only key allowed to withdraw and close
    pub authority: Pubkey,

    /// UTF-8 target name, zero-padded
    /// - Used verbatim (up to target_name_len) as the first PDA seed
    pub target_name: [u8; TARGET_NAME_LENGTH],

    /// Number of meaningful bytes in target_name
    pub target_name_len: u8,

    /// Lamports tipped and not yet withdrawn
    pub balance: u64,

    /// Balance ceiling; reaching it closes the tipper
    pub max_balance: u64,

    pub state: State,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl Tipper {
    /// Space required for this account
    /// - 8-byte discriminator + Pubkey + name buffer + u8 + u64 + u64 + State(u8) + u8
    pub const LEN: usize = 8 + 32 + TARGET_NAME_LENGTH + 1 + 8 + 8 + 1 + 1;

    /// Fills a freshly allocated tipper in the Open state
    pub fn initialize(
        &mut self,
        authority: Pubkey,
        target_name: &str,
        max_balance: u64,
        bump: u8,
    ) -> Result<()> {
        let (name, name_len) = encode_text::<TARGET_NAME_LENGTH>(target_name)
            .ok_or(TipperError::TargetNameTooLong)?;

        self.authority = authority;
        self.target_name = name;
        self.target_name_len = name_len;
        self.balance = 0;
        self.max_balance = max_balance;
        self.state = State::Open;
        self.bump = bump;

        Ok(())
    }

    /**
     * Applies a tip to the running balance
     *
     * Returns true when this deposit is the one that closed the tipper.
     * Nothing is written when an error is returned.
     */
    pub fn deposit(&mut self, amount: u64) -> Result<bool> {
        require!(amount > 0, TipperError::InvalidAmount);
        require!(self.is_open(), TipperError::TipperClosed);

        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or(TipperError::CapacityOverflow)?;

        self.balance = new_balance;

        if self.balance >= self.max_balance {
            self.state = State::Closed;
            return Ok(true);
        }

        Ok(false)
    }

    /// Zeroes the balance and returns what it held
    pub fn take_balance(&mut self) -> u64 {
        std::mem::take(&mut self.balance)
    }

    pub fn is_open(&self) -> bool {
        self.state == State::Open
    }

    pub fn is_authority(&self, key: &Pubkey) -> bool {
        self.authority == *key
    }

    /// Lamports still accepted before the tipper closes
    /// - Saturates at 0 once the balance has reached or passed max_balance
    /// - A single tip may exceed this; the crossing deposit is applied in full
    pub fn remaining_capacity(&self) -> u64 {
        self.max_balance.saturating_sub(self.balance)
    }

    /// Target name bytes exactly as used in the PDA seeds
    pub fn target_name_bytes(&self) -> &[u8] {
        let len = (self.target_name_len as usize).min(TARGET_NAME_LENGTH);
        &self.target_name[..len]
    }

    pub fn target_name(&self) -> &str {
        decode_text(&self.target_name, self.target_name_len)
    }
}
