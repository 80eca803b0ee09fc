use anchor_lang::prelude::*;

/// Event emitted when a new tipper is opened
#[event]
pub struct TipperInitialized {
    /// The tipper account public key
    pub tipper: Pubkey,
    /// Authority allowed to withdraw
    pub authority: Pubkey,
    /// Target name as given at creation
    pub target_name: String,
    /// Balance ceiling that closes the tipper
    pub max_balance: u64,
}

/// Event emitted for every accepted tip
#[event]
pub struct TipDeposited {
    /// The tipper account public key
    pub tipper: Pubkey,
    /// The tip receipt account public key
    pub tip: Pubkey,
    /// Author of the tip
    pub author: Pubkey,
    /// Lamports deposited in this tip
    pub amount: u64,
    /// Tipper balance after this tip
    pub balance: u64,
}

/// Event emitted when a tip pushes the balance to or past the ceiling
#[event]
pub struct TipperCapacityReached {
    /// The tipper account public key
    pub tipper: Pubkey,
    pub balance: u64,
    pub max_balance: u64,
}

/// Event emitted when the authority drains and closes a tipper
#[event]
pub struct TipperWithdrawn {
    /// The tipper account public key
    pub tipper: Pubkey,
    /// Authority who received the funds
    pub authority: Pubkey,
    /// Lamports of tipped balance moved to the authority
    pub amount_withdrawn: u64,
}
