use anchor_lang::prelude::*;

#[error_code]
pub enum TipperError {
    // Input validation errors
    #[msg("Target name must be at most 32 bytes long")]
    TargetNameTooLong,

    // Tipper state errors
    #[msg("Tips for this campaign are closed, see you next time!")]
    TipperClosed,

    #[msg("Amount must be greater than 0")]
    InvalidAmount,

    #[msg("Oops, the tip jar is full!")]
    CapacityOverflow,

    // Access control errors
    #[msg("You are not authorized to perform this action")]
    Unauthorized,

    // Input validation errors, appended to keep earlier codes stable
    #[msg("Message must be at most 32 bytes long")]
    MessageTooLong,
}
