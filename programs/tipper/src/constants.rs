use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * Sizes of the fixed-width text buffers stored on tipper and tip accounts.
 * Both equal the PDA seed length ceiling, since the text is used verbatim as a seed.
 */

#[constant]
/// Maximum length in bytes of a single PDA seed
/// - Enforced by the runtime when deriving program addresses
pub const MAX_SEED_LEN: usize = 32;

#[constant]
/// Byte capacity of `Tipper::target_name`
/// - Target names are stored zero-padded alongside `target_name_len`
pub const TARGET_NAME_LENGTH: usize = 32;

#[constant]
/// Byte capacity of `Tip::message`
/// - Messages are stored zero-padded alongside `message_len`
pub const MESSAGE_LENGTH: usize = 32;
