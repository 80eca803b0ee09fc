pub mod initialize_tipper;
pub mod add_tip;
pub mod withdraw_and_close;

pub use initialize_tipper::*;
pub use add_tip::*;
pub use withdraw_and_close::*;
