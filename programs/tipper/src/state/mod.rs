pub mod tipper_state;
pub mod tip_state;

pub use tipper_state::*;
pub use tip_state::*;
