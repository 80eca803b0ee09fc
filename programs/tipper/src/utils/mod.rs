pub mod lamports;
pub mod pda;
pub mod text;

pub use lamports::*;
pub use pda::*;
pub use text::*;
