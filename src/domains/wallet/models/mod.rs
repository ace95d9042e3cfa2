// Wallet domain models
pub mod wallet;
pub mod operation;

pub use wallet::*;
pub use operation::*;
