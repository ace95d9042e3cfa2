// All repositories module
pub mod wallet;

// Re-export all repositories for convenience
pub use wallet::*;
