pub mod blocks;
pub mod interop;
pub mod models;
pub mod state;

// Re-export key types for easier usage
pub use blocks::*;
pub use interop::*;
pub use models::*;
pub use state::*;
