pub mod config;
pub mod error;
pub mod matcher;
pub mod messages;
pub mod records;

// Keep the public surface small and intentional.
pub use config::*;
pub use error::*;
pub use matcher::*;
pub use records::*;
