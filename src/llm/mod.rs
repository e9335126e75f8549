pub mod analyst;
pub mod client;
pub mod prompts;
pub mod types;

pub use analyst::*;
pub use client::*;
pub use prompts::*;
pub use types::*;
