//! Judge implementations for the table.
//!
//! - [`Fish`] — random calls, for simulation
//! - [`Oracle`] — always calls correctly
//! - [`Human`] — interactive terminal prompts (requires `cli` feature)
mod fish;
#[cfg(feature = "cli")]
mod human;
mod oracle;

pub use fish::*;
#[cfg(feature = "cli")]
pub use human::*;
pub use oracle::*;
