//! Game rules and session state.
//!
//! Everything here is synchronous, in-memory and total: no operation can fail.
//! Illegal transitions (judging twice, judging before a deal) are ruled out by
//! the [`Session`] / [`Complete`] typestate pair rather than checked at runtime.
mod judgment;
mod round;
mod session;
mod sign;
mod state;
mod thrower;
mod tracker;

pub use judgment::*;
pub use round::*;
pub use session::*;
pub use sign::*;
pub use state::*;
pub use thrower::*;
pub use tracker::*;
