mod event;
mod judge;
mod summary;
mod table;

pub use event::*;
pub use judge::*;
pub use summary::*;
pub use table::*;
