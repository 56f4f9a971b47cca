//! CLI command handling

pub mod batch;
pub mod output;
pub mod resolve;
pub mod tags;

pub use batch::*;
pub use output::*;
pub use resolve::*;
pub use tags::*;
