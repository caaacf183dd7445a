//! API request handlers.

mod analyze;
mod meta;

pub use analyze::*;
pub use meta::*;
