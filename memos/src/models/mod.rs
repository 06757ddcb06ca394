mod common;
mod generation;
mod memo;
mod search;

pub use common::*;
pub use generation::*;
pub use memo::*;
pub use search::*;
