pub mod generation;
pub(crate) mod health;
pub mod memos;

pub use health::health_check;
