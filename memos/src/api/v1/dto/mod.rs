//! v1 API Data Transfer Objects.
//!
//! Wire format for the v1 REST API, kept apart from the domain models in
//! `src/models/`.

pub mod generation;
pub mod memos;

pub use generation::*;
pub use memos::*;
