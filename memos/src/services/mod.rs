use std::future::Future;

use crate::error::Result;

mod generation;
mod memo;
#[cfg(test)]
pub(crate) mod testing;

pub use generation::GenerationService;
pub use memo::MemoService;

/// Await a secondary side effect whose failure must not affect the caller.
///
/// Errors are reported with `tracing::warn!` and turned into `None`.
pub async fn best_effort<T, F>(operation: &'static str, future: F) -> Option<T>
where
    F: Future<Output = Result<T>>,
{
    match future.await {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::warn!(operation, error = %error, "Best-effort operation failed");
            None
        }
    }
}
