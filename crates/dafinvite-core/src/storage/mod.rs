//! Persistence seam for design documents.
//!
//! A design is stored as one JSON document per event, keyed by event id.
//! Where it ends up (a database column, a file, memory) is the backend's
//! business.

mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

use crate::document::DesignDocument;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Design not found for event: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future returned by storage backends.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Trait for design storage backends.
///
/// Saving over an existing design replaces it; concurrent sessions on the
/// same event get last-write-wins.
pub trait Storage: Send + Sync {
    /// Save the design for an event.
    fn save(&self, event_id: &str, document: &DesignDocument) -> BoxFuture<'_, StorageResult<()>>;

    /// Load the design for an event.
    fn load(&self, event_id: &str) -> BoxFuture<'_, StorageResult<DesignDocument>>;

    /// Delete the design for an event. Deleting a missing design succeeds.
    fn delete(&self, event_id: &str) -> BoxFuture<'_, StorageResult<()>>;

    /// List the event ids that have a stored design.
    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>>;

    /// Check if an event has a stored design.
    fn exists(&self, event_id: &str) -> BoxFuture<'_, StorageResult<bool>>;
}

/// Minimal executor for driving storage futures in tests.
#[cfg(test)]
pub(crate) fn block_on<F: Future>(f: F) -> F::Output {
    use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

    fn dummy_raw_waker() -> RawWaker {
        fn no_op(_: *const ()) {}
        fn clone(_: *const ()) -> RawWaker {
            dummy_raw_waker()
        }
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, no_op, no_op, no_op);
        RawWaker::new(std::ptr::null(), &VTABLE)
    }

    let waker = unsafe { Waker::from_raw(dummy_raw_waker()) };
    let mut cx = Context::from_waker(&waker);
    let mut f = std::pin::pin!(f);

    loop {
        if let Poll::Ready(result) = f.as_mut().poll(&mut cx) {
            return result;
        }
    }
}
