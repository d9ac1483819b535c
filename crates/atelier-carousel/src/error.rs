//! Carousel error types

use thiserror::Error;

/// Errors that can occur when accessing the carousel model
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    /// Index outside the model's item range. The synchronizer clamps every
    /// derived index before lookup, so hitting this is a contract violation
    /// by the caller rather than a runtime condition.
    #[error("item index {index} out of range (carousel has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },
}
