//! Error types for layout setup.

use thiserror::Error;

/// Errors that can occur while preparing the layout engines.
///
/// Per-frame layout functions never return errors; lookup failures in
/// the hot path are downgraded to warnings and the part is skipped.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// The furl transform chain is too short to contain a hinge.
    #[error("furl chain has {0} transforms, need at least 2 (hinge is the 2nd)")]
    ChainTooShort(usize),

    /// A furl transform entry has a zero-length rotation axis.
    #[error("furl transform {0} has a zero-length axis")]
    ZeroAxis(usize),

    /// No parts were supplied to a setup step that requires geometry.
    #[error("no parts to lay out")]
    NoParts,
}

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
