//! Error types for scene reconstruction.

use thiserror::Error;

/// Errors that can occur while reconstructing or grouping a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    /// A part name was claimed by more than one composite group
    /// configuration. Member sets must be disjoint.
    #[error("part '{part}' is claimed by composite groups '{first}' and '{second}'")]
    OverlappingGroupMembership {
        /// The doubly-claimed part name.
        part: String,
        /// The group that claimed the part first.
        first: String,
        /// The group that attempted to claim it again.
        second: String,
    },

    /// A composite group configuration named no members.
    #[error("composite group '{0}' has an empty member set")]
    EmptyGroup(String),
}

/// Result type for scene operations.
pub type Result<T> = std::result::Result<T, SceneError>;
