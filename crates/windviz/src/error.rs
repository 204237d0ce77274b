//! Error type for assembling a visualization.

use thiserror::Error;
use windviz_layout::LayoutError;
use windviz_scene::SceneError;

/// Errors raised while building or driving a visualization.
#[derive(Error, Debug)]
pub enum VizError {
    /// A scene-graph operation failed.
    #[error(transparent)]
    Scene(#[from] SceneError),
    /// A layout computation failed.
    #[error(transparent)]
    Layout(#[from] LayoutError),
    /// The scene source could not deliver its nodes.
    #[error("failed to load scene: {0}")]
    Load(String),
    /// The caller canceled the load before it finished.
    #[error("load canceled")]
    Canceled,
}

impl VizError {
    /// Whether this error represents cancellation rather than failure.
    pub fn is_canceled(&self) -> bool {
        matches!(self, VizError::Canceled)
    }
}

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, VizError>;
