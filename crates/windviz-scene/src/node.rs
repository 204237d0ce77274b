//! Imported scene nodes and node transform state.

use serde::{Deserialize, Serialize};
use windviz_math::{Dir3, Point3, Transform, Vec3};

/// Opaque identifier of a renderable owned by the hosting renderer.
///
/// The visualization core never touches mesh or material data; it only
/// carries these ids so the renderer can resolve its own objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenderHandle(pub u64);

/// One named child of the parsed scene, as produced by the external
/// Wavefront importer.
///
/// `vertices` holds the node's exported vertex positions. For wire
/// nodes these are the polyline points later used for bounding-box
/// analysis; for mesh-bearing nodes they are unused by this crate.
#[derive(Debug, Clone)]
pub struct ImportedNode {
    /// Node name, following the `<PartName>` / `<PartName>Wire<N>`
    /// exporter convention.
    pub name: String,
    /// Exported vertex positions in assembly coordinates.
    pub vertices: Vec<Point3>,
    /// Renderer-side handle for this node's renderable.
    pub handle: RenderHandle,
}

/// Local transform of a scene node.
///
/// Layout engines mutate `position` (and occasionally the axis-angle
/// rotation) every frame. When `matrix_override` is set the node's
/// local matrix is supplied pre-composed and position/rotation are
/// ignored — the equivalent of disabling automatic matrix recomputation
/// on a scene-graph node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeTransform {
    /// Translation, in assembly coordinates.
    pub position: Vec3,
    /// Rotation axis.
    pub axis: Dir3,
    /// Rotation angle about `axis`, in radians.
    pub angle: f64,
    /// Directly supplied local matrix, bypassing position/rotation.
    pub matrix_override: Option<Transform>,
}

impl NodeTransform {
    /// Identity transform with no override.
    pub fn identity() -> Self {
        Self {
            position: Vec3::zeros(),
            axis: Dir3::new_unchecked(Vec3::z()),
            angle: 0.0,
            matrix_override: None,
        }
    }

    /// Resolve the local matrix, honoring the override mode.
    pub fn local_matrix(&self) -> Transform {
        match &self.matrix_override {
            Some(m) => m.clone(),
            None => {
                let mut t = Transform::rotation_about_axis(&self.axis, self.angle);
                t.set_translation(&self.position);
                t
            }
        }
    }
}

impl Default for NodeTransform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_local_matrix() {
        let t = NodeTransform::identity();
        assert_eq!(t.local_matrix(), Transform::identity());
    }

    #[test]
    fn test_position_reaches_local_matrix() {
        let mut t = NodeTransform::identity();
        t.position = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(t.local_matrix().translation_part(), t.position);
    }

    #[test]
    fn test_override_wins() {
        let mut t = NodeTransform::identity();
        t.position = Vec3::new(1.0, 2.0, 3.0);
        t.matrix_override = Some(Transform::translation(&Vec3::new(-5.0, 0.0, 0.0)));
        assert_eq!(
            t.local_matrix().translation_part(),
            Vec3::new(-5.0, 0.0, 0.0)
        );
    }
}
