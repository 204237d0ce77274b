//! Parts: named assembly components with paired wire overlays.

use windviz_math::Point3;

use crate::node::{NodeTransform, RenderHandle};

/// One exported wire sub-object (`<name>Wire<N>`) paired with its part.
///
/// Vertex positions are retained because bounding boxes are computed
/// from wire geometry — mesh-derived boxes erroneously report a zero
/// minimum on one axis for exported geometry.
#[derive(Debug, Clone)]
pub struct WireOverlay {
    /// Renderer-side handle of the line renderable.
    pub handle: RenderHandle,
    /// Polyline vertex positions in assembly coordinates.
    pub vertices: Vec<Point3>,
    /// Whether the overlay is currently shown.
    pub visible: bool,
}

/// Body of a [`Part`]: either a leaf with renderables, or a composite
/// grouping container whose children are themselves parts.
#[derive(Debug, Clone)]
pub enum PartBody {
    /// A leaf part owning one mesh and its wire overlays.
    Leaf {
        /// Renderer-side handle of the mesh renderable.
        mesh: RenderHandle,
        /// Wire overlays in ascending `Wire<N>` order. May be empty.
        wires: Vec<WireOverlay>,
    },
    /// A grouping container. Children keep the order in which they were
    /// claimed from the top level.
    Composite {
        /// Child parts of this group.
        children: Vec<Part>,
    },
}

/// A named component of an assembly.
///
/// Leaf parts own a mesh handle and zero or more wire overlays.
/// Composite parts own child parts and exist so a whole sub-assembly
/// (the tail, an array-indexed tool stack) can be moved as one unit.
#[derive(Debug, Clone)]
pub struct Part {
    /// Name, unique within an assembly snapshot.
    pub name: String,
    /// Local transform, mutated per frame by the layout engines.
    pub transform: NodeTransform,
    /// Whether this part is shown. Propagates to mesh, wires, and
    /// children through [`Part::set_visible`].
    pub visible: bool,
    /// Leaf renderables or composite children.
    pub body: PartBody,
}

impl Part {
    /// Create a leaf part.
    pub fn leaf(name: impl Into<String>, mesh: RenderHandle, wires: Vec<WireOverlay>) -> Self {
        Self {
            name: name.into(),
            transform: NodeTransform::identity(),
            visible: true,
            body: PartBody::Leaf { mesh, wires },
        }
    }

    /// Create an empty composite container.
    pub fn composite(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: NodeTransform::identity(),
            visible: true,
            body: PartBody::Composite {
                children: Vec::new(),
            },
        }
    }

    /// Whether this part is a grouping container.
    pub fn is_composite(&self) -> bool {
        matches!(self.body, PartBody::Composite { .. })
    }

    /// Children of a composite part; empty for leaves.
    pub fn children(&self) -> &[Part] {
        match &self.body {
            PartBody::Composite { children } => children,
            PartBody::Leaf { .. } => &[],
        }
    }

    /// Mutable children of a composite part; empty for leaves.
    pub fn children_mut(&mut self) -> &mut [Part] {
        match &mut self.body {
            PartBody::Composite { children } => children,
            PartBody::Leaf { .. } => &mut [],
        }
    }

    /// Wire overlays of a leaf part; empty for composites.
    pub fn wires(&self) -> &[WireOverlay] {
        match &self.body {
            PartBody::Leaf { wires, .. } => wires,
            PartBody::Composite { .. } => &[],
        }
    }

    /// Mesh handles of this part: one for a leaf, the children's
    /// meshes for a composite.
    pub fn mesh_handles(&self) -> Vec<RenderHandle> {
        match &self.body {
            PartBody::Leaf { mesh, .. } => vec![*mesh],
            PartBody::Composite { children } => {
                children.iter().flat_map(|c| c.mesh_handles()).collect()
            }
        }
    }

    /// Toggle visibility, propagating to wire overlays and children.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        match &mut self.body {
            PartBody::Leaf { wires, .. } => {
                for wire in wires {
                    wire.visible = visible;
                }
            }
            PartBody::Composite { children } => {
                for child in children {
                    child.set_visible(visible);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire(id: u64) -> WireOverlay {
        WireOverlay {
            handle: RenderHandle(id),
            vertices: Vec::new(),
            visible: true,
        }
    }

    #[test]
    fn test_visibility_propagates_to_wires() {
        let mut part = Part::leaf("Frame", RenderHandle(1), vec![wire(2), wire(3)]);
        part.set_visible(false);
        assert!(!part.visible);
        assert!(part.wires().iter().all(|w| !w.visible));
    }

    #[test]
    fn test_visibility_propagates_to_children() {
        let mut group = Part::composite("Tail");
        if let PartBody::Composite { children } = &mut group.body {
            children.push(Part::leaf("Tail_Vane", RenderHandle(1), vec![wire(2)]));
        }
        group.set_visible(false);
        assert!(group.children().iter().all(|c| !c.visible));
        assert!(group.children()[0].wires().iter().all(|w| !w.visible));
    }

    #[test]
    fn test_leaf_has_no_children() {
        let part = Part::leaf("Frame", RenderHandle(1), Vec::new());
        assert!(!part.is_composite());
        assert!(part.children().is_empty());
    }
}
