//! Bounding-box analysis over part wire geometry.
//!
//! Boxes are computed from wire overlays, not mesh geometry: the
//! exporter's mesh bounding boxes erroneously report a zero minimum on
//! one axis, while wire geometry does not have this defect. These are
//! pure functions with no caching; callers batch-compute once per setup
//! and keep only derived scalars for the render loop.

use windviz_math::Aabb;
use windviz_scene::Part;

/// Axis-aligned bounding box of one part, from its wire overlays.
///
/// Recurses into composite parts and unions across children. Returns an
/// empty box when the part (or the whole subtree) has no wire geometry.
pub fn bounding_box_of(part: &Part) -> Aabb {
    let mut aabb = Aabb::empty();
    for wire in part.wires() {
        aabb = aabb.union(&Aabb::from_points(&wire.vertices));
    }
    for child in part.children() {
        aabb = aabb.union(&bounding_box_of(child));
    }
    aabb
}

/// Union bounding box over all parts.
pub fn union_box_of(parts: &[Part]) -> Aabb {
    parts
        .iter()
        .fold(Aabb::empty(), |acc, part| acc.union(&bounding_box_of(part)))
}
