//! Deterministic part ordering for z-stacked explosion.

use windviz_math::Tolerance;
use windviz_scene::Part;

use crate::bbox::bounding_box_of;
use crate::sort::{sort_by_float_criteria, SortCriterion, SortDirection};

/// Part names whose z-extrema is the bounding-box minimum rather than
/// the maximum. These parts are authored at their visual bottom;
/// sorting them by min-z keeps bolts between the base and the bolt-head
/// layer of the stator mold.
pub const Z_MIN_PART_NAMES: [&str; 3] = ["LocatingBolts", "Bolts", "Rotor_Magnets"];

/// Signed z-extrema of a part: max-z, or min-z for the
/// [`Z_MIN_PART_NAMES`] exception set.
pub fn z_extrema_of(part: &Part) -> f64 {
    let aabb = bounding_box_of(part);
    if aabb.is_empty() {
        return 0.0;
    }
    if Z_MIN_PART_NAMES.contains(&part.name.as_str()) {
        aabb.min.z
    } else {
        aabb.max.z
    }
}

/// Rounded z-extrema, for grouping parts into stacking buckets. Stator
/// coil and spacer z differ by ~0.2 but should stack together.
pub fn rounded_z_extrema_of(part: &Part) -> f64 {
    z_extrema_of(part).round()
}

/// XY-plane cross-sectional area of a part's bounding box.
pub fn xy_plane_area_of(part: &Part) -> f64 {
    let size = bounding_box_of(part).size();
    size.x * size.y
}

/// Totally order parts for stacking and explosion.
///
/// Primary key: z-extrema ascending. Tie-break (within the linear
/// tolerance): XY-plane area descending, so larger jigs emerge before
/// smaller ones among equals. Finally, parts named in `override_names`
/// are re-ordered, among the slots they occupy, into list order;
/// unlisted parts keep their positions.
pub fn order_parts(parts: Vec<Part>, override_names: &[String]) -> Vec<Part> {
    let sorted = sort_by_float_criteria(
        parts,
        &SortCriterion {
            key: z_extrema_of,
            direction: SortDirection::Ascending,
        },
        &SortCriterion {
            key: xy_plane_area_of,
            direction: SortDirection::Descending,
        },
        Tolerance::DEFAULT.linear,
    );
    sort_by_override(sorted, override_names)
}

/// Re-order the override-listed parts among their own slots into list
/// order. Unlisted parts keep their positions untouched; a comparator
/// that ignores them would not be a total order.
fn sort_by_override(parts: Vec<Part>, override_names: &[String]) -> Vec<Part> {
    let index_of = |part: &Part| override_names.iter().position(|name| *name == part.name);
    let mut slots = Vec::new();
    let mut listed = Vec::new();
    let mut out: Vec<Option<Part>> = Vec::with_capacity(parts.len());
    for part in parts {
        match index_of(&part) {
            Some(key) => {
                slots.push(out.len());
                listed.push((key, part));
                out.push(None);
            }
            None => out.push(Some(part)),
        }
    }
    listed.sort_by_key(|(key, _)| *key);
    for (slot, (_, part)) in slots.into_iter().zip(listed) {
        out[slot] = Some(part);
    }
    out.into_iter().flatten().collect()
}
