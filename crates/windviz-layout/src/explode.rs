//! Explosion layout engines.
//!
//! Both engines assign absolute positions from the current controller
//! value, so repeated calls with the same value are idempotent — there
//! is no incremental accumulation to drift.

use std::collections::BTreeMap;

use tracing::debug;
use windviz_math::Vec3;
use windviz_scene::{Assembly, Part};

use crate::bbox::{bounding_box_of, union_box_of};
use crate::controller::{Controller, MAX_EXPLODE};
use crate::error::{LayoutError, Result};
use crate::order::rounded_z_extrema_of;

/// Mechanical tilt of the alternator plane, fixed by the turbine
/// design. Matches the constant in the upstream CAD model.
pub const ALTERNATOR_TILT_ANGLE: f64 = 4.0 * std::f64::consts::PI / 180.0;

/// Approximate length of the reference (T shape) turbine along the X
/// axis, observed from its bounding box. Normalizing by this keeps the
/// explosion visually proportional across turbine size variants.
pub const REFERENCE_LENGTH_ALONG_X: f64 = 2000.0;

/// Policy constant: the first child of a composite stack stays put and
/// anchors the stack. Empirically tuned, not a derived requirement.
pub const ANCHOR_FIRST_CHILD: bool = true;

/// Tilted-axis explosion for the wind turbine.
///
/// Each registered part name carries a fixed scalar factor; positive
/// factors displace toward the alternator front, negative toward the
/// frame and tail. The displacement lies in the XY plane along the
/// alternator's tilted axis.
#[derive(Debug, Clone)]
pub struct TiltedAxisExplosion {
    factors: BTreeMap<String, f64>,
    base_factor: f64,
}

impl TiltedAxisExplosion {
    /// Build the engine from a per-part factor table and the measured
    /// assembly length along the X axis.
    pub fn new(factors: BTreeMap<String, f64>, length_along_x: f64) -> Self {
        Self {
            factors,
            base_factor: length_along_x / REFERENCE_LENGTH_ALONG_X,
        }
    }

    /// Ratio of this assembly's length to the reference length.
    pub fn base_factor(&self) -> f64 {
        self.base_factor
    }

    /// Displacement along the tilted axis for a given explode value and
    /// part factor.
    pub fn explosion_vector(&self, explode: f64, factor: f64) -> Vec3 {
        let offset = explode * factor * self.base_factor;
        Vec3::new(
            offset * ALTERNATOR_TILT_ANGLE.cos(),
            offset * ALTERNATOR_TILT_ANGLE.sin(),
            0.0,
        )
    }

    /// Position every registered part for the controller's explode
    /// value. Parts without a factor are untouched; registered names
    /// missing from the assembly are skipped.
    pub fn explode(&self, assembly: &mut Assembly, controller: &Controller) {
        for (name, factor) in &self.factors {
            let vector = self.explosion_vector(controller.explode, *factor);
            match assembly.find_mut(name) {
                Some(part) => part.transform.position = vector,
                None => debug!(part = %name, "factor registered for absent part"),
            }
        }
    }
}

/// One part's slot in a z-stacked explosion.
#[derive(Debug, Clone)]
struct StackEntry {
    name: String,
    /// Stacking bucket. Parts with equal rounded z-extrema share one.
    index: usize,
    /// Child count when the part is a composite array stack.
    child_count: usize,
}

/// Z-axis stacked explosion for tool assemblies.
///
/// Parts must already be totally ordered (see
/// [`crate::order::order_parts`]). Parts whose rounded min-z is
/// negative explode downward with their own counter; everything else
/// explodes upward. Parts sharing a rounded z-extrema share a stacking
/// bucket and move in lockstep.
#[derive(Debug, Clone)]
pub struct ZStackedExplosion {
    explosion_factor: f64,
    positive: Vec<StackEntry>,
    negative: Vec<StackEntry>,
}

impl ZStackedExplosion {
    /// Precompute stacking buckets and the per-step displacement from
    /// an ordered part list.
    pub fn new(ordered_parts: &[Part]) -> Result<Self> {
        if ordered_parts.is_empty() {
            return Err(LayoutError::NoParts);
        }
        let size = union_box_of(ordered_parts).size();
        let average_dimension = ((size.x + size.y + size.z) / 3.0).round();
        let explosion_factor = average_dimension / MAX_EXPLODE;

        let (negative, positive): (Vec<&Part>, Vec<&Part>) = ordered_parts
            .iter()
            .partition(|part| rounded_min_z(part) < 0.0);

        Ok(Self {
            explosion_factor,
            positive: assign_stack_buckets(&positive),
            negative: assign_stack_buckets(&negative),
        })
    }

    /// Millimeters of displacement per explode unit and stack step.
    pub fn explosion_factor(&self) -> f64 {
        self.explosion_factor
    }

    /// Position every stacked part for the controller's explode value.
    pub fn explode(&self, assembly: &mut Assembly, controller: &Controller) {
        let explode = controller.explode;
        for entry in &self.positive {
            let z = entry.index as f64 * explode * self.explosion_factor;
            self.apply(assembly, entry, z, explode);
        }
        for entry in &self.negative {
            let z = -((entry.index + 1) as f64) * explode * self.explosion_factor;
            self.apply(assembly, entry, z, explode);
        }
    }

    fn apply(&self, assembly: &mut Assembly, entry: &StackEntry, z: f64, explode: f64) {
        let Some(part) = assembly.find_mut(&entry.name) else {
            debug!(part = %entry.name, "stacked part missing from assembly");
            return;
        };
        part.transform.position = Vec3::new(0.0, 0.0, z);
        if entry.child_count > 1 {
            // Composite array stacks spread a secondary explosion
            // amongst their children, proportioned by child count.
            let count = entry.child_count as f64;
            for (child_index, child) in part.children_mut().iter_mut().enumerate() {
                let child_z = if child_index == 0 && ANCHOR_FIRST_CHILD {
                    0.0
                } else {
                    child_index as f64 * explode * self.explosion_factor / count
                };
                child.transform.position = Vec3::new(0.0, 0.0, child_z);
            }
        }
    }
}

fn rounded_min_z(part: &Part) -> f64 {
    let aabb = bounding_box_of(part);
    if aabb.is_empty() {
        0.0
    } else {
        aabb.min.z.round()
    }
}

/// Assign stacking buckets in order: a part opens a new bucket only
/// when its rounded z-extrema differs from the previous part's.
fn assign_stack_buckets(parts: &[&Part]) -> Vec<StackEntry> {
    let mut entries = Vec::with_capacity(parts.len());
    let mut bucket = 0usize;
    let mut previous: Option<f64> = None;
    for part in parts {
        let z = rounded_z_extrema_of(part);
        if let Some(previous) = previous {
            if z != previous {
                bucket += 1;
            }
        }
        entries.push(StackEntry {
            name: part.name.clone(),
            index: bucket,
            child_count: part.children().len(),
        });
        previous = Some(z);
    }
    entries
}
