//! Tail-furl kinematics: composing a rigid transform chain.

use serde::{Deserialize, Serialize};
use windviz_math::{Dir3, Transform, Vec3};

use crate::error::{LayoutError, Result};

/// Index of the hinge entry in a furl chain. By convention the second
/// transform is the hinge; the rest are static offsets from the CAD
/// export.
pub const HINGE_INDEX: usize = 1;

/// One entry of a furl transform chain, as supplied per assembly
/// variant by the external source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurlTransform {
    /// Translation component.
    pub position: [f64; 3],
    /// Rotation axis (need not be normalized, must be nonzero).
    pub axis: [f64; 3],
    /// Rotation angle in radians.
    pub angle: f64,
}

/// A furl transform chain plus its maximum hinge angle bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurlChain {
    /// Ordered transform entries; the second is the hinge.
    pub transforms: Vec<FurlTransform>,
    /// Maximum furl angle in degrees, for the GUI slider bound.
    pub maximum_angle: f64,
}

/// Compose a transform chain into a single rigid transform by
/// left-multiplying each entry's rotation-then-translation matrix into
/// an identity accumulator, in list order.
pub fn transforms_to_matrix(transforms: &[FurlTransform]) -> Result<Transform> {
    let mut matrix = Transform::identity();
    for (index, entry) in transforms.iter().enumerate() {
        let axis = Vec3::new(entry.axis[0], entry.axis[1], entry.axis[2]);
        let axis = Dir3::try_new(axis, 1e-12).ok_or(LayoutError::ZeroAxis(index))?;
        let position = Vec3::new(entry.position[0], entry.position[1], entry.position[2]);
        matrix = matrix.then(&Transform::rotation_at(&position, &axis, entry.angle));
    }
    Ok(matrix)
}

/// Re-evaluates the tail transform each frame as the hinge angle
/// changes.
///
/// The composed transform's translation is replaced with
/// `explosion_offset + tail_pivot_center`, where the pivot center is
/// the translation of the chain composed with its as-supplied angles,
/// precomputed at construction. The result is meant to be assigned
/// directly as the Tail group's matrix override.
#[derive(Debug, Clone)]
pub struct FurlComposer {
    transforms: Vec<FurlTransform>,
    tail_pivot_center: Vec3,
}

impl FurlComposer {
    /// Validate the chain and precompute the tail pivot center.
    pub fn new(chain: &FurlChain) -> Result<Self> {
        if chain.transforms.len() <= HINGE_INDEX {
            return Err(LayoutError::ChainTooShort(chain.transforms.len()));
        }
        let tail_pivot_center = transforms_to_matrix(&chain.transforms)?.translation_part();
        Ok(Self {
            transforms: chain.transforms.clone(),
            tail_pivot_center,
        })
    }

    /// Translation of the unmodified chain, fixed at setup.
    pub fn tail_pivot_center(&self) -> Vec3 {
        self.tail_pivot_center
    }

    /// Compose the tail transform for the current hinge angle.
    ///
    /// `furl_angle_deg` overwrites the hinge entry's angle;
    /// `explosion_offset` displaces the tail along the assembly's
    /// primary axis when exploded.
    pub fn compose(&mut self, furl_angle_deg: f64, explosion_offset: &Vec3) -> Transform {
        self.transforms[HINGE_INDEX].angle = furl_angle_deg.to_radians();
        // The chain was validated in new(); re-composition cannot fail.
        let mut transform =
            transforms_to_matrix(&self.transforms).unwrap_or_else(|_| Transform::identity());
        transform.set_translation(&(explosion_offset + self.tail_pivot_center));
        transform
    }
}
