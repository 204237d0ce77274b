#![warn(missing_docs)]

//! Math types for the windviz assembly visualization core.
//!
//! Thin wrappers around nalgebra providing domain-specific types for
//! assembly layout: points, vectors, rigid transforms, axis-aligned
//! bounding boxes, and tolerance constants. All lengths are in
//! millimeters, matching the CAD export.

use nalgebra::{Matrix4, Unit, Vector3, Vector4};

mod aabb;

pub use aabb::Aabb;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// A 4x4 rigid transformation matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Translation by `v`.
    pub fn translation(v: &Vec3) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 3)] = v.x;
        m[(1, 3)] = v.y;
        m[(2, 3)] = v.z;
        Self { matrix: m }
    }

    /// Rotation about an arbitrary axis through the origin by `angle` radians.
    ///
    /// Uses Rodrigues' rotation formula.
    pub fn rotation_about_axis(axis: &Dir3, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        let (x, y, z) = (axis.as_ref().x, axis.as_ref().y, axis.as_ref().z);
        let mut m = Matrix4::identity();
        m[(0, 0)] = t * x * x + c;
        m[(0, 1)] = t * x * y - s * z;
        m[(0, 2)] = t * x * z + s * y;
        m[(1, 0)] = t * x * y + s * z;
        m[(1, 1)] = t * y * y + c;
        m[(1, 2)] = t * y * z - s * x;
        m[(2, 0)] = t * x * z - s * y;
        m[(2, 1)] = t * y * z + s * x;
        m[(2, 2)] = t * z * z + c;
        Self { matrix: m }
    }

    /// Rotation about `axis` with the translation component set to `position`.
    ///
    /// This is the shape of each entry in a kinematic transform chain:
    /// rotate about an axis, then place at a position.
    pub fn rotation_at(position: &Vec3, axis: &Dir3, angle: f64) -> Self {
        let mut t = Self::rotation_about_axis(axis, angle);
        t.set_translation(position);
        t
    }

    /// Compose: `self` then `other` (self * other).
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// The translation component of this transform.
    pub fn translation_part(&self) -> Vec3 {
        Vec3::new(self.matrix[(0, 3)], self.matrix[(1, 3)], self.matrix[(2, 3)])
    }

    /// Overwrite the translation component, leaving rotation untouched.
    pub fn set_translation(&mut self, v: &Vec3) {
        self.matrix[(0, 3)] = v.x;
        self.matrix[(1, 3)] = v.y;
        self.matrix[(2, 3)] = v.z;
    }

    /// Transform a point.
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        let v = self.matrix * Vector4::new(p.x, p.y, p.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }

    /// Transform a direction vector (ignores translation).
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        let r = self.matrix * Vector4::new(v.x, v.y, v.z, 0.0);
        Vec3::new(r.x, r.y, r.z)
    }

    /// Inverse of this transform, if it exists.
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in mm.
    pub linear: f64,
}

impl Tolerance {
    /// Default layout tolerance (1 mm — exported wire coordinates of
    /// nominally coplanar parts differ by fractions of a millimeter).
    pub const DEFAULT: Self = Self { linear: 1.0 };

    /// Check if two scalars are effectively equal.
    pub fn equal(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_identity_transform() {
        let t = Transform::identity();
        let p = Point3::new(1.0, 2.0, 3.0);
        let result = t.apply_point(&p);
        assert!((result - p).norm() < 1e-12);
    }

    #[test]
    fn test_translation() {
        let t = Transform::translation(&Vec3::new(10.0, 20.0, 30.0));
        let p = Point3::new(1.0, 2.0, 3.0);
        let result = t.apply_point(&p);
        assert!((result.x - 11.0).abs() < 1e-12);
        assert!((result.y - 22.0).abs() < 1e-12);
        assert!((result.z - 33.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_about_axis() {
        // Rotate (1,0,0) by 90° about Z axis → (0,1,0)
        let axis = Dir3::new_normalize(Vec3::z());
        let t = Transform::rotation_about_axis(&axis, PI / 2.0);
        let p = Point3::new(1.0, 0.0, 0.0);
        let result = t.apply_point(&p);
        assert!(result.x.abs() < 1e-12);
        assert!((result.y - 1.0).abs() < 1e-12);
        assert!(result.z.abs() < 1e-12);
    }

    #[test]
    fn test_rotation_at_places_translation() {
        let axis = Dir3::new_normalize(Vec3::z());
        let pos = Vec3::new(5.0, -2.0, 1.0);
        let t = Transform::rotation_at(&pos, &axis, PI);
        assert!((t.translation_part() - pos).norm() < 1e-12);
        // rotation part still acts on directions
        let v = t.apply_vec(&Vec3::x());
        assert!((v.x + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_set_translation_preserves_rotation() {
        let axis = Dir3::new_normalize(Vec3::y());
        let mut t = Transform::rotation_about_axis(&axis, PI / 2.0);
        let before = t.apply_vec(&Vec3::x());
        t.set_translation(&Vec3::new(7.0, 8.0, 9.0));
        let after = t.apply_vec(&Vec3::x());
        assert!((before - after).norm() < 1e-12);
        assert!((t.translation_part() - Vec3::new(7.0, 8.0, 9.0)).norm() < 1e-12);
    }

    #[test]
    fn test_inverse() {
        let t = Transform::translation(&Vec3::new(1.0, 2.0, 3.0));
        let inv = t.inverse().unwrap();
        let composed = t.then(&inv);
        let p = Point3::new(5.0, 6.0, 7.0);
        let result = composed.apply_point(&p);
        assert!((result - p).norm() < 1e-12);
    }

    #[test]
    fn test_tolerance() {
        let tol = Tolerance::DEFAULT;
        assert!(tol.equal(10.0, 10.2));
        assert!(!tol.equal(10.0, 11.5));
    }
}
