//! Rigid transforms: a translation plus a unit-quaternion rotation.
//!
//! A [`Transform`] maps vectors, poses and other transforms from one
//! coordinate frame into the frame one step up. Applying it rotates first,
//! then translates:
//!
//! ```text
//! T(v) = rotation · v + translation
//! ```
//!
//! # In-place and by-value forms
//!
//! The `apply_to_*` methods, [`Transform::rotate`] and [`Transform::translate`]
//! update their arguments in place and never touch `self`. The only method
//! that mutates a transform is [`Transform::invert`]. Each in-place operation
//! also has a by-value counterpart ([`Transform::compose`],
//! [`Transform::transform_vector`], [`Transform::transform_pose`]) built on it,
//! so both forms give bit-identical results.
//!
//! ```
//! use rigid_transform::{DQuat, DVec3, Transform};
//!
//! let parent = Transform::new(DVec3::X, DQuat::from_rotation_z(std::f64::consts::FRAC_PI_2));
//! let mut child = Transform::from_translation(DVec3::Y);
//!
//! // Express `child` in the parent's frame.
//! parent.apply_to_transform(&mut child);
//! assert!(child.translation().abs_diff_eq(DVec3::ZERO, 1e-9));
//! ```
//!
//! # Drift
//!
//! Every operation that produces a new rotation or orientation renormalizes
//! it, so repeated composition cannot walk away from unit length.
//! Constructors do not: a non-unit quaternion passed to [`Transform::new`] is
//! stored as given. Use [`Transform::try_new`] to reject such input.

use std::ops::Mul;

use glam::{DQuat, DVec3};
use tracing::{debug, trace, warn};

use crate::error::{Result, TransformError};
use crate::euler;

/// Largest accepted deviation of a rotation's norm from 1.
pub const UNIT_NORM_TOLERANCE: f64 = 1e-6;

/// A rigid transformation between two 3D coordinate frames.
///
/// Equivalently, the pose of a child frame expressed in its parent.
///
/// # Default Values
///
/// The default transform is the identity:
/// - `translation`: `(0, 0, 0)`
/// - `rotation`: Identity quaternion
///
/// # Example
///
/// ```
/// use rigid_transform::{DVec3, Transform};
///
/// let t = Transform::from_translation_euler(
///     DVec3::new(1.0, 2.0, 3.0),
///     DVec3::new(0.0, 0.0, std::f64::consts::PI),
/// );
///
/// let mut p = DVec3::X;
/// t.apply_to_vector(&mut p);
/// assert!(p.abs_diff_eq(DVec3::new(0.0, 2.0, 3.0), 1e-9));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    translation: DVec3,
    rotation: DQuat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: DVec3::ZERO,
            rotation: DQuat::IDENTITY,
        }
    }
}

impl Transform {
    /// Creates the identity transform (no translation, no rotation).
    ///
    /// This is equivalent to `Transform::default()`.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Creates a transform from a translation and a quaternion rotation.
    ///
    /// The rotation is stored as given; it is not normalized or checked.
    /// Rotating a vector by a non-unit quaternion `q` also scales it by
    /// `|q|²`, so `(0, 0, 0, 2)` maps `X` to `(4, 0, 0)`.
    pub fn new(translation: DVec3, rotation: DQuat) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Creates a transform from a translation and a `(roll, pitch, yaw)`
    /// Euler triple in radians.
    pub fn from_translation_euler(translation: DVec3, euler: DVec3) -> Self {
        Self::new(translation, euler::to_quaternion(euler))
    }

    /// Creates a pure translation.
    ///
    /// ```
    /// use rigid_transform::{DQuat, DVec3, Transform};
    ///
    /// let t = Transform::from_translation(DVec3::new(1.0, 2.0, 3.0));
    /// assert_eq!(*t.rotation(), DQuat::IDENTITY);
    /// ```
    pub fn from_translation(translation: DVec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    /// Creates a pure rotation from a quaternion.
    pub fn from_rotation(rotation: DQuat) -> Self {
        Self {
            rotation,
            ..Default::default()
        }
    }

    /// Creates a pure rotation from a `(roll, pitch, yaw)` Euler triple.
    pub fn from_euler(euler: DVec3) -> Self {
        Self::from_rotation(euler::to_quaternion(euler))
    }

    /// Creates a transform after checking that both components are finite
    /// and that the rotation is a unit quaternion within
    /// [`UNIT_NORM_TOLERANCE`].
    ///
    /// ```
    /// use rigid_transform::{DQuat, DVec3, Transform, TransformError};
    ///
    /// let bad = Transform::try_new(DVec3::ZERO, DQuat::from_xyzw(0.0, 0.0, 0.0, 2.0));
    /// assert_eq!(bad, Err(TransformError::NotNormalized { norm: 2.0 }));
    /// ```
    pub fn try_new(translation: DVec3, rotation: DQuat) -> Result<Self> {
        if !translation.is_finite() {
            debug!(?translation, "rejected transform with non-finite translation");
            return Err(TransformError::NonFiniteTranslation);
        }
        if !rotation.is_finite() {
            debug!(?rotation, "rejected transform with non-finite rotation");
            return Err(TransformError::NonFiniteRotation);
        }

        let norm = rotation.length();
        if (norm - 1.0).abs() > UNIT_NORM_TOLERANCE {
            debug!(norm, "rejected transform with non-unit rotation");
            return Err(TransformError::NotNormalized { norm });
        }

        Ok(Self::new(translation, rotation))
    }

    /// The translation component.
    pub fn translation(&self) -> &DVec3 {
        &self.translation
    }

    /// The rotation component.
    pub fn rotation(&self) -> &DQuat {
        &self.rotation
    }

    /// Returns `true` if neither component has a NaN or infinite value.
    pub fn is_finite(&self) -> bool {
        self.translation.is_finite() && self.rotation.is_finite()
    }

    /// Returns `true` if the rotation's norm is within
    /// [`UNIT_NORM_TOLERANCE`] of 1.
    pub fn is_normalized(&self) -> bool {
        (self.rotation.length() - 1.0).abs() <= UNIT_NORM_TOLERANCE
    }

    /// Returns a transform with the rotation inverted and the translation
    /// negated.
    ///
    /// The two components are inverted independently: the negated
    /// translation is not rotated into the inverted frame, so this is not the
    /// group inverse of a rigid motion. See [`Transform::rigid_inverse`] for
    /// that.
    ///
    /// ```
    /// use rigid_transform::{DQuat, DVec3, Transform};
    ///
    /// let t = Transform::new(DVec3::new(2.0, 3.0, 4.0), DQuat::from_rotation_y(0.5));
    /// let inv = t.inverse();
    /// assert_eq!(*inv.translation(), DVec3::new(-2.0, -3.0, -4.0));
    /// ```
    pub fn inverse(&self) -> Self {
        Self {
            translation: self.translation * -1.0,
            rotation: invert_quat(self.rotation),
        }
    }

    /// Inverts the rotation in place.
    ///
    /// Unlike [`Transform::inverse`] the translation is left as it is.
    pub fn invert(&mut self) {
        self.translation *= 1.0;
        self.rotation = invert_quat(self.rotation);
    }

    /// Returns the true inverse rigid motion, so that
    /// `t.compose(&t.rigid_inverse())` is the identity.
    ///
    /// Assumes a unit rotation.
    pub fn rigid_inverse(&self) -> Self {
        let rotation = invert_quat(self.rotation);
        Self {
            translation: -(rotation * self.translation),
            rotation,
        }
    }

    /// Rotates a point or vector in place.
    pub fn rotate(&self, vector: &mut DVec3) {
        *vector = self.rotation * *vector;
    }

    /// Translates a point in place.
    pub fn translate(&self, vector: &mut DVec3) {
        *vector += self.translation;
    }

    /// Chains this transform on top of `other`, in place.
    ///
    /// `self` acts as the parent frame: `other`'s rotation becomes
    /// `self.rotation · other.rotation` (renormalized), and its translation
    /// is rotated by `self.rotation` before `self.translation` is added.
    /// The rotation is updated before the translation.
    pub fn apply_to_transform(&self, other: &mut Transform) {
        other.rotation = renormalize(self.rotation * other.rotation);
        other.translation = self.rotation * other.translation + self.translation;
    }

    /// Transforms a point in place: rotate, then translate.
    pub fn apply_to_vector(&self, vector: &mut DVec3) {
        *vector = self.rotation * *vector + self.translation;
    }

    /// Transforms a pose whose orientation is a `(roll, pitch, yaw)` Euler
    /// triple, in place.
    ///
    /// The orientation goes through a quaternion and back, so angles are
    /// returned in the canonical range of [`euler::to_euler`] and may differ
    /// from the input near gimbal lock even when the rotation is unchanged.
    pub fn apply_to_pose_euler(&self, position: &mut DVec3, orientation: &mut DVec3) {
        let mut rotation = euler::to_quaternion(*orientation);
        self.apply_to_pose(position, &mut rotation);
        *orientation = euler::to_euler(rotation);
    }

    /// Transforms a pose in place.
    ///
    /// The orientation is rotated and renormalized first, then the position
    /// is rotated and translated.
    pub fn apply_to_pose(&self, position: &mut DVec3, orientation: &mut DQuat) {
        *orientation = renormalize(self.rotation * *orientation);
        *position = self.rotation * *position + self.translation;
    }

    /// Returns `other` expressed in this transform's parent frame.
    ///
    /// By-value form of [`Transform::apply_to_transform`]; also available as
    /// `self * other`.
    pub fn compose(&self, other: &Transform) -> Self {
        let mut result = *other;
        self.apply_to_transform(&mut result);
        result
    }

    /// By-value form of [`Transform::apply_to_vector`]; also available as
    /// `self * vector`.
    pub fn transform_vector(&self, mut vector: DVec3) -> DVec3 {
        self.apply_to_vector(&mut vector);
        vector
    }

    /// By-value form of [`Transform::apply_to_pose`].
    pub fn transform_pose(&self, mut position: DVec3, mut orientation: DQuat) -> (DVec3, DQuat) {
        self.apply_to_pose(&mut position, &mut orientation);
        (position, orientation)
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Self::Output {
        self.compose(&rhs)
    }
}

impl Mul<DVec3> for Transform {
    type Output = DVec3;

    fn mul(self, rhs: DVec3) -> Self::Output {
        self.transform_vector(rhs)
    }
}

/// Quaternion inverse that also handles non-unit input.
fn invert_quat(q: DQuat) -> DQuat {
    let norm_squared = q.length_squared();
    if norm_squared > 0.0 {
        q.conjugate() / norm_squared
    } else {
        DQuat::from_xyzw(0.0, 0.0, 0.0, 0.0)
    }
}

/// Normalizes `rotation`, leaving a zero quaternion as it is.
fn renormalize(rotation: DQuat) -> DQuat {
    if rotation.length_squared() > 0.0 {
        trace!(drift = rotation.length() - 1.0, "renormalizing rotation");
        rotation.normalize()
    } else {
        warn!(?rotation, "zero rotation cannot be renormalized");
        rotation
    }
}
