//! Conversions between Euler angles and quaternions.
//!
//! Euler triples are stored in a [`DVec3`] as `(roll, pitch, yaw)`: rotations
//! about X, Y and Z, in radians, applied intrinsically in that order. The
//! composed rotation is therefore `Rx(roll) · Ry(pitch) · Rz(yaw)`.
//!
//! # Gimbal lock
//!
//! At `pitch = ±π/2` roll and yaw rotate about the same axis and the
//! decomposition is no longer unique. [`to_euler`] returns whatever the
//! matrix formula yields there; converting it back gives the same rotation
//! but not necessarily the same angles.
//!
//! # Example
//!
//! ```
//! use rigid_transform::{DVec3, euler};
//!
//! let angles = DVec3::new(0.3, 0.4, 0.5);
//! let q = euler::to_quaternion(angles);
//! let back = euler::to_euler(q);
//!
//! assert!(back.abs_diff_eq(angles, 1e-9));
//! ```

use std::f64::consts::PI;

use glam::{DMat3, DQuat, DVec3};

/// Converts a `(roll, pitch, yaw)` triple to a quaternion.
///
/// Built as the product of three single-axis rotations, `Rx · Ry · Rz`.
pub fn to_quaternion(euler: DVec3) -> DQuat {
    DQuat::from_axis_angle(DVec3::X, euler.x)
        * DQuat::from_axis_angle(DVec3::Y, euler.y)
        * DQuat::from_axis_angle(DVec3::Z, euler.z)
}

/// Extracts a `(roll, pitch, yaw)` triple from a quaternion.
///
/// Uses the Tait-Bryan decomposition of the rotation matrix for axis order
/// X, Y, Z. Roll is reported in `[0, π]`, pitch and yaw in `[-π, π]`; a
/// rotation whose roll lies outside `[0, π]` comes back as the equivalent
/// alternate solution.
pub fn to_euler(rotation: DQuat) -> DVec3 {
    let m = DMat3::from_quat(rotation);
    // (row, column) access into the column-major matrix
    let at = |row: usize, col: usize| m.col(col)[row];

    // Solved with every angle negated, then flipped once at the end.
    let mut roll = at(1, 2).atan2(at(2, 2));
    let cos_pitch = at(0, 0).hypot(at(0, 1));
    let pitch = if roll > 0.0 {
        roll -= PI;
        (-at(0, 2)).atan2(-cos_pitch)
    } else {
        (-at(0, 2)).atan2(cos_pitch)
    };

    let (sin_roll, cos_roll) = roll.sin_cos();
    let yaw = (sin_roll * at(2, 0) - cos_roll * at(1, 0))
        .atan2(cos_roll * at(1, 1) - sin_roll * at(2, 1));

    -DVec3::new(roll, pitch, yaw)
}
