//! # rigid-transform
//!
//! **Rigid-body 3D transforms: translation plus rotation, nothing else.**
//!
//! A [`Transform`] holds a translation vector and a unit-quaternion rotation
//! and applies them to points, poses and other transforms. Rotations can be
//! given as quaternions or as `(roll, pitch, yaw)` Euler triples.
//!
//! ## Quick Start
//!
//! ```
//! use rigid_transform::*;
//! use std::f64::consts::FRAC_PI_2;
//!
//! // A sensor mounted one meter along X, turned 90° about Z.
//! let mount = Transform::new(DVec3::X, DQuat::from_rotation_z(FRAC_PI_2));
//!
//! // A point seen by the sensor, expressed in the body frame.
//! let mut point = DVec3::new(1.0, 0.0, 0.0);
//! mount.apply_to_vector(&mut point);
//! assert!(point.abs_diff_eq(DVec3::new(1.0, 1.0, 0.0), 1e-9));
//!
//! // Poses carry an orientation along with the position.
//! let (position, orientation) = mount.transform_pose(DVec3::ZERO, DQuat::IDENTITY);
//! assert_eq!(position, DVec3::X);
//! assert!(orientation.abs_diff_eq(DQuat::from_rotation_z(FRAC_PI_2), 1e-9));
//!
//! // Euler angles convert both ways.
//! let q = to_quaternion(DVec3::new(0.1, 0.2, 0.3));
//! assert!(to_euler(q).abs_diff_eq(DVec3::new(0.1, 0.2, 0.3), 1e-9));
//! ```
//!
//! ## Conventions
//!
//! - Double precision throughout (`glam`'s `D*` types). Angles are radians.
//! - `T(v) = rotation · v + translation`: rotate first, then translate.
//! - Euler triples are `(roll, pitch, yaw)` about X, Y, Z, composed as
//!   `Rx · Ry · Rz`.
//!
//! Nothing here allocates, blocks, or holds shared state.

pub mod error;
pub mod euler;
mod transform;

pub use error::TransformError;
pub use euler::{to_euler, to_quaternion};
pub use transform::{Transform, UNIT_NORM_TOLERANCE};

// Re-export glam math types for convenience
pub use glam::{DMat3, DQuat, DVec3};
