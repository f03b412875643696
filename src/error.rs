//! Errors reported by checked transform construction.
//!
//! Every transform operation is total; only [`Transform::try_new`](crate::Transform::try_new)
//! can fail.

/// Why a checked [`Transform`](crate::Transform) could not be built.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum TransformError {
    /// The translation had a NaN or infinite component.
    #[error("translation has a non-finite component")]
    NonFiniteTranslation,
    /// The rotation had a NaN or infinite component.
    #[error("rotation has a non-finite component")]
    NonFiniteRotation,
    /// The rotation was finite but not a unit quaternion.
    #[error("rotation is not a unit quaternion (norm {norm})")]
    NotNormalized {
        /// The quaternion's actual norm.
        norm: f64,
    },
}

/// Result of checked transform construction.
pub type Result<T> = std::result::Result<T, TransformError>;
