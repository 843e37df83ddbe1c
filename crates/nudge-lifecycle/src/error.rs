//! Lifecycle error types.

use thiserror::Error;

use crate::status::ComponentType;

/// Result type for lifecycle operations.
pub type LifecycleResult<T> = Result<T, LifecycleError>;

/// Errors raised by the strict (typed) parsing surface.
///
/// The fail-safe registry functions ([`classify`], [`display_config`]) never
/// return these; they degrade to default classifications and fallback display
/// entries instead.
///
/// [`classify`]: crate::classify
/// [`display_config`]: crate::display_config
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    /// Status literal is not part of the kind's vocabulary.
    #[error("unknown {kind} status: '{value}'")]
    UnknownStatus {
        /// Component kind whose vocabulary was consulted.
        kind: ComponentType,
        /// The unrecognized status literal.
        value: String,
    },

    /// Component kind literal is not recognized.
    #[error("unknown component kind: '{0}'")]
    UnknownKind(String),
}
