#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for lifecycle classification and display lookups.
///
/// Use this target when filtering for unknown-status fallbacks reported by
/// [`classify`] and [`display_config`].
pub const TRACING_TARGET: &str = "nudge_lifecycle";

pub mod display;
mod error;
mod registry;
pub mod status;

#[doc(hidden)]
pub mod prelude;

pub use crate::display::{BadgeColor, StatusDisplay, display_config};
pub use crate::error::{LifecycleError, LifecycleResult};
pub use crate::registry::{
    Classification, classify, is_active, is_editable, is_in_bucket, is_visible,
};
pub use crate::status::{
    ChangeType, ComponentStatus, ComponentType, DatablockStatus, DeploymentBucketStatus,
    DeploymentStatus, FeatureStatus, PipelineStatus,
};
