//! Prelude module for convenient imports.
//!
//! This module re-exports commonly used types for ergonomic imports:
//!
//! ```rust
//! use nudge_lifecycle::prelude::*;
//! ```

pub use crate::display::{BadgeColor, StatusDisplay, display_config};
pub use crate::error::{LifecycleError, LifecycleResult};
pub use crate::registry::{
    Classification, classify, is_active, is_editable, is_in_bucket, is_visible,
};
pub use crate::status::{
    ChangeType, ComponentStatus, ComponentType, DatablockStatus, DeploymentBucketStatus,
    DeploymentStatus, FeatureStatus, PipelineStatus,
};
