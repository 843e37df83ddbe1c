//! Lifecycle status enumerations for platform entities.
//!
//! This module provides strongly-typed status vocabularies that mirror the
//! backend's lifecycle definitions. Each enumeration carries serialization
//! support for APIs and the classification predicates UI and business-rule
//! checks consume.

// Component lifecycle enumerations
pub mod datablock_status;
pub mod feature_status;
pub mod pipeline_status;

// Deployment enumerations
pub mod deployment_bucket_status;
pub mod deployment_status;

// Cross-cutting discriminators
pub mod change_type;
pub mod component_status;
pub mod component_type;

pub use change_type::ChangeType;
pub use component_status::ComponentStatus;
pub use component_type::ComponentType;
pub use datablock_status::DatablockStatus;
pub use deployment_bucket_status::DeploymentBucketStatus;
pub use deployment_status::DeploymentStatus;
pub use feature_status::FeatureStatus;
pub use pipeline_status::PipelineStatus;
