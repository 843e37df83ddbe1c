//! Feature status enumeration indicating the lifecycle state of an ML feature.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::display::{StatusDisplay, display_config};

/// Defines the lifecycle status of a feature definition.
///
/// Features share the pipeline vocabulary (`draft` initial state) rather than
/// the datablock one; see [`PipelineStatus`] for the rationale on keeping the
/// three vocabularies separate.
///
/// [`PipelineStatus`]: crate::status::PipelineStatus
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FeatureStatus {
    /// Feature is being drafted
    #[default]
    Draft,

    /// Feature is configured but not staged for deployment
    Configured,

    /// Feature is staged in the deployment bucket
    ReadyForDeployment,

    /// Feature is live
    Deployed,

    /// Edit to a deployed feature is staged, awaiting deployment
    PendingUpdate,

    /// Deletion of a deployed feature is staged, awaiting deployment
    PendingDeletion,

    /// Feature was superseded and retired
    Deprecated,

    /// Feature was discarded before going live
    Discarded,

    /// Last deployment of this feature failed
    Error,
}

impl FeatureStatus {
    /// Returns whether the feature appears in UI listings.
    #[inline]
    pub fn is_visible(self) -> bool {
        !self.is_terminal()
    }

    /// Returns whether the feature's change is staged in a deployment bucket.
    #[inline]
    pub fn is_in_bucket(self) -> bool {
        matches!(
            self,
            FeatureStatus::ReadyForDeployment
                | FeatureStatus::PendingUpdate
                | FeatureStatus::PendingDeletion
        )
    }

    /// Returns whether user edits are permitted.
    #[inline]
    pub fn is_editable(self) -> bool {
        matches!(
            self,
            FeatureStatus::Draft
                | FeatureStatus::Configured
                | FeatureStatus::Deployed
                | FeatureStatus::PendingUpdate
        )
    }

    /// Returns whether the feature is still being configured, not yet staged
    /// or deployed.
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, FeatureStatus::Draft | FeatureStatus::Configured)
    }

    /// Returns whether the feature reached a terminal state.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            FeatureStatus::Deprecated | FeatureStatus::Discarded | FeatureStatus::Error
        )
    }

    /// Returns whether the feature is live.
    #[inline]
    pub fn is_deployed(self) -> bool {
        matches!(self, FeatureStatus::Deployed)
    }

    /// Returns the badge display entry for this status.
    #[inline]
    pub fn display(self) -> StatusDisplay {
        display_config(self.as_ref())
    }

    /// Returns feature statuses that appear in UI listings.
    pub fn visible_statuses() -> &'static [FeatureStatus] {
        &[
            FeatureStatus::Draft,
            FeatureStatus::Configured,
            FeatureStatus::ReadyForDeployment,
            FeatureStatus::Deployed,
            FeatureStatus::PendingUpdate,
            FeatureStatus::PendingDeletion,
        ]
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn derived_sets_match_the_pipeline_vocabulary() {
        // FeatureStatus and PipelineStatus share wire names variant for
        // variant; their classifications must not drift apart silently.
        use crate::status::PipelineStatus;

        for (feature, pipeline) in FeatureStatus::iter().zip(PipelineStatus::iter()) {
            assert_eq!(feature.as_ref(), pipeline.as_ref());
            assert_eq!(feature.is_visible(), pipeline.is_visible());
            assert_eq!(feature.is_in_bucket(), pipeline.is_in_bucket());
            assert_eq!(feature.is_editable(), pipeline.is_editable());
            assert_eq!(feature.is_active(), pipeline.is_active());
        }
    }

    #[test]
    fn in_bucket_is_exactly_the_staged_statuses() {
        let staged = [
            FeatureStatus::ReadyForDeployment,
            FeatureStatus::PendingUpdate,
            FeatureStatus::PendingDeletion,
        ];
        for status in FeatureStatus::iter() {
            assert_eq!(status.is_in_bucket(), staged.contains(&status), "{status}");
        }
    }

    #[test]
    fn default_is_draft() {
        assert_eq!(FeatureStatus::default(), FeatureStatus::Draft);
    }
}
