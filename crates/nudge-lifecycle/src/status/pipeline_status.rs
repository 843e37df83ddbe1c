//! Pipeline status enumeration indicating the lifecycle state of a pipeline.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::display::{StatusDisplay, display_config};

/// Defines the lifecycle status of a pipeline definition.
///
/// Structurally parallel to [`DatablockStatus`] except that new pipelines
/// start in `draft` rather than `not_configured`. The two vocabularies are
/// kept distinct on purpose: the backend declares them separately and may
/// diverge them.
///
/// [`DatablockStatus`]: crate::status::DatablockStatus
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PipelineStatus {
    /// Pipeline is being drafted
    #[default]
    Draft,

    /// Pipeline is configured but not staged for deployment
    Configured,

    /// Pipeline is staged in the deployment bucket
    ReadyForDeployment,

    /// Pipeline is live
    Deployed,

    /// Edit to a deployed pipeline is staged, awaiting deployment
    PendingUpdate,

    /// Deletion of a deployed pipeline is staged, awaiting deployment
    PendingDeletion,

    /// Pipeline was superseded and retired
    Deprecated,

    /// Pipeline was discarded before going live
    Discarded,

    /// Last deployment of this pipeline failed
    Error,
}

impl PipelineStatus {
    /// Returns whether the pipeline appears in UI listings.
    #[inline]
    pub fn is_visible(self) -> bool {
        !self.is_terminal()
    }

    /// Returns whether the pipeline's change is staged in a deployment bucket.
    #[inline]
    pub fn is_in_bucket(self) -> bool {
        matches!(
            self,
            PipelineStatus::ReadyForDeployment
                | PipelineStatus::PendingUpdate
                | PipelineStatus::PendingDeletion
        )
    }

    /// Returns whether user edits are permitted.
    #[inline]
    pub fn is_editable(self) -> bool {
        matches!(
            self,
            PipelineStatus::Draft
                | PipelineStatus::Configured
                | PipelineStatus::Deployed
                | PipelineStatus::PendingUpdate
        )
    }

    /// Returns whether the pipeline is still being configured, not yet staged
    /// or deployed.
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, PipelineStatus::Draft | PipelineStatus::Configured)
    }

    /// Returns whether the pipeline reached a terminal state.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            PipelineStatus::Deprecated | PipelineStatus::Discarded | PipelineStatus::Error
        )
    }

    /// Returns whether the pipeline is live.
    #[inline]
    pub fn is_deployed(self) -> bool {
        matches!(self, PipelineStatus::Deployed)
    }

    /// Returns the badge display entry for this status.
    #[inline]
    pub fn display(self) -> StatusDisplay {
        display_config(self.as_ref())
    }

    /// Returns pipeline statuses that appear in UI listings.
    pub fn visible_statuses() -> &'static [PipelineStatus] {
        &[
            PipelineStatus::Draft,
            PipelineStatus::Configured,
            PipelineStatus::ReadyForDeployment,
            PipelineStatus::Deployed,
            PipelineStatus::PendingUpdate,
            PipelineStatus::PendingDeletion,
        ]
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn visible_is_complement_of_terminal() {
        for status in PipelineStatus::iter() {
            assert_eq!(status.is_visible(), !status.is_terminal(), "{status}");
        }
    }

    #[test]
    fn draft_is_the_initial_state() {
        let status = PipelineStatus::default();
        assert_eq!(status, PipelineStatus::Draft);
        assert!(status.is_active());
        assert!(status.is_editable());
        assert!(!status.is_in_bucket());
    }

    #[test]
    fn wire_names_are_snake_case() {
        assert_eq!(PipelineStatus::Draft.as_ref(), "draft");
        assert_eq!(
            "ready_for_deployment".parse::<PipelineStatus>(),
            Ok(PipelineStatus::ReadyForDeployment)
        );
        assert!("not_configured".parse::<PipelineStatus>().is_err());
    }
}
