//! Deployment status enumeration indicating the state of a deployment run.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::display::{StatusDisplay, display_config};

/// Defines the execution status of a deployment run.
///
/// A run applies the staged changes of one deployment bucket. `rolled_back`
/// means the run completed but its changes were later reverted.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DeploymentStatus {
    /// Run is waiting to start
    #[default]
    Pending,

    /// Run is applying changes
    InProgress,

    /// All changes applied
    Success,

    /// Some changes applied, some failed
    PartialSuccess,

    /// Run failed, no changes applied
    Failed,

    /// Run's changes were reverted after the fact
    RolledBack,
}

impl DeploymentStatus {
    /// Returns whether the run is waiting to start.
    #[inline]
    pub fn is_pending(self) -> bool {
        matches!(self, DeploymentStatus::Pending)
    }

    /// Returns whether the run is currently applying changes.
    #[inline]
    pub fn is_in_progress(self) -> bool {
        matches!(self, DeploymentStatus::InProgress)
    }

    /// Returns whether the run has finished, in any outcome.
    #[inline]
    pub fn is_finished(self) -> bool {
        !matches!(
            self,
            DeploymentStatus::Pending | DeploymentStatus::InProgress
        )
    }

    /// Returns whether the run applied at least some of its changes.
    #[inline]
    pub fn succeeded(self) -> bool {
        matches!(
            self,
            DeploymentStatus::Success | DeploymentStatus::PartialSuccess
        )
    }

    /// Returns whether the run failed outright.
    #[inline]
    pub fn is_failed(self) -> bool {
        matches!(self, DeploymentStatus::Failed)
    }

    /// Returns whether the run can be retried.
    #[inline]
    pub fn is_retriable(self) -> bool {
        matches!(
            self,
            DeploymentStatus::Failed
                | DeploymentStatus::PartialSuccess
                | DeploymentStatus::RolledBack
        )
    }

    /// Returns the badge display entry for this status.
    #[inline]
    pub fn display(self) -> StatusDisplay {
        display_config(self.as_ref())
    }
}
