//! Datablock status enumeration indicating the lifecycle state of a datablock.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::display::{StatusDisplay, display_config};

/// Defines the lifecycle status of a datablock.
///
/// A datablock moves from `not_configured` through `configured` and
/// `ready_for_deployment` to `deployed`. Editing a deployed datablock stages a
/// `pending_update`, a deletion request stages a `pending_deletion`, and both
/// resolve on the next deployment outcome. The transition function itself is
/// enforced by the backend; this type only classifies statuses for rendering
/// and permission checks.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DatablockStatus {
    /// Datablock exists but has no field mapping yet
    #[default]
    NotConfigured,

    /// Datablock is configured but not staged for deployment
    Configured,

    /// Datablock is staged in the deployment bucket
    ReadyForDeployment,

    /// Datablock is live
    Deployed,

    /// Edit to a deployed datablock is staged, awaiting deployment
    PendingUpdate,

    /// Deletion of a deployed datablock is staged, awaiting deployment
    PendingDeletion,

    /// Datablock was superseded and retired
    Deprecated,

    /// Datablock was discarded before going live
    Discarded,

    /// Last deployment of this datablock failed
    Error,
}

impl DatablockStatus {
    /// Returns whether the datablock appears in UI listings.
    #[inline]
    pub fn is_visible(self) -> bool {
        !self.is_terminal()
    }

    /// Returns whether the datablock's change is staged in a deployment bucket.
    #[inline]
    pub fn is_in_bucket(self) -> bool {
        matches!(
            self,
            DatablockStatus::ReadyForDeployment
                | DatablockStatus::PendingUpdate
                | DatablockStatus::PendingDeletion
        )
    }

    /// Returns whether user edits are permitted.
    ///
    /// Deployed datablocks stay editable; an edit stages a new
    /// `pending_update` rather than mutating the live entity.
    #[inline]
    pub fn is_editable(self) -> bool {
        matches!(
            self,
            DatablockStatus::NotConfigured
                | DatablockStatus::Configured
                | DatablockStatus::Deployed
                | DatablockStatus::PendingUpdate
        )
    }

    /// Returns whether the datablock is still being configured, not yet staged
    /// or deployed.
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(
            self,
            DatablockStatus::NotConfigured | DatablockStatus::Configured
        )
    }

    /// Returns whether the datablock reached a terminal state.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            DatablockStatus::Deprecated | DatablockStatus::Discarded | DatablockStatus::Error
        )
    }

    /// Returns whether the datablock is live.
    #[inline]
    pub fn is_deployed(self) -> bool {
        matches!(self, DatablockStatus::Deployed)
    }

    /// Returns whether the last deployment of this datablock failed.
    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, DatablockStatus::Error)
    }

    /// Returns the badge display entry for this status.
    #[inline]
    pub fn display(self) -> StatusDisplay {
        display_config(self.as_ref())
    }

    /// Returns datablock statuses that appear in UI listings.
    pub fn visible_statuses() -> &'static [DatablockStatus] {
        &[
            DatablockStatus::NotConfigured,
            DatablockStatus::Configured,
            DatablockStatus::ReadyForDeployment,
            DatablockStatus::Deployed,
            DatablockStatus::PendingUpdate,
            DatablockStatus::PendingDeletion,
        ]
    }
}
