//! Deployment bucket status enumeration.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::display::{StatusDisplay, display_config};

/// Defines the status of a deployment bucket.
///
/// A bucket is the staging collection of pending component changes. It
/// collects changes while `active`, freezes while `deploying`, and settles as
/// `deployed`, `conflict`, or `discarded`.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DeploymentBucketStatus {
    /// Bucket is open and collecting staged changes
    #[default]
    Active,

    /// Bucket's deployment is in flight
    Deploying,

    /// Bucket's changes were applied
    Deployed,

    /// Bucket's changes conflict with another deployment
    Conflict,

    /// Bucket was thrown away without deploying
    Discarded,
}

impl DeploymentBucketStatus {
    /// Returns whether the bucket is open and collecting changes.
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, DeploymentBucketStatus::Active)
    }

    /// Returns whether new changes can be staged into the bucket.
    #[inline]
    pub fn accepts_changes(self) -> bool {
        matches!(self, DeploymentBucketStatus::Active)
    }

    /// Returns whether the bucket's deployment is currently in flight.
    #[inline]
    pub fn is_in_flight(self) -> bool {
        matches!(self, DeploymentBucketStatus::Deploying)
    }

    /// Returns whether the bucket's changes were applied.
    #[inline]
    pub fn is_deployed(self) -> bool {
        matches!(self, DeploymentBucketStatus::Deployed)
    }

    /// Returns whether the bucket needs conflict resolution before it can
    /// deploy.
    #[inline]
    pub fn has_conflict(self) -> bool {
        matches!(self, DeploymentBucketStatus::Conflict)
    }

    /// Returns whether the bucket reached a settled end state.
    #[inline]
    pub fn is_settled(self) -> bool {
        matches!(
            self,
            DeploymentBucketStatus::Deployed | DeploymentBucketStatus::Discarded
        )
    }

    /// Returns the badge display entry for this status.
    #[inline]
    pub fn display(self) -> StatusDisplay {
        display_config(self.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn only_active_accepts_changes() {
        for status in DeploymentBucketStatus::iter() {
            assert_eq!(status.accepts_changes(), status.is_active(), "{status}");
        }
    }

    #[test]
    fn conflict_is_neither_settled_nor_in_flight() {
        let status = DeploymentBucketStatus::Conflict;
        assert!(status.has_conflict());
        assert!(!status.is_settled());
        assert!(!status.is_in_flight());
    }

    #[test]
    fn default_is_active() {
        assert_eq!(
            DeploymentBucketStatus::default(),
            DeploymentBucketStatus::Active
        );
    }
}
