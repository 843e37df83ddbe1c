//! Unified status value over the three component lifecycle vocabularies.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::display::{StatusDisplay, display_config};
use crate::error::{LifecycleError, LifecycleResult};
use crate::registry::Classification;
use crate::status::{ComponentType, DatablockStatus, FeatureStatus, PipelineStatus};

/// Unified status enum that can represent any component's lifecycle status.
///
/// This wraps the per-kind status types behind a single interface for generic
/// component handling (deployment bucket listings, change summaries) while
/// keeping the three vocabularies distinct. Serializes as a tagged pair:
/// `{"kind": "pipeline", "status": "draft"}`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(tag = "kind", content = "status", rename_all = "snake_case")]
pub enum ComponentStatus {
    /// Datablock lifecycle status
    Datablock(DatablockStatus),
    /// Pipeline lifecycle status
    Pipeline(PipelineStatus),
    /// Feature lifecycle status
    Feature(FeatureStatus),
}

impl ComponentStatus {
    /// Returns the initial status for a newly created component of `kind`.
    pub fn initial(kind: ComponentType) -> Self {
        match kind {
            ComponentType::Datablock => Self::Datablock(DatablockStatus::default()),
            ComponentType::Pipeline => Self::Pipeline(PipelineStatus::default()),
            ComponentType::Feature => Self::Feature(FeatureStatus::default()),
        }
    }

    /// Parses a raw status literal against the vocabulary of `kind`.
    ///
    /// This is the strict counterpart to [`classify`]: where the registry
    /// silently classifies unknown literals as members of no set, this
    /// surfaces them as [`LifecycleError::UnknownStatus`].
    ///
    /// [`classify`]: crate::classify
    pub fn parse(kind: ComponentType, status: &str) -> LifecycleResult<Self> {
        let unknown = || LifecycleError::UnknownStatus {
            kind,
            value: status.to_owned(),
        };

        match kind {
            ComponentType::Datablock => status
                .parse()
                .map(Self::Datablock)
                .map_err(|_: strum::ParseError| unknown()),
            ComponentType::Pipeline => status
                .parse()
                .map(Self::Pipeline)
                .map_err(|_: strum::ParseError| unknown()),
            ComponentType::Feature => status
                .parse()
                .map(Self::Feature)
                .map_err(|_: strum::ParseError| unknown()),
        }
    }

    /// Returns the component kind this status belongs to.
    #[inline]
    pub fn kind(self) -> ComponentType {
        match self {
            Self::Datablock(_) => ComponentType::Datablock,
            Self::Pipeline(_) => ComponentType::Pipeline,
            Self::Feature(_) => ComponentType::Feature,
        }
    }

    /// Returns the wire literal of the wrapped status.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Datablock(status) => status.into(),
            Self::Pipeline(status) => status.into(),
            Self::Feature(status) => status.into(),
        }
    }

    /// Returns whether the component appears in UI listings.
    #[inline]
    pub fn is_visible(self) -> bool {
        match self {
            Self::Datablock(status) => status.is_visible(),
            Self::Pipeline(status) => status.is_visible(),
            Self::Feature(status) => status.is_visible(),
        }
    }

    /// Returns whether the component's change is staged in a deployment
    /// bucket.
    #[inline]
    pub fn is_in_bucket(self) -> bool {
        match self {
            Self::Datablock(status) => status.is_in_bucket(),
            Self::Pipeline(status) => status.is_in_bucket(),
            Self::Feature(status) => status.is_in_bucket(),
        }
    }

    /// Returns whether user edits are permitted.
    #[inline]
    pub fn is_editable(self) -> bool {
        match self {
            Self::Datablock(status) => status.is_editable(),
            Self::Pipeline(status) => status.is_editable(),
            Self::Feature(status) => status.is_editable(),
        }
    }

    /// Returns whether the component is still being configured.
    #[inline]
    pub fn is_active(self) -> bool {
        match self {
            Self::Datablock(status) => status.is_active(),
            Self::Pipeline(status) => status.is_active(),
            Self::Feature(status) => status.is_active(),
        }
    }

    /// Returns the full classification of the wrapped status.
    pub fn classification(self) -> Classification {
        Classification {
            visible: self.is_visible(),
            editable: self.is_editable(),
            in_bucket: self.is_in_bucket(),
            active: self.is_active(),
        }
    }

    /// Returns the badge display entry for the wrapped status.
    #[inline]
    pub fn display(self) -> StatusDisplay {
        display_config(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_status_per_kind() {
        assert_eq!(
            ComponentStatus::initial(ComponentType::Datablock).as_str(),
            "not_configured"
        );
        assert_eq!(
            ComponentStatus::initial(ComponentType::Pipeline).as_str(),
            "draft"
        );
        assert_eq!(
            ComponentStatus::initial(ComponentType::Feature).as_str(),
            "draft"
        );
    }

    #[test]
    fn parse_respects_the_kind_vocabulary() {
        let status = ComponentStatus::parse(ComponentType::Datablock, "pending_deletion")
            .expect("known datablock status");
        assert_eq!(
            status,
            ComponentStatus::Datablock(DatablockStatus::PendingDeletion)
        );

        // "draft" belongs to pipelines and features, not datablocks.
        let err = ComponentStatus::parse(ComponentType::Datablock, "draft")
            .expect_err("draft is not a datablock status");
        assert_eq!(
            err,
            LifecycleError::UnknownStatus {
                kind: ComponentType::Datablock,
                value: "draft".to_owned(),
            }
        );
    }

    #[test]
    fn classification_agrees_with_delegating_predicates() {
        let status = ComponentStatus::Pipeline(PipelineStatus::PendingUpdate);
        let classes = status.classification();
        assert!(classes.visible);
        assert!(classes.editable);
        assert!(classes.in_bucket);
        assert!(!classes.active);
    }

    #[test]
    fn serde_shape_is_tagged_kind_and_status() {
        let status = ComponentStatus::Feature(FeatureStatus::ReadyForDeployment);
        let json = serde_json::to_value(status).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"kind": "feature", "status": "ready_for_deployment"})
        );

        let back: ComponentStatus = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, status);
    }

    #[test]
    fn error_message_names_kind_and_literal() {
        let err = ComponentStatus::parse(ComponentType::Feature, "bogus")
            .expect_err("bogus is not a feature status");
        assert_eq!(err.to_string(), "unknown feature status: 'bogus'");
    }
}
