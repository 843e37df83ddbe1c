//! Fail-safe classification registry over raw status strings.
//!
//! Components arrive from the backend as plain `(kind, status)` string pairs.
//! The functions here classify those pairs without ever failing: a status
//! literal outside the kind's vocabulary is simply a member of no derived set.
//! Callers that want unknown literals surfaced as errors use
//! [`ComponentStatus::parse`] instead.
//!
//! [`ComponentStatus::parse`]: crate::status::ComponentStatus::parse

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET;
use crate::status::{ComponentStatus, ComponentType};

/// Derived-set memberships of one component status.
///
/// The sets are neither mutually exclusive nor exhaustive: a `deployed`
/// component is editable but neither active nor in-bucket, and terminal
/// statuses belong to no set at all. `Default` is the all-false
/// classification, which is also what unrecognized status literals map to.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Classification {
    /// Status appears in UI listings
    pub visible: bool,
    /// User edits are permitted
    pub editable: bool,
    /// Change is staged in a deployment bucket
    pub in_bucket: bool,
    /// Component is being configured, not yet staged or deployed
    pub active: bool,
}

/// Classifies a raw status literal against the vocabulary of `kind`.
///
/// Total over all strings and never panics. Unrecognized literals yield the
/// all-false [`Classification`] (fail-safe closed: an unknown status grants
/// no visibility and no permissions).
pub fn classify(kind: ComponentType, status: &str) -> Classification {
    match ComponentStatus::parse(kind, status) {
        Ok(status) => status.classification(),
        Err(_) => {
            tracing::debug!(
                target: TRACING_TARGET,
                %kind,
                status,
                "unrecognized status literal, classifying as member of no set"
            );
            Classification::default()
        }
    }
}

/// Returns whether the raw status appears in UI listings.
///
/// False for unrecognized literals.
#[inline]
pub fn is_visible(kind: ComponentType, status: &str) -> bool {
    classify(kind, status).visible
}

/// Returns whether the raw status permits user edits.
///
/// False for unrecognized literals.
#[inline]
pub fn is_editable(kind: ComponentType, status: &str) -> bool {
    classify(kind, status).editable
}

/// Returns whether the raw status means the change is staged in a deployment
/// bucket.
///
/// False for unrecognized literals.
#[inline]
pub fn is_in_bucket(kind: ComponentType, status: &str) -> bool {
    classify(kind, status).in_bucket
}

/// Returns whether the raw status means the component is still being
/// configured.
///
/// False for unrecognized literals.
#[inline]
pub fn is_active(kind: ComponentType, status: &str) -> bool {
    classify(kind, status).active
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn unrecognized_literals_classify_as_member_of_no_set() {
        for kind in ComponentType::iter() {
            let classes = classify(kind, "not_a_real_status");
            assert_eq!(classes, Classification::default(), "{kind}");
            assert!(!is_visible(kind, "not_a_real_status"));
            assert!(!is_editable(kind, "not_a_real_status"));
            assert!(!is_in_bucket(kind, "not_a_real_status"));
            assert!(!is_active(kind, "not_a_real_status"));
        }
    }

    #[test]
    fn vocabularies_do_not_cross_kinds() {
        // "draft" is a pipeline/feature literal; for datablocks it must
        // classify like any other unknown string.
        assert_eq!(
            classify(ComponentType::Datablock, "draft"),
            Classification::default()
        );
        assert!(is_active(ComponentType::Pipeline, "draft"));
        assert!(is_active(ComponentType::Feature, "draft"));
    }

    #[test]
    fn deployed_membership_scenario() {
        for kind in ComponentType::iter() {
            assert!(is_editable(kind, "deployed"), "{kind}");
            assert!(!is_active(kind, "deployed"), "{kind}");
            assert!(!is_in_bucket(kind, "deployed"), "{kind}");
            assert!(is_visible(kind, "deployed"), "{kind}");
        }
    }

    #[test]
    fn pending_deletion_is_visible_and_in_bucket() {
        for kind in ComponentType::iter() {
            assert!(is_visible(kind, "pending_deletion"), "{kind}");
            assert!(is_in_bucket(kind, "pending_deletion"), "{kind}");
        }
    }

    #[test]
    fn classify_is_idempotent() {
        for kind in ComponentType::iter() {
            for status in kind.known_statuses() {
                assert_eq!(classify(kind, status), classify(kind, status));
            }
        }
        assert_eq!(
            classify(ComponentType::Datablock, "bogus"),
            classify(ComponentType::Datablock, "bogus")
        );
    }

    #[test]
    fn known_literals_match_typed_classifications() {
        for kind in ComponentType::iter() {
            for status in kind.known_statuses() {
                let raw = classify(kind, status);
                let typed = ComponentStatus::parse(kind, status)
                    .expect("known literal")
                    .classification();
                assert_eq!(raw, typed, "{kind}/{status}");
            }
        }
    }
}
