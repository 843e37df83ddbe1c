//! Status display entries and the shared lookup table.

use std::borrow::Cow;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::BadgeColor;
use crate::TRACING_TARGET;

/// Description carried by fallback entries for unrecognized statuses.
const UNKNOWN_DESCRIPTION: &str = "Unknown status";

/// Display metadata for one status badge.
///
/// Known statuses have borrowed, static entries; fallback entries for
/// unrecognized literals own their label. Background and text classes derive
/// from [`color`] via [`bg_color`]/[`text_color`].
///
/// [`color`]: StatusDisplay::color
/// [`bg_color`]: StatusDisplay::bg_color
/// [`text_color`]: StatusDisplay::text_color
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct StatusDisplay {
    /// Human-readable badge label
    pub label: Cow<'static, str>,
    /// Palette color for the badge
    pub color: BadgeColor,
    /// One-line explanation of what the status means
    pub description: Cow<'static, str>,
}

impl StatusDisplay {
    const fn entry(label: &'static str, color: BadgeColor, description: &'static str) -> Self {
        Self {
            label: Cow::Borrowed(label),
            color,
            description: Cow::Borrowed(description),
        }
    }

    /// Builds the neutral fallback entry for an unrecognized status literal.
    ///
    /// The raw literal becomes the label so the UI still shows something
    /// identifiable.
    pub fn fallback(status: &str) -> Self {
        Self {
            label: Cow::Owned(status.to_owned()),
            color: BadgeColor::Slate,
            description: Cow::Borrowed(UNKNOWN_DESCRIPTION),
        }
    }

    /// Returns whether this entry is the fallback for an unrecognized status.
    pub fn is_fallback(&self) -> bool {
        self.description == UNKNOWN_DESCRIPTION
    }

    /// Returns the background utility class for the badge.
    #[inline]
    pub fn bg_color(&self) -> &'static str {
        self.color.bg_class()
    }

    /// Returns the text utility class for the badge.
    #[inline]
    pub fn text_color(&self) -> &'static str {
        self.color.text_class()
    }
}

/// Returns the display entry for a raw status literal.
///
/// The table is flat and shared across entity kinds; literals that appear in
/// several vocabularies (`configured`, `deployed`, `discarded`) resolve to a
/// single entry. Total over all strings: unknown literals return
/// [`StatusDisplay::fallback`] and never an error.
pub fn display_config(status: &str) -> StatusDisplay {
    match status {
        // Component lifecycle
        "not_configured" => StatusDisplay::entry(
            "Not configured",
            BadgeColor::Slate,
            "Entity exists but has not been configured yet",
        ),
        "draft" => StatusDisplay::entry(
            "Draft",
            BadgeColor::Slate,
            "Entity is being drafted and has not been configured yet",
        ),
        "configured" => StatusDisplay::entry(
            "Configured",
            BadgeColor::Blue,
            "Entity is configured but not staged for deployment",
        ),
        "ready_for_deployment" => StatusDisplay::entry(
            "Ready for deployment",
            BadgeColor::Amber,
            "Change is staged in the deployment bucket",
        ),
        "deployed" => StatusDisplay::entry("Deployed", BadgeColor::Green, "Entity is live"),
        "pending_update" => StatusDisplay::entry(
            "Pending update",
            BadgeColor::Amber,
            "Edit is staged and awaiting the next deployment",
        ),
        "pending_deletion" => StatusDisplay::entry(
            "Pending deletion",
            BadgeColor::Orange,
            "Deletion is staged and awaiting the next deployment",
        ),
        "deprecated" => StatusDisplay::entry(
            "Deprecated",
            BadgeColor::Purple,
            "Entity was superseded and retired",
        ),
        "discarded" => StatusDisplay::entry(
            "Discarded",
            BadgeColor::Slate,
            "Entity was discarded without deploying",
        ),
        "error" => StatusDisplay::entry("Error", BadgeColor::Red, "Last deployment failed"),

        // Deployment buckets
        "active" => StatusDisplay::entry(
            "Active",
            BadgeColor::Sky,
            "Bucket is open and collecting staged changes",
        ),
        "deploying" => {
            StatusDisplay::entry("Deploying", BadgeColor::Blue, "Deployment is in flight")
        }
        "conflict" => StatusDisplay::entry(
            "Conflict",
            BadgeColor::Rose,
            "Staged changes conflict with another deployment",
        ),

        // Deployment runs
        "pending" => StatusDisplay::entry("Pending", BadgeColor::Slate, "Run is waiting to start"),
        "in_progress" => {
            StatusDisplay::entry("In progress", BadgeColor::Blue, "Run is applying changes")
        }
        "success" => StatusDisplay::entry("Success", BadgeColor::Green, "All changes applied"),
        "partial_success" => StatusDisplay::entry(
            "Partial success",
            BadgeColor::Amber,
            "Some changes applied, some failed",
        ),
        "failed" => StatusDisplay::entry("Failed", BadgeColor::Red, "Run failed, no changes applied"),
        "rolled_back" => StatusDisplay::entry(
            "Rolled back",
            BadgeColor::Purple,
            "Changes were reverted after deployment",
        ),

        unknown => {
            tracing::debug!(
                target: TRACING_TARGET,
                status = unknown,
                "no display entry for status literal, using fallback"
            );
            StatusDisplay::fallback(unknown)
        }
    }
}
