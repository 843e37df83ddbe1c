//! Component type enumeration discriminating status vocabularies.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Discriminates which status vocabulary applies to a component reference.
///
/// Datablocks, pipelines, and features move through the same staged-deployment
/// lifecycle but each declares its own status vocabulary; generic code that
/// receives a raw status string needs this tag to interpret it.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ComponentType {
    /// Data source / field-mapping unit
    Datablock,

    /// Data transformation pipeline
    Pipeline,

    /// ML feature definition
    Feature,
}

impl ComponentType {
    /// Returns the wire literals of this kind's status vocabulary.
    ///
    /// Useful for diffing the client-side vocabulary against a backend schema
    /// to catch drift.
    pub fn known_statuses(self) -> &'static [&'static str] {
        match self {
            ComponentType::Datablock => &[
                "not_configured",
                "configured",
                "ready_for_deployment",
                "deployed",
                "pending_update",
                "pending_deletion",
                "deprecated",
                "discarded",
                "error",
            ],
            ComponentType::Pipeline | ComponentType::Feature => &[
                "draft",
                "configured",
                "ready_for_deployment",
                "deployed",
                "pending_update",
                "pending_deletion",
                "deprecated",
                "discarded",
                "error",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::status::{DatablockStatus, FeatureStatus, PipelineStatus};

    #[test]
    fn known_statuses_match_the_typed_vocabularies() {
        let literals = ComponentType::Datablock.known_statuses();
        assert_eq!(literals.len(), DatablockStatus::iter().count());
        for (literal, status) in literals.iter().zip(DatablockStatus::iter()) {
            assert_eq!(*literal, status.as_ref());
        }

        let literals = ComponentType::Pipeline.known_statuses();
        assert_eq!(literals.len(), PipelineStatus::iter().count());
        for (literal, status) in literals.iter().zip(PipelineStatus::iter()) {
            assert_eq!(*literal, status.as_ref());
        }

        let literals = ComponentType::Feature.known_statuses();
        assert_eq!(literals.len(), FeatureStatus::iter().count());
        for (literal, status) in literals.iter().zip(FeatureStatus::iter()) {
            assert_eq!(*literal, status.as_ref());
        }
    }

    #[test]
    fn wire_names_are_snake_case() {
        assert_eq!(ComponentType::Datablock.as_ref(), "datablock");
        assert_eq!(
            "pipeline".parse::<ComponentType>(),
            Ok(ComponentType::Pipeline)
        );
    }
}
