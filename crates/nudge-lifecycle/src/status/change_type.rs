//! Change type enumeration tagging staged component changes.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Defines the kind of change a staged component carries into a deployment
/// bucket.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ChangeType {
    /// Component is created by this deployment
    Create,

    /// Component's configuration is updated by this deployment
    Update,

    /// Component is removed by this deployment
    Delete,
}

impl ChangeType {
    /// Returns whether applying this change removes the component.
    #[inline]
    pub fn is_destructive(self) -> bool {
        matches!(self, ChangeType::Delete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_delete_is_destructive() {
        assert!(ChangeType::Delete.is_destructive());
        assert!(!ChangeType::Create.is_destructive());
        assert!(!ChangeType::Update.is_destructive());
    }

    #[test]
    fn wire_names_are_snake_case() {
        assert_eq!(ChangeType::Create.as_ref(), "create");
        assert_eq!("delete".parse::<ChangeType>(), Ok(ChangeType::Delete));
    }
}
