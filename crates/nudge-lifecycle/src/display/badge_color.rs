//! Badge color palette for status rendering.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Closed palette of badge colors used by status display entries.
///
/// Consumers attach the [`bg_class`]/[`text_class`] pair to a badge element;
/// the pairs are fixed here so an entry cannot carry a mismatched background
/// and text shade.
///
/// [`bg_class`]: BadgeColor::bg_class
/// [`text_class`]: BadgeColor::text_class
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BadgeColor {
    /// Neutral; also the fallback for unknown statuses
    #[default]
    Slate,
    /// Informational, in-progress shade
    Blue,
    /// Open / collecting shade
    Sky,
    /// Staged, awaiting action shade
    Amber,
    /// Staged destructive-change shade
    Orange,
    /// Success, live shade
    Green,
    /// Failure shade
    Red,
    /// Conflict shade
    Rose,
    /// Retired, reverted shade
    Purple,
}

impl BadgeColor {
    /// Returns the background utility class for this color.
    pub fn bg_class(self) -> &'static str {
        match self {
            BadgeColor::Slate => "bg-slate-100",
            BadgeColor::Blue => "bg-blue-100",
            BadgeColor::Sky => "bg-sky-100",
            BadgeColor::Amber => "bg-amber-100",
            BadgeColor::Orange => "bg-orange-100",
            BadgeColor::Green => "bg-green-100",
            BadgeColor::Red => "bg-red-100",
            BadgeColor::Rose => "bg-rose-100",
            BadgeColor::Purple => "bg-purple-100",
        }
    }

    /// Returns the text utility class for this color.
    pub fn text_class(self) -> &'static str {
        match self {
            BadgeColor::Slate => "text-slate-800",
            BadgeColor::Blue => "text-blue-800",
            BadgeColor::Sky => "text-sky-800",
            BadgeColor::Amber => "text-amber-800",
            BadgeColor::Orange => "text-orange-800",
            BadgeColor::Green => "text-green-800",
            BadgeColor::Red => "text-red-800",
            BadgeColor::Rose => "text-rose-800",
            BadgeColor::Purple => "text-purple-800",
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn class_pairs_share_the_color_name() {
        for color in BadgeColor::iter() {
            let bg = color.bg_class();
            let text = color.text_class();
            let name = color.as_ref();
            assert_eq!(bg, format!("bg-{name}-100"));
            assert_eq!(text, format!("text-{name}-800"));
        }
    }

    #[test]
    fn default_is_slate() {
        assert_eq!(BadgeColor::default(), BadgeColor::Slate);
    }
}
