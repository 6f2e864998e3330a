//! Resource domain model.
//!
//! A [`Resource`] is one static content item shown as a card on the listing page.
//! Resources are created once from a catalog and never mutated afterwards; every
//! derived view borrows them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of content a resource points at.
///
/// Doubles as the key set of the `documentType` filter group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Link,
    Video,
    Doc,
    Pdf,
}

impl ResourceType {
    /// All types in filter-panel order.
    pub const ALL: [Self; 4] = [Self::Doc, Self::Link, Self::Pdf, Self::Video];

    /// Wire name, also used as the filter key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Link => "link",
            Self::Video => "video",
            Self::Doc => "doc",
            Self::Pdf => "pdf",
        }
    }

    /// Human-readable label for checkboxes and card icons.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Link => "Link",
            Self::Video => "Video",
            Self::Doc => "DOC",
            Self::Pdf => "PDF",
        }
    }

    /// Parses a wire name. Matching is exact.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == key)
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the five fixed card colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Swatch {
    #[serde(rename = "#E00027")]
    Red,
    #[serde(rename = "#17E4A1")]
    Green,
    #[serde(rename = "#FF603E")]
    Orange,
    #[serde(rename = "#FFE500")]
    Yellow,
    #[serde(rename = "#56CCF2")]
    Blue,
}

impl Swatch {
    /// Hex color string, identical to the serialized form.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Red => "#E00027",
            Self::Green => "#17E4A1",
            Self::Orange => "#FF603E",
            Self::Yellow => "#FFE500",
            Self::Blue => "#56CCF2",
        }
    }
}

/// A static content item (link, video, doc or pdf) shown as a card.
///
/// # Examples
///
/// ```
/// use resource_hub::domain::{Resource, ResourceType, Swatch};
///
/// let resource = Resource::new("1", "Guide A", "Sample Topic", ResourceType::Link, Swatch::Red)
///     .with_category("Secure Base");
/// assert_eq!(resource.category.as_deref(), Some("Secure Base"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub color: Swatch,
}

impl Resource {
    /// Creates an uncategorized resource.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        topic: impl Into<String>,
        resource_type: ResourceType,
        color: Swatch,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            topic: topic.into(),
            category: None,
            resource_type,
            color,
        }
    }

    /// Returns the resource with its category label set.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_the_catalog_shape() {
        let json = r##"{
            "id": "4",
            "title": "The ultimate guide to Workplace Chat",
            "topic": "Sample Topic",
            "category": "Wellbeing",
            "type": "video",
            "color": "#FF603E"
        }"##;

        let resource: Resource = serde_json::from_str(json).unwrap();
        assert_eq!(resource.resource_type, ResourceType::Video);
        assert_eq!(resource.color, Swatch::Orange);
        assert_eq!(resource.category.as_deref(), Some("Wellbeing"));
    }

    #[test]
    fn missing_category_is_none() {
        let json = r##"{"id":"9","title":"t","topic":"x","type":"pdf","color":"#56CCF2"}"##;
        let resource: Resource = serde_json::from_str(json).unwrap();
        assert!(resource.category.is_none());
    }

    #[test]
    fn rejects_unknown_swatch() {
        let json = r##"{"id":"9","title":"t","topic":"x","type":"pdf","color":"#000000"}"##;
        assert!(serde_json::from_str::<Resource>(json).is_err());
    }

    #[test]
    fn type_keys_parse_exactly() {
        assert_eq!(ResourceType::from_key("pdf"), Some(ResourceType::Pdf));
        assert_eq!(ResourceType::from_key("PDF"), None);
        assert_eq!(ResourceType::Doc.label(), "DOC");
    }
}
