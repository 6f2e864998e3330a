//! Compiled-in sample resources.

use super::ResourceSource;
use crate::domain::error::Result;
use crate::domain::{Resource, ResourceType, Swatch};

const TOPIC: &str = "Sample Topic";
const SECURE_BASE: &str = "Secure Base";
const WELLBEING: &str = "Wellbeing";

/// The six sample resources shown when no catalog file is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl ResourceSource for BuiltinCatalog {
    fn load(&self) -> Result<Vec<Resource>> {
        let chat = "The ultimate guide to Workplace Chat";

        Ok(vec![
            Resource::new("1", chat, TOPIC, ResourceType::Link, Swatch::Red).with_category(SECURE_BASE),
            Resource::new("2", chat, TOPIC, ResourceType::Video, Swatch::Green).with_category(SECURE_BASE),
            Resource::new("3", chat, TOPIC, ResourceType::Link, Swatch::Red).with_category(SECURE_BASE),
            Resource::new("4", chat, TOPIC, ResourceType::Video, Swatch::Orange).with_category(WELLBEING),
            Resource::new("5", "The ultimate guide to Workplace chat", TOPIC, ResourceType::Pdf, Swatch::Yellow)
                .with_category(SECURE_BASE),
            Resource::new(
                "6",
                "Taking stock of mental health in your workplace",
                TOPIC,
                ResourceType::Pdf,
                Swatch::Blue,
            )
            .with_category(SECURE_BASE),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::validate;

    #[test]
    fn builtin_catalog_is_valid() {
        let resources = BuiltinCatalog.load().unwrap();
        assert_eq!(resources.len(), 6);
        validate(&resources).unwrap();
    }

    #[test]
    fn exactly_one_wellbeing_resource() {
        let resources = BuiltinCatalog.load().unwrap();
        let wellbeing: Vec<&str> = resources
            .iter()
            .filter(|r| r.category.as_deref() == Some(WELLBEING))
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(wellbeing, ["4"]);
    }
}
