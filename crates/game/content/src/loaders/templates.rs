//! Enemy template catalog loader.

use std::path::Path;

use mech_core::{Template, TemplateCatalog};

use crate::loaders::{LoadResult, read_file};

/// Loader for enemy template catalogs from RON files.
pub struct TemplateLoader;

impl TemplateLoader {
    /// Load a template catalog from a RON file.
    ///
    /// RON format: `Vec<Template>`, in draw order.
    pub fn load(path: &Path) -> LoadResult<TemplateCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a template catalog from a RON string and validate it.
    pub fn parse(content: &str) -> LoadResult<TemplateCatalog> {
        let templates: Vec<Template> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse template catalog RON: {}", e))?;

        let catalog = TemplateCatalog::new(templates)
            .map_err(|e| anyhow::anyhow!("Invalid template catalog: {}", e))?;

        tracing::debug!(templates = catalog.len(), "template catalog loaded");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mech_core::Placement;

    #[test]
    fn parses_catalog_in_order() {
        let catalog = TemplateLoader::parse(
            r#"[
                (key: "drone", name: "Drone", health: 2, attack: 2, placement: Back, cost: 1),
                (key: "walker", name: "Walker", health: 8, attack: 6, cost: 3),
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.templates()[0].key, "drone");
        assert_eq!(catalog.get("walker").unwrap().placement, Placement::Front);
    }

    #[test]
    fn rejects_invalid_catalog() {
        let err = TemplateLoader::parse(
            r#"[(key: "free", name: "Free", health: 1, attack: 1, cost: 0)]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("free"));
    }
}
