//! Enemy archetypes and the catalog used to budget enemy rosters.

use super::{Character, Placement};
use crate::error::CombatError;

/// Immutable enemy archetype with base stats and a procurement cost.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Template {
    /// Catalog key, e.g. `"swarmer"`.
    pub key: String,
    /// Display name given to instantiated enemies.
    pub name: String,
    pub health: u32,
    pub attack: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub placement: Placement,
    /// Procurement cost, at least 1.
    pub cost: u32,
}

impl Template {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        health: u32,
        attack: u32,
        placement: Placement,
        cost: u32,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            health,
            attack,
            placement,
            cost,
        }
    }

    /// Build a fresh enemy character from this archetype.
    pub fn instantiate(&self) -> Character {
        Character::from_template(self)
    }
}

/// Validated, ordered set of templates.
///
/// Draw order during roster generation follows catalog order, so two catalogs
/// with the same templates in different orders produce different rosters for
/// the same seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    /// Validate and wrap a list of templates.
    ///
    /// Rejects zero costs (they would let generation run forever), zero stats,
    /// and duplicate keys.
    pub fn new(templates: Vec<Template>) -> Result<Self, CombatError> {
        for (idx, template) in templates.iter().enumerate() {
            if template.cost == 0 {
                return Err(CombatError::ZeroCostTemplate {
                    key: template.key.clone(),
                });
            }
            if template.health == 0 || template.attack == 0 {
                return Err(CombatError::ZeroStatTemplate {
                    key: template.key.clone(),
                });
            }
            if templates[..idx].iter().any(|t| t.key == template.key) {
                return Err(CombatError::DuplicateTemplate {
                    key: template.key.clone(),
                });
            }
        }

        Ok(Self { templates })
    }

    /// The built-in mech archetypes.
    pub fn standard() -> Self {
        Self {
            templates: vec![
                Template::new("swarmer", "Swarmer", 3, 3, Placement::Back, 1),
                Template::new("heavy", "Heavy", 12, 12, Placement::Front, 4),
                Template::new("skirmisher", "Skirmisher", 3, 12, Placement::Back, 2),
                Template::new("tank", "Tank", 12, 3, Placement::Front, 2),
            ],
        }
    }

    pub fn get(&self, key: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.key == key)
    }

    /// Instantiate the template registered under `key`.
    pub fn instantiate(&self, key: &str) -> Result<Character, CombatError> {
        self.get(key)
            .map(Template::instantiate)
            .ok_or_else(|| CombatError::UnknownTemplate {
                key: key.to_string(),
            })
    }

    /// Lowest cost in the catalog, `None` when empty.
    pub fn cheapest_cost(&self) -> Option<u32> {
        self.templates.iter().map(|t| t.cost).min()
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
