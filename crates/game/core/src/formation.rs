//! Per-round role assignments for the player side.

use crate::character::{Character, Role};

/// One role per standing player, in roster order.
///
/// Fallen players get no entry: the first role belongs to the first player
/// that still has health, and so on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Formation {
    roles: Vec<Role>,
}

impl Formation {
    pub fn new(roles: Vec<Role>) -> Self {
        Self { roles }
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Every formation the given characters can field: the cartesian product of
    /// their role affinities, first character varying slowest.
    ///
    /// A character with no roles makes the product empty.
    pub fn enumerate<'a, I>(characters: I) -> Vec<Formation>
    where
        I: IntoIterator<Item = &'a Character>,
    {
        let mut formations = vec![Vec::new()];

        for character in characters {
            formations = formations
                .into_iter()
                .flat_map(|prefix: Vec<Role>| {
                    character.roles.iter().map(move |&role| {
                        let mut next = prefix.clone();
                        next.push(role);
                        next
                    })
                })
                .collect();
        }

        formations.into_iter().map(Formation::new).collect()
    }
}

impl From<Vec<Role>> for Formation {
    fn from(roles: Vec<Role>) -> Self {
        Self::new(roles)
    }
}

impl core::fmt::Display for Formation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (idx, role) in self.roles.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{role}")?;
        }
        Ok(())
    }
}
