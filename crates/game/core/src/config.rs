/// Combat tuning constants and runtime-tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Enemy procurement points granted per player combatant.
    pub budget_per_player: u32,

    /// Points split between health and attack for randomly procured characters.
    pub random_stat_points: u32,

    /// Number of distinct roles a randomly procured character is affiliated with.
    pub random_role_count: usize,
}

impl CombatConfig {
    // ===== compile-time constants =====
    /// Divisor applied to attack for single-target damage.
    pub const SINGLE_DIVISOR: u32 = 2;
    /// Divisor applied to attack for area damage and healing.
    pub const SPREAD_DIVISOR: u32 = 6;
    /// Every action deals or heals at least this much.
    pub const MINIMUM_EFFECT: u32 = 1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BUDGET_PER_PLAYER: u32 = 4;
    pub const DEFAULT_RANDOM_STAT_POINTS: u32 = 24;
    pub const DEFAULT_RANDOM_ROLE_COUNT: usize = 2;

    pub fn new() -> Self {
        Self {
            budget_per_player: Self::DEFAULT_BUDGET_PER_PLAYER,
            random_stat_points: Self::DEFAULT_RANDOM_STAT_POINTS,
            random_role_count: Self::DEFAULT_RANDOM_ROLE_COUNT,
        }
    }

    /// Total enemy procurement budget for an encounter with `player_count` players.
    pub fn enemy_budget(&self, player_count: usize) -> u32 {
        u32::try_from(player_count)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.budget_per_player)
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
