//! Common error infrastructure for mech-core.
//!
//! The round resolver itself never fails: it trusts its inputs. Errors here
//! are raised at the boundary the host calls before resolution (formation
//! validation, target selection) and while building template catalogs.

use crate::character::Role;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: role not affiliated, target index out of range
    Validation,

    /// Fatal error - content is unusable, cannot continue.
    ///
    /// Examples: zero-cost template, duplicate template key
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the host can fix the input and try again.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation)
    }
}

/// Common trait for all mech-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors surfaced by encounter setup and the host-facing validation helpers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    #[error("encounter is over; no further rounds can be resolved")]
    EncounterOver,

    #[error("formation has {actual} roles but {expected} players are still standing")]
    FormationLength { expected: usize, actual: usize },

    #[error("{combatant} is not affiliated with the {role} role")]
    RoleNotAffiliated { combatant: String, role: Role },

    #[error("player index {index} is out of range (roster has {len} players)")]
    PlayerOutOfRange { index: usize, len: usize },

    #[error("enemy index {index} is out of range (roster has {len} enemies)")]
    EnemyOutOfRange { index: usize, len: usize },

    #[error("template '{key}' must cost at least 1 point")]
    ZeroCostTemplate { key: String },

    #[error("template '{key}' must have positive health and attack")]
    ZeroStatTemplate { key: String },

    #[error("template '{key}' is defined more than once")]
    DuplicateTemplate { key: String },

    #[error("unknown template '{key}'")]
    UnknownTemplate { key: String },
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EncounterOver
            | Self::FormationLength { .. }
            | Self::RoleNotAffiliated { .. }
            | Self::PlayerOutOfRange { .. }
            | Self::EnemyOutOfRange { .. }
            | Self::UnknownTemplate { .. } => ErrorSeverity::Validation,
            Self::ZeroCostTemplate { .. }
            | Self::ZeroStatTemplate { .. }
            | Self::DuplicateTemplate { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EncounterOver => "COMBAT_ENCOUNTER_OVER",
            Self::FormationLength { .. } => "COMBAT_FORMATION_LENGTH",
            Self::RoleNotAffiliated { .. } => "COMBAT_ROLE_NOT_AFFILIATED",
            Self::PlayerOutOfRange { .. } => "COMBAT_PLAYER_OUT_OF_RANGE",
            Self::EnemyOutOfRange { .. } => "COMBAT_ENEMY_OUT_OF_RANGE",
            Self::ZeroCostTemplate { .. } => "COMBAT_ZERO_COST_TEMPLATE",
            Self::ZeroStatTemplate { .. } => "COMBAT_ZERO_STAT_TEMPLATE",
            Self::DuplicateTemplate { .. } => "COMBAT_DUPLICATE_TEMPLATE",
            Self::UnknownTemplate { .. } => "COMBAT_UNKNOWN_TEMPLATE",
        }
    }
}
