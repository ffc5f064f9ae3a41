//! Round results: one line per applied effect.

use super::damage::EffectKind;
use super::encounter::EncounterStatus;

/// One applied effect, rendered as a combat log line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionLine {
    pub actor: String,
    pub target: String,
    pub kind: EffectKind,
    /// Nominal amount dealt or healed, before clamping to the target's bounds.
    pub amount: u32,
}

impl core::fmt::Display for ActionLine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let verb = match self.kind {
            EffectKind::Damage => "deals",
            EffectKind::Heal => "heals",
        };
        write!(
            f,
            "{} {} {} points of damage to {}",
            self.actor, verb, self.amount, self.target
        )
    }
}

/// Everything that happened in one resolved round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundReport {
    /// 1-based round number within the encounter.
    pub round: u32,
    /// Effects in execution order. Actors that had fallen before their turn
    /// contribute nothing.
    pub lines: Vec<ActionLine>,
    /// Encounter status after the round.
    pub status: EncounterStatus,
}

impl RoundReport {
    /// Log lines as display strings, in execution order.
    pub fn messages(&self) -> Vec<String> {
        self.lines.iter().map(ToString::to_string).collect()
    }

    pub fn is_final(&self) -> bool {
        self.status == EncounterStatus::Over
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_damage_and_heal_phrasing() {
        let hit = ActionLine {
            actor: "Alpha".into(),
            target: "(0) Tank".into(),
            kind: EffectKind::Damage,
            amount: 6,
        };
        assert_eq!(hit.to_string(), "Alpha deals 6 points of damage to (0) Tank");

        let heal = ActionLine {
            actor: "Beta".into(),
            target: "Alpha".into(),
            kind: EffectKind::Heal,
            amount: 2,
        };
        assert_eq!(heal.to_string(), "Beta heals 2 points of damage to Alpha");
    }
}
