//! Encounter state machine and round resolution.
//!
//! An [`Encounter`] owns both rosters for the duration of one fight. The host
//! picks a [`Formation`] each round (optionally validating it first with
//! [`Encounter::validate_formation`]) and calls [`Encounter::resolve_round`].
//!
//! # Round Pipeline
//!
//! 1. Snapshot the standing members of both sides
//! 2. Plan one action per standing player (from the formation) and one
//!    `Single` action per enemy, drawing random targets from the snapshot
//! 3. Shuffle all planned actions into a single execution order
//! 4. Execute in order; an actor that has fallen by its turn does nothing
//! 5. Move to [`EncounterStatus::Over`] if either side has no one standing
//!
//! Targets are picked from the snapshot, so an action may still land on a
//! combatant that fell earlier in the same round.

use rand::Rng;
use rand::seq::SliceRandom;

use super::combatant::{Combatant, CombatantId, Side};
use super::damage::{EffectKind, effect_for};
use super::result::{ActionLine, RoundReport};
use crate::character::{Character, Role, TemplateCatalog};
use crate::config::CombatConfig;
use crate::error::CombatError;
use crate::formation::Formation;
use crate::roster::generate_enemy_roster;

/// Lifecycle of an encounter. `Over` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncounterStatus {
    Active,
    Over,
}

/// Which side was depleted once the encounter is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Every enemy fell.
    Victory,
    /// Every player fell.
    Defeat,
    /// Both sides fell in the same round.
    Draw,
}

/// An action planned before the shuffle.
#[derive(Clone, Debug, PartialEq, Eq)]
struct PendingAction {
    actor: CombatantId,
    role: Role,
    targets: Vec<CombatantId>,
}

/// One fight between the player roster and a generated enemy roster.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "EncounterRecord"))]
pub struct Encounter {
    players: Vec<Combatant>,
    enemies: Vec<Combatant>,
    status: EncounterStatus,
    rounds: u32,
}

impl Encounter {
    /// Start an encounter with everyone at full health.
    pub fn new(players: &[Character], enemies: Vec<Character>) -> Self {
        Self::from_combatants(
            players.iter().cloned().map(Combatant::new).collect(),
            enemies.into_iter().map(Combatant::new).collect(),
        )
    }

    /// Start an encounter against an enemy roster generated from `catalog`,
    /// budgeted by the number of players.
    pub fn generate<R: Rng + ?Sized>(
        players: &[Character],
        catalog: &TemplateCatalog,
        config: &CombatConfig,
        rng: &mut R,
    ) -> Self {
        let roster = generate_enemy_roster(players.len(), catalog, config, rng);
        Self::new(players, roster.enemies)
    }

    /// Start an encounter from prepared combatants.
    ///
    /// If either side has no one standing the encounter is over immediately.
    pub fn from_combatants(players: Vec<Combatant>, enemies: Vec<Combatant>) -> Self {
        let mut encounter = Self {
            players,
            enemies,
            status: EncounterStatus::Active,
            rounds: 0,
        };
        encounter.status = encounter.evaluate_status();

        tracing::info!(
            players = encounter.players.len(),
            enemies = encounter.enemies.len(),
            status = %encounter.status,
            "encounter started"
        );

        encounter
    }

    pub fn players(&self) -> &[Combatant] {
        &self.players
    }

    pub fn enemies(&self) -> &[Combatant] {
        &self.enemies
    }

    pub fn status(&self) -> EncounterStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == EncounterStatus::Over
    }

    /// Number of rounds resolved so far.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn living_player_count(&self) -> usize {
        self.players.iter().filter(|c| c.is_alive()).count()
    }

    pub fn living_enemy_count(&self) -> usize {
        self.enemies.iter().filter(|c| c.is_alive()).count()
    }

    /// Standing players in roster order; the formation lines up against these.
    pub fn living_players(&self) -> impl Iterator<Item = &Combatant> {
        self.players.iter().filter(|c| c.is_alive())
    }

    /// Which side was depleted, `None` while the encounter is active.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_over() {
            return None;
        }

        match (self.living_player_count(), self.living_enemy_count()) {
            (0, 0) => Some(Outcome::Draw),
            (0, _) => Some(Outcome::Defeat),
            _ => Some(Outcome::Victory),
        }
    }

    /// Check a formation before resolving a round with it.
    ///
    /// The formation must hold exactly one role per standing player, and each
    /// role must be one that player is affiliated with.
    pub fn validate_formation(&self, formation: &Formation) -> Result<(), CombatError> {
        let expected = self.living_player_count();
        if formation.len() != expected {
            return Err(CombatError::FormationLength {
                expected,
                actual: formation.len(),
            });
        }

        for (player, &role) in self.living_players().zip(formation.roles()) {
            if !player.character().is_affiliated(role) {
                return Err(CombatError::RoleNotAffiliated {
                    combatant: player.name().to_string(),
                    role,
                });
            }
        }

        Ok(())
    }

    /// Aim a player's `Single` attack at a specific enemy for the next round.
    ///
    /// The target may already have fallen; the attack still lands on it.
    pub fn set_target(&mut self, player: usize, enemy: usize) -> Result<(), CombatError> {
        let players = self.players.len();
        let enemies = self.enemies.len();

        if enemy >= enemies {
            return Err(CombatError::EnemyOutOfRange {
                index: enemy,
                len: enemies,
            });
        }
        let combatant = self
            .players
            .get_mut(player)
            .ok_or(CombatError::PlayerOutOfRange {
                index: player,
                len: players,
            })?;

        combatant.set_target(enemy);
        Ok(())
    }

    /// Resolve one round.
    ///
    /// The formation is trusted: pass it through
    /// [`validate_formation`](Self::validate_formation) first if it comes from
    /// user input. Only fails when the encounter is already over, in which
    /// case nothing is mutated.
    pub fn resolve_round<R: Rng + ?Sized>(
        &mut self,
        formation: &Formation,
        rng: &mut R,
    ) -> Result<RoundReport, CombatError> {
        if self.is_over() {
            return Err(CombatError::EncounterOver);
        }

        let mut pending = self.plan_actions(formation, rng);
        pending.shuffle(rng);

        let mut lines = Vec::new();
        for action in &pending {
            self.execute(action, &mut lines);
        }

        for player in &mut self.players {
            player.clear_target();
        }

        self.rounds += 1;
        self.status = self.evaluate_status();

        tracing::debug!(
            round = self.rounds,
            actions = pending.len(),
            lines = lines.len(),
            living_players = self.living_player_count(),
            living_enemies = self.living_enemy_count(),
            "round resolved"
        );
        if let Some(outcome) = self.outcome() {
            tracing::info!(round = self.rounds, %outcome, "encounter over");
        }

        Ok(RoundReport {
            round: self.rounds,
            lines,
            status: self.status,
        })
    }

    /// Build the round's actions from the pre-round snapshot.
    ///
    /// Random draws happen in a fixed order: players' `Single` targets in
    /// roster order, then each enemy's target in roster order.
    fn plan_actions<R: Rng + ?Sized>(
        &mut self,
        formation: &Formation,
        rng: &mut R,
    ) -> Vec<PendingAction> {
        let living_players = standing(&self.players);
        let living_enemies = standing(&self.enemies);

        let mut pending = Vec::with_capacity(living_players.len() + self.enemies.len());

        for (&player, &role) in living_players.iter().zip(formation.roles()) {
            self.players[player].set_role(role);

            let targets = match role {
                Role::Single => match self.players[player].target() {
                    Some(enemy) => vec![CombatantId::enemy(enemy)],
                    None => pick(&living_enemies, rng, CombatantId::enemy),
                },
                Role::AoE => living_enemies
                    .iter()
                    .copied()
                    .map(CombatantId::enemy)
                    .collect(),
                Role::Support => (0..self.players.len()).map(CombatantId::player).collect(),
            };

            pending.push(PendingAction {
                actor: CombatantId::player(player),
                role,
                targets,
            });
        }

        for enemy in 0..self.enemies.len() {
            self.enemies[enemy].set_role(Role::Single);
            pending.push(PendingAction {
                actor: CombatantId::enemy(enemy),
                role: Role::Single,
                targets: pick(&living_players, rng, CombatantId::player),
            });
        }

        pending
    }

    /// Apply one action, appending a line per affected target.
    fn execute(&mut self, action: &PendingAction, lines: &mut Vec<ActionLine>) {
        let actor = self.combatant(action.actor);
        if !actor.is_alive() {
            tracing::trace!(actor = actor.name(), "actor fell before acting");
            return;
        }

        let actor_name = actor.name().to_string();
        let effect = effect_for(action.role, actor.attack());
        let targets = match action.role {
            Role::Single => &action.targets[..action.targets.len().min(1)],
            Role::AoE | Role::Support => &action.targets[..],
        };

        for &target in targets {
            let combatant = self.combatant_mut(target);
            match effect.kind {
                EffectKind::Damage => combatant.take_damage(effect.amount),
                EffectKind::Heal => combatant.heal(effect.amount),
            }

            lines.push(ActionLine {
                actor: actor_name.clone(),
                target: combatant.name().to_string(),
                kind: effect.kind,
                amount: effect.amount,
            });
        }
    }

    fn combatant(&self, id: CombatantId) -> &Combatant {
        match id.side {
            Side::Player => &self.players[id.index],
            Side::Enemy => &self.enemies[id.index],
        }
    }

    fn combatant_mut(&mut self, id: CombatantId) -> &mut Combatant {
        match id.side {
            Side::Player => &mut self.players[id.index],
            Side::Enemy => &mut self.enemies[id.index],
        }
    }

    fn evaluate_status(&self) -> EncounterStatus {
        if self.living_player_count() == 0 || self.living_enemy_count() == 0 {
            EncounterStatus::Over
        } else {
            EncounterStatus::Active
        }
    }
}

/// Wire form of [`Encounter`], checked before it becomes live state.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct EncounterRecord {
    players: Vec<Combatant>,
    enemies: Vec<Combatant>,
    status: EncounterStatus,
    rounds: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<EncounterRecord> for Encounter {
    type Error = CombatError;

    /// Rejects player targets outside the enemy roster. A recorded `Over`
    /// stays over; otherwise status is recomputed from health.
    fn try_from(record: EncounterRecord) -> Result<Self, Self::Error> {
        let enemies = record.enemies.len();
        if let Some(index) = record
            .players
            .iter()
            .filter_map(Combatant::target)
            .find(|&target| target >= enemies)
        {
            return Err(CombatError::EnemyOutOfRange {
                index,
                len: enemies,
            });
        }

        let mut encounter = Self {
            players: record.players,
            enemies: record.enemies,
            status: record.status,
            rounds: record.rounds,
        };
        if encounter.status == EncounterStatus::Active {
            encounter.status = encounter.evaluate_status();
        }
        Ok(encounter)
    }
}

/// Indices of combatants with health left.
fn standing(combatants: &[Combatant]) -> Vec<usize> {
    combatants
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_alive())
        .map(|(idx, _)| idx)
        .collect()
}

/// One uniformly random member of `snapshot`, or no target if it is empty.
fn pick<R: Rng + ?Sized>(
    snapshot: &[usize],
    rng: &mut R,
    id: fn(usize) -> CombatantId,
) -> Vec<CombatantId> {
    snapshot.choose(rng).map(|&idx| id(idx)).into_iter().collect()
}
