//! Headless campaign loop: fight encounters back to back with an automated squad.
use std::io::Write;

use anyhow::{Result, anyhow};
use rand::seq::SliceRandom;

use mech_content::ContentFactory;
use mech_core::{
    Character, CombatConfig, CombatError, Encounter, Formation, GameError, Outcome, PcgRng,
    TemplateCatalog, compute_seed,
};

use crate::config::SimConfig;
use crate::table::render_roster;
use crate::targeting::{TargetingStrategy, aim_single_players, strategy_for};

const TABLE_COLUMNS: usize = 4;

/// Summary of one finished (or abandoned) encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncounterSummary {
    pub index: u64,
    pub rounds: u32,
    /// `None` when the round cap was hit first.
    pub outcome: Option<Outcome>,
}

pub struct Campaign {
    config: SimConfig,
    combat: CombatConfig,
    catalog: TemplateCatalog,
    strategy: Box<dyn TargetingStrategy>,
}

impl Campaign {
    /// Build a campaign, loading content from `data_dir` when configured.
    pub fn new(config: SimConfig) -> Result<Self> {
        let (combat, catalog) = match &config.data_dir {
            Some(dir) => {
                let factory = ContentFactory::new(dir);
                (factory.load_config()?, factory.load_templates()?)
            }
            None => (CombatConfig::default(), TemplateCatalog::standard()),
        };

        let strategy = strategy_for(config.targeting);
        tracing::info!(
            seed = config.seed,
            templates = catalog.len(),
            targeting = strategy.name(),
            "campaign ready"
        );

        Ok(Self {
            config,
            combat,
            catalog,
            strategy,
        })
    }

    pub fn combat_config(&self) -> &CombatConfig {
        &self.combat
    }

    /// Fight every configured encounter with the same squad.
    ///
    /// Each encounter starts the squad at full health.
    pub fn run(&self, squad: &[Character], out: &mut impl Write) -> Result<Vec<EncounterSummary>> {
        (0..self.config.encounters)
            .map(|index| self.run_encounter(index, squad, out))
            .collect()
    }

    /// Fight a single encounter until it is over or the round cap is reached.
    pub fn run_encounter(
        &self,
        index: u64,
        squad: &[Character],
        out: &mut impl Write,
    ) -> Result<EncounterSummary> {
        let mut rng = PcgRng::new(compute_seed(self.config.seed, index));
        let mut encounter = Encounter::generate(squad, &self.catalog, &self.combat, &mut rng);

        writeln!(out, "=== Encounter {} ===", index + 1)?;
        writeln!(out, "Your squad:")?;
        write!(out, "{}", render_roster(encounter.players(), TABLE_COLUMNS))?;
        writeln!(out, "Enemy forces:")?;
        write!(out, "{}", render_roster(encounter.enemies(), TABLE_COLUMNS))?;

        while !encounter.is_over() && encounter.rounds() < self.config.max_rounds {
            let options = Formation::enumerate(encounter.living_players().map(|c| c.character()));
            let formation = options
                .choose(&mut rng)
                .cloned()
                .ok_or_else(|| anyhow!("No formation available for the living squad"))?;

            encounter
                .validate_formation(&formation)
                .map_err(report_combat_error)?;
            aim_single_players(&mut encounter, &formation, self.strategy.as_ref())?;

            let report = encounter
                .resolve_round(&formation, &mut rng)
                .map_err(report_combat_error)?;
            writeln!(out, "Round {}: {}", report.round, formation)?;
            for message in report.messages() {
                writeln!(out, "  {message}")?;
            }
        }

        let outcome = encounter.outcome();
        match outcome {
            Some(outcome) => writeln!(out, "Result: {outcome}")?,
            None => {
                tracing::warn!(
                    encounter = index,
                    rounds = encounter.rounds(),
                    "round cap reached before the encounter ended"
                );
                writeln!(out, "Result: abandoned after {} rounds", encounter.rounds())?;
            }
        }
        write!(out, "{}", render_roster(encounter.players(), TABLE_COLUMNS))?;

        tracing::info!(encounter = index, rounds = encounter.rounds(), outcome = ?outcome, "encounter finished");

        Ok(EncounterSummary {
            index,
            rounds: encounter.rounds(),
            outcome,
        })
    }
}

/// Log a rules error with its classification before handing it up.
fn report_combat_error(err: CombatError) -> anyhow::Error {
    let severity = err.severity();
    tracing::error!(
        code = err.error_code(),
        severity = severity.as_str(),
        recoverable = severity.is_recoverable(),
        "{err}"
    );
    err.into()
}
