//! Headless simulator entry point.
mod campaign;
mod config;
mod squad;
mod table;
mod targeting;

use anyhow::Result;
use campaign::Campaign;
use config::SimConfig;
use mech_content::SaveLoader;
use mech_core::{PcgRng, SaveData};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SimConfig::from_env();
    let save_path = config.save_path.clone();
    let campaign = Campaign::new(config.clone())?;

    let mut rng = PcgRng::new(config.seed);
    let squad = squad::load_or_procure(
        save_path.as_deref(),
        config.players,
        campaign.combat_config(),
        &mut rng,
    )?;

    let stdout = std::io::stdout();
    let summaries = campaign.run(&squad, &mut stdout.lock())?;

    let victories = summaries
        .iter()
        .filter(|s| s.outcome == Some(mech_core::Outcome::Victory))
        .count();
    tracing::info!(encounters = summaries.len(), victories, "campaign finished");

    if let Some(path) = save_path {
        SaveLoader::store(&path, &SaveData::new(squad))?;
        tracing::info!(path = %path.display(), "squad saved");
    }

    Ok(())
}
