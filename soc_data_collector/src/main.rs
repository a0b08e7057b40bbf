use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

mod config;
mod convert;
mod lookup;
mod macros;
mod model;
mod output;
mod parse;
mod term_check;

#[cfg(test)]
mod test_data;

use config::{CollectorConfig, Overrides};
use model::SourceTables;
use output::CollectionWriter;

#[derive(Debug, Parser)]
struct Cli {
    /// The directory holding the extracted source tables.
    #[arg(short, long)]
    input: Option<String>,
    /// The directory to write the collections to.
    #[arg(short, long)]
    out: Option<String>,
    /// The asset directory root.
    #[arg(short, long)]
    public: Option<String>,
    /// The directory holding the extracted sprite sheets.
    #[arg(long)]
    images: Option<String>,
    /// A TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Minimize the output JSON files.
    #[arg(short, long)]
    minimize: bool,
    /// Don't copy any image assets.
    #[arg(long)]
    skip_images: bool,
    /// Warn about localization keys missing from the term map.
    #[arg(long)]
    check_terms: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let overrides = Overrides {
        input: cli.input,
        collections: cli.out,
        public: cli.public,
        images: cli.images,
        minimize: cli.minimize,
        skip_images: cli.skip_images,
        check_terms: cli.check_terms,
    };

    let config = config::load(cli.config.as_deref(), &overrides)?;
    config.log.builder().init();

    run(&config)
}

fn run(config: &CollectorConfig) -> Result<()> {
    let tables = SourceTables::load(&config.paths.input)?;
    let mut out = CollectionWriter::new(config)?;

    out.write("termMap", &tables.term_map)?;

    log::info!("Converting factions...");
    let factions = parse::faction::load_factions(&tables.factions)?;
    out.write("factions", &factions)?;
    for faction in &factions {
        for frame in &faction.wielder_frames {
            out.copy_image(&frame.sprite_sheet, "factions")?;
        }
    }

    log::info!("Converting wielders...");
    let wielders = parse::wielder::load_wielders(&tables, &factions)?;
    out.write("wielders", &wielders)?;
    for wielder in &wielders {
        out.copy_image(&wielder.portrait.sprite_sheet, "wielders")?;
    }

    log::info!("Converting units...");
    let units = parse::unit::load_units(&tables)?;
    out.write("units", &units)?;

    log::info!("Converting skills...");
    let skills = parse::skill::load_skills(&tables)?;
    out.write("skills", &skills)?;

    let skill_pools = parse::skill::load_skill_pools(&tables);
    out.write("skillPools", &skill_pools)?;

    log::info!("Converting artifacts...");
    let artifacts = parse::artifact::load_artifacts(&tables)?;
    out.write("artifacts", &artifacts)?;
    for artifact in &artifacts {
        out.copy_image(&artifact.icon.sprite_sheet, "artifacts")?;
    }

    out.write("icons", &tables.icons)?;
    for icon in &tables.icons {
        out.copy_image(&icon.sprite_sheet, "icons")?;
    }

    log::info!("Converting buildings...");
    let buildings = parse::building::load_buildings(&tables, &factions, &config.source.build_site_prefix)?;
    out.write("buildings", &buildings)?;
    for building in &buildings {
        for portrait in &building.portraits {
            out.copy_image(&portrait.sprite_sheet, "buildings")?;
        }
    }

    if config.output.check_terms {
        term_check::check_terms(&tables.term_map, &factions, &wielders, &skills);
    }

    log::info!(
        "Done: {} factions, {} wielders, {} units, {} skills, {} skill pools, {} artifacts, {} icons, {} buildings, {} assets copied.",
        factions.len(),
        wielders.len(),
        units.len(),
        skills.len(),
        skill_pools.len(),
        artifacts.len(),
        tables.icons.len(),
        buildings.len(),
        out.copied(),
    );

    Ok(())
}
