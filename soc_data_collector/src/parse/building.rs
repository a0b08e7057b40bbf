use std::collections::HashSet;

use anyhow::Result;

use soc_data::building::*;
use soc_data::faction::Faction;
use soc_data::Id;

use crate::context;
use crate::convert;
use crate::model::*;
use crate::parse;

/// A blueprint as offered by a build site to a faction.
struct Offer<'a> {
    site: &'a str,
    faction_id: &'a Id,
    blueprint: &'a RawBlueprint,
}

/// Walks action provider, available building and map entity, in that order.
fn offers<'a>(site: &'a RawMapEntity, providers: &'a [RawActionProvider]) -> impl Iterator<Item = Offer<'a>> {
    providers.iter()
        .flat_map(|provider| provider.available_buildings.iter().flatten())
        .flat_map(move |available| {
            available.available_map_entities.iter().map(move |entity| Offer {
                site: &site.name_key,
                faction_id: &available.faction_id,
                blueprint: &entity.map_entity_blueprint,
            })
        })
}

/// Collects every building offered by a build site.
///
/// Buildings are unique by blueprint id. The first offer found is kept, so a
/// building offered on several sites is attributed to the first one. Entities
/// that aren't build sites are never looked into.
pub fn load_buildings(tables: &SourceTables, factions: &[Faction], site_prefix: &str) -> Result<Vec<Building>> {
    let mut seen = HashSet::new();
    let mut buildings = Vec::new();

    for site in tables.map_entities.iter().filter(|e| e.name_key.starts_with(site_prefix)) {
        let providers = context!(site.action_providers(); "action providers of {}", site.name_key)?;

        for offer in offers(site, &providers) {
            if !seen.insert(offer.blueprint.id.clone()) {
                log::trace!("Building {} on {} was already collected.", offer.blueprint.id, offer.site);
                continue;
            }

            let building = context!(
                load_building(factions, &offer);
                "building {} on {}", offer.blueprint.id, offer.site
            )?;
            buildings.push(building);
        }
    }

    Ok(buildings)
}

fn load_building(factions: &[Faction], offer: &Offer<'_>) -> Result<Building> {
    let blueprint = offer.blueprint;

    let income_per_level = match blueprint.income() {
        Some(levels) => Some(levels.iter().map(|l| load_income_level(factions, l)).collect::<Result<Vec<_>>>()?),
        None => None,
    };

    let base_view_radius = blueprint.base_view_radius()
        .ok_or(DataError::MissingComponent("baseViewRadius"))?;

    let level_upgrades = match blueprint.level_upgrades() {
        Some(upgrades) => Some(upgrades.iter().map(|u| load_requirements(&u.requirements)).collect::<Result<Vec<_>>>()?),
        None => None,
    };

    let requirements = blueprint.requirements()
        .ok_or(DataError::MissingComponent("requirements"))?;

    Ok(Building {
        id: blueprint.id.clone(),
        faction_id: offer.faction_id.clone(),
        build_site: offer.site.to_owned(),
        name_key: blueprint.name_key.clone(),
        description_key: blueprint.description_key.clone(),
        portraits: blueprint.portrait_settings.iter().map(|p| p.portrait.clone()).collect(),
        income_per_level,
        base_view_radius,
        level_upgrades,
        requirements: load_requirements(requirements)?,
        max_garrison: blueprint.max_garrison().cloned(),
    })
}

fn load_income_level(factions: &[Faction], raw: &RawIncomeLevel) -> Result<IncomeLevel> {
    let troop_incomes = raw.definition.troop_incomes.iter()
        .map(|t| load_troop_income(factions, t))
        .collect::<Result<Vec<_>>>();

    Ok(IncomeLevel {
        level: raw.level,
        resources: context!(convert::to_cost_entries(&raw.definition.resources); "resource income at level {}", raw.level)?,
        troop_incomes: context!(troop_incomes; "troop income at level {}", raw.level)?,
    })
}

/// Troop incomes may name units of any faction, and tiers that don't exist.
fn load_troop_income(factions: &[Faction], raw: &RawTroopIncome) -> Result<TroopIncome> {
    let (faction, tier, unit) = parse::faction::lookup_unit_reference(factions, &raw.reference)?;
    if unit.is_none() {
        log::debug!("Troop income names absent {tier:?} tier of unit {} of {}.", raw.reference.unit_index, faction.language_key);
    }

    Ok(TroopIncome {
        faction_key: faction.language_key.clone(),
        upgrade_type: tier,
        unit_key: unit.map(|u| u.language_key.clone()),
        size: raw.reference.size,
        required_research: raw.required_research.clone(),
        initial_instant_income: raw.initial_instant_income.clone(),
    })
}

fn load_requirements(raw: &RawRequirements) -> Result<BuildRequirements> {
    Ok(BuildRequirements {
        cost_entries: convert::to_cost_entries(&raw.cost.cost_entries)?,
        required_buildings: raw.required_buildings.iter().map(|r| r.entity.clone()).collect(),
    })
}
