use std::collections::HashSet;

use anyhow::Result;
use serde::Deserialize;

use soc_data::faction::Faction;
use soc_data::skill::SkillPool;
use soc_data::wielder::*;
use soc_data::Id;

use crate::context;
use crate::lookup::Table;
use crate::model::*;
use crate::parse;

/// Builds the wielder collection from the canonical commanders of every faction.
///
/// `factions` is the finished faction collection; starting units resolve against it.
pub fn load_wielders(tables: &SourceTables, factions: &[Faction]) -> Result<Vec<Wielder>> {
    let mut wielders = Vec::new();
    for faction in &tables.factions {
        for commander in faction.commanders.iter().filter(|c| c.is_canonical()) {
            wielders.push(load_wielder(tables, factions, faction, commander)?);
        }
    }

    Ok(wielders)
}

pub fn load_wielder(tables: &SourceTables, factions: &[Faction], faction: &RawFaction, raw: &RawCommander) -> Result<Wielder> {
    let kind = raw.kind.clone().unwrap_or_default();

    /// Requires an optional commander field.
    macro_rules! require {
        ($field:ident) => {
            context!(
                raw.$field.clone().ok_or(DataError::MissingField(stringify!($field)));
                "wielder {kind} of faction {}", faction.language_key
            )?
        };
    }

    let pool_id: Id = require!(skill_pool);
    let pool = context!(tables.skill_pools.get(&pool_id); "skill pool of wielder {kind}")?;
    let skills = context!(merge_skills(&tables.skills, &raw.skills, pool); "skills of wielder {kind}")?;

    let units = raw.units.iter()
        .map(|reference| -> Result<StartingUnit> {
            let (_, _, tier) = context!(parse::faction::resolve_unit_reference(factions, reference); "starting unit of wielder {kind}")?;
            Ok(StartingUnit {
                language_key: tier.language_key.clone(),
                size: reference.size,
            })
        })
        .collect::<Result<_>>()?;

    let specializations = context!(
        parse::bacteria::load_bacterias(&tables.bacterias, &raw.specializations);
        "specializations of wielder {kind}"
    )?;

    log::debug!("Wielder {kind}: {} skills, {} starting units.", skills.len(), raw.units.len());

    Ok(Wielder {
        portrait: require!(portrait),
        stats: require!(stats),
        kind,
        faction: faction.language_key.clone(),
        skills,
        units,
        specializations,
    })
}

/// Merges the assigned skills with the skills of the commander's pool.
///
/// Assigned skills come first, in source order. A pool skill is appended only
/// if its type is not in the list yet, so every type appears at most once
/// among the pool entries and never shadows an assigned skill.
pub fn merge_skills(skills: &Table<RawSkill>, assigned: &[RawAssignedSkill], pool: &SkillPool) -> Result<Vec<WielderSkill>> {
    let mut merged = Vec::new();
    let mut seen = HashSet::new();

    for skill in assigned {
        let kind = skill_type(skills, &skill.skill)?;
        seen.insert(kind.clone());
        merged.push(WielderSkill::Assigned(AssignedSkill { kind, level: skill.level }));
    }

    let tiers = context!(Vec::<RawPoolTier>::deserialize(&pool.pools); "pools of skill pool {}", pool.id)?;
    for tier in &tiers {
        for slot in &tier.skills {
            let kind = skill_type(skills, &slot.skill)?;
            if seen.contains(&kind) {
                continue;
            }

            let required_skills = slot.required_skills.iter()
                .map(|r| -> Result<RequiredSkill> { Ok(RequiredSkill { kind: skill_type(skills, &r.skill)?, level: r.level }) })
                .collect::<Result<_>>()?;

            seen.insert(kind.clone());
            merged.push(WielderSkill::Pool(PoolSkill {
                kind,
                level_range: tier.level_range.clone(),
                requires_skill: slot.requires_skill,
                requirement_type: RequirementType::from_code(&slot.requirement_type),
                required_skills,
            }));
        }
    }

    Ok(merged)
}

fn skill_type(skills: &Table<RawSkill>, id: &Id) -> Result<String> {
    Ok(skills.get(id)?.kind.clone())
}
