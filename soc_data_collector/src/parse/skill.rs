use anyhow::Result;

use soc_data::skill::*;

use crate::context;
use crate::model::*;
use crate::parse;

pub fn load_skills(tables: &SourceTables) -> Result<Vec<Skill>> {
    tables.skills.iter().map(|s| load_skill(tables, s)).collect()
}

/// Resolves every level of a skill.
pub fn load_skill(tables: &SourceTables, raw: &RawSkill) -> Result<Skill> {
    let levels = raw.levels.iter()
        .enumerate()
        .map(|(index, level)| context!(load_level(tables, level); "level {} of skill {}", index + 1, raw.kind))
        .collect::<Result<_>>()?;

    Ok(Skill {
        kind: raw.kind.clone(),
        icon: raw.icon.clone(),
        levels,
    })
}

/// A level grants the first bacteria it lists.
// CMBK: later entries are dropped; model them if the data starts using them.
fn load_level(tables: &SourceTables, raw: &RawSkillLevel) -> Result<SkillLevel> {
    let Some(first) = raw.bacterias.first() else {
        return Err(DataError::EmptySkillLevel.into());
    };

    if raw.bacterias.len() > 1 {
        log::debug!("Ignoring {} extra bacterias on a skill level.", raw.bacterias.len() - 1);
    }

    Ok(SkillLevel {
        bacteria: parse::bacteria::load_bacteria(&tables.bacterias, &first.bacteria_type)?,
        duration: first.duration,
    })
}

/// The skill pools are published as they are; nothing in them is interpreted here.
pub fn load_skill_pools(tables: &SourceTables) -> Vec<SkillPool> {
    tables.skill_pools.iter().cloned().collect()
}
