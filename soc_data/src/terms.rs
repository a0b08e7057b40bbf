//! Localization keys for the published records.
//!
//! The term map itself is resolved by the site; this only assembles the keys
//! its pages look up.

use crate::faction::Faction;
use crate::wielder::{Wielder, WielderSkill};

pub fn faction_name(faction_key: &str) -> String {
    format!("Factions/{faction_key}/Name")
}

pub fn wielder_name(wielder: &Wielder) -> String {
    format!("{}/{}/Name", wielder.faction, wielder.kind)
}

pub fn wielder_description(wielder: &Wielder) -> String {
    format!("{}/{}/Description", wielder.faction, wielder.kind)
}

/// Unit names are scoped by the faction's language key.
pub fn unit_name(faction_key: &str, unit_key: &str) -> String {
    format!("{faction_key}/{unit_key}/Name")
}

pub fn unit_description(faction_key: &str, unit_key: &str) -> String {
    format!("{faction_key}/{unit_key}/Description")
}

pub fn skill_name(skill_type: &str) -> String {
    format!("Skills/{skill_type}")
}

pub fn skill_lore(skill_type: &str) -> String {
    format!("Skills/{skill_type}/Lore")
}

/// Lists the keys a faction's page and its unit pages need.
pub fn faction_keys(faction: &Faction) -> Vec<String> {
    let mut keys = vec![faction_name(&faction.language_key)];
    for unit in &faction.units {
        let tiers = [Some(&unit.vanilla), unit.upgraded.as_ref(), unit.super_upgraded.as_ref()];
        for tier in tiers.into_iter().flatten() {
            keys.push(unit_name(&faction.language_key, &tier.language_key));
            keys.push(unit_description(&faction.language_key, &tier.language_key));
        }
    }

    keys
}

/// Lists the keys a wielder's page needs, including those of its skills and
/// of the skills they require.
pub fn wielder_keys(wielder: &Wielder) -> Vec<String> {
    let mut keys = vec![
        wielder_name(wielder),
        wielder_description(wielder),
    ];

    for skill in &wielder.skills {
        keys.push(skill_name(skill.kind()));
        keys.push(skill_lore(skill.kind()));

        if let WielderSkill::Pool(pool) = skill {
            for required in &pool.required_skills {
                keys.push(skill_name(&required.kind));
                keys.push(skill_lore(&required.kind));
            }
        }
    }

    keys
}
