//! Reports localization keys the published records need but the term map lacks.

use std::collections::BTreeSet;

use soc_data::faction::Faction;
use soc_data::skill::Skill;
use soc_data::wielder::Wielder;
use soc_data::{terms, Opaque};

/// Logs every missing key at `warn` and returns how many were missing.
///
/// A term map that isn't a JSON object can't be checked and reports nothing.
pub fn check_terms(term_map: &Opaque, factions: &[Faction], wielders: &[Wielder], skills: &[Skill]) -> usize {
    let Some(term_map) = term_map.as_object() else {
        log::warn!("Term map is not an object, skipping term check.");
        return 0;
    };

    let mut keys = BTreeSet::new();
    keys.extend(factions.iter().flat_map(terms::faction_keys));
    keys.extend(wielders.iter().flat_map(terms::wielder_keys));
    for skill in skills {
        keys.insert(terms::skill_name(&skill.kind));
        keys.insert(terms::skill_lore(&skill.kind));
    }

    let mut missing = 0usize;
    for key in &keys {
        if !term_map.contains_key(key) {
            log::warn!("Missing term: {key}");
            missing += 1;
        }
    }

    log::info!("Checked {} terms, {missing} missing.", keys.len());
    missing
}
