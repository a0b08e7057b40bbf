use anyhow::Result;

use soc_data::resource::PurchaseCost;
use soc_data::unit::*;
use soc_data::Id;

use crate::context;
use crate::convert;
use crate::model::*;
use crate::parse;

/// Builds the detailed unit collection, one record per unit across all factions.
pub fn load_units(tables: &SourceTables) -> Result<Vec<Unit>> {
    let mut units = Vec::new();
    for faction in &tables.factions {
        for unit in &faction.units {
            let unit = context!(load_unit(tables, faction, unit); "unit of faction {}", faction.language_key)?;
            units.push(unit);
        }
    }

    Ok(units)
}

fn load_unit(tables: &SourceTables, faction: &RawFaction, raw: &RawUnit) -> Result<Unit> {
    /// Loads a tier if its language key says it exists.
    macro_rules! tier {
        ($tier:expr) => {
            match $tier.language_key() {
                Some(_) => Some(load_unit_type(tables, &$tier)?),
                None => None,
            }
        };
    }

    Ok(Unit {
        faction: faction.language_key.clone(),
        vanilla: load_unit_type(tables, &raw.vanilla)?,
        upgraded: tier!(raw.upgraded),
        super_upgraded: tier!(raw.super_upgraded),
    })
}

pub fn load_unit_type(tables: &SourceTables, raw: &RawUnitTier) -> Result<UnitType> {
    let language_key = raw.language_key.clone().unwrap_or_default();

    let cost_entries = context!(
        convert::to_cost_entries(&raw.purchase_cost.cost_entries);
        "purchase cost of unit {language_key}"
    )?;

    let ability_id = context!(
        raw.troop_ability.as_ref().ok_or(DataError::MissingField("troopAbility"));
        "unit {language_key}"
    )?;

    let troop_ability = context!(load_troop_ability(tables, ability_id); "troop ability of unit {language_key}")?;
    let bacterias = context!(
        parse::bacteria::load_bacterias(&tables.bacterias, &raw.bacterias);
        "bacterias of unit {language_key}"
    )?;

    Ok(UnitType {
        sprite: raw.sprite().cloned(),
        purchase_cost: PurchaseCost { cost_entries },
        obsolete_gold_cost: raw.obsolete_gold_cost,
        stats: raw.stats.clone(),
        troop_ability,
        bacterias,
        language_key,
    })
}

/// Resolves a troop ability. The ability type `"None"` stands for no ability.
pub fn load_troop_ability(tables: &SourceTables, id: &Id) -> Result<Option<TroopAbility>> {
    let ability = tables.troop_abilities.get(id)?;
    if ability.kind == "None" {
        return Ok(None);
    }

    Ok(Some(TroopAbility {
        kind: ability.kind.clone(),
        icon: ability.icon.clone(),
        bacterias: parse::bacteria::load_bacterias(&tables.bacterias, &ability.bacterias)?,
    }))
}
