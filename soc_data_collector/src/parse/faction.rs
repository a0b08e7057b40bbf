use anyhow::Result;

use soc_data::faction::*;

use crate::context;
use crate::convert;
use crate::model::*;

/// Builds the faction collection, including the visual summary of each unit.
pub fn load_factions(raw: &[RawFaction]) -> Result<Vec<Faction>> {
    raw.iter().map(load_faction).collect()
}

pub fn load_faction(raw: &RawFaction) -> Result<Faction> {
    let commanders = raw.commanders.iter()
        .filter(|c| c.is_canonical())
        .map(|c| load_commander(raw, c))
        .collect::<Result<_>>()?;

    Ok(Faction {
        id: raw.id.clone(),
        kind: raw.kind.clone(),
        language_key: raw.language_key.clone(),
        banner_sprite: raw.banner_sprite.clone(),
        symbol_sprite: raw.symbol_sprite.clone(),
        wielder_frames: raw.wielder_frames.clone(),
        commanders,
        units: raw.units.iter().map(|u| load_unit(raw, u)).collect(),
    })
}

fn load_commander(faction: &RawFaction, raw: &RawCommander) -> Result<FactionCommander> {
    let kind = raw.kind.clone().unwrap_or_default();
    let portrait = context!(
        raw.portrait.clone().ok_or(DataError::MissingField("portrait"));
        "commander {kind} of faction {}", faction.language_key
    )?;

    Ok(FactionCommander { kind, portrait })
}

fn load_unit(faction: &RawFaction, raw: &RawUnit) -> FactionUnit {
    let vanilla = UnitTierVisual {
        language_key: raw.vanilla.language_key.clone().unwrap_or_default(),
        sprite: raw.vanilla.sprite().cloned(),
        adventure_sprite: raw.vanilla.adventure_sprite().cloned(),
    };

    if raw.vanilla.visuals.is_none() {
        log::debug!("Unit {} of faction {} has no visuals.", vanilla.language_key, faction.language_key);
    }

    FactionUnit {
        vanilla,
        upgraded: load_upgraded_tier(&raw.upgraded),
        super_upgraded: load_upgraded_tier(&raw.super_upgraded),
    }
}

/// Upgraded tiers are shown by their adventure map sprite.
fn load_upgraded_tier(raw: &RawUnitTier) -> Option<UnitTierVisual> {
    let language_key = raw.language_key()?;
    Some(UnitTierVisual {
        language_key: language_key.to_owned(),
        sprite: raw.adventure_sprite().cloned(),
        adventure_sprite: None,
    })
}

/// Looks up a faction/unit/tier index triple in the finished faction list.
///
/// The tier itself may be absent.
pub fn lookup_unit_reference<'a>(factions: &'a [Faction], reference: &RawUnitReference) -> Result<(&'a Faction, UpgradeTier, Option<&'a UnitTierVisual>)> {
    let faction = factions.get(reference.faction_index)
        .ok_or(DataError::NoSuchFaction(reference.faction_index))?;

    let unit = faction.units.get(reference.unit_index)
        .ok_or(DataError::NoSuchUnit { faction: reference.faction_index, unit: reference.unit_index })?;

    let tier = convert::to_upgrade_tier(reference.upgrade_type)?;
    Ok((faction, tier, unit.tier(tier)))
}

/// Like [`lookup_unit_reference`], but the tier has to exist.
pub fn resolve_unit_reference<'a>(factions: &'a [Faction], reference: &RawUnitReference) -> Result<(&'a Faction, UpgradeTier, &'a UnitTierVisual)> {
    let (faction, tier, visual) = lookup_unit_reference(factions, reference)?;
    let visual = visual
        .ok_or(DataError::AbsentTier { faction: reference.faction_index, unit: reference.unit_index, tier })?;

    Ok((faction, tier, visual))
}
