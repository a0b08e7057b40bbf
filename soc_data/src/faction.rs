//! Factions and the per-faction unit roster.

use serde::*;

use crate::define_data_enum;
use crate::{Id, Sprite};

/// A playable faction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faction {
    pub id: Id,
    #[serde(rename = "type")]
    pub kind: String,
    pub language_key: String,
    pub banner_sprite: Option<Sprite>,
    pub symbol_sprite: Option<Sprite>,
    pub wielder_frames: Vec<Sprite>,
    /// Only the canonical commander set of the faction.
    pub commanders: Vec<FactionCommander>,
    pub units: Vec<FactionUnit>,
}

/// A commander as listed on its faction's page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactionCommander {
    #[serde(rename = "type")]
    pub kind: String,
    pub portrait: Sprite,
}

/// A unit with its three upgrade tiers.
///
/// A tier is absent whenever the source gives it no language key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactionUnit {
    pub vanilla: UnitTierVisual,
    pub upgraded: Option<UnitTierVisual>,
    pub super_upgraded: Option<UnitTierVisual>,
}

/// The visual summary of one unit tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitTierVisual {
    pub language_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite: Option<Sprite>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adventure_sprite: Option<Sprite>,
}

define_data_enum! {
    /// Upgrade tier of a unit. The game data refers to these by index.
    #[serde(rename_all = "camelCase")]
    pub enum UpgradeTier for UpgradeTierData {
        pub friendly_name: &'static str;

        Vanilla("Vanilla"),
        Upgraded("Upgraded"),
        SuperUpgraded("Super Upgraded")
    }
}

impl FactionUnit {
    /// Gets the given tier, if the unit has it.
    #[must_use]
    pub fn tier(&self, tier: UpgradeTier) -> Option<&UnitTierVisual> {
        match tier {
            UpgradeTier::Vanilla => Some(&self.vanilla),
            UpgradeTier::Upgraded => self.upgraded.as_ref(),
            UpgradeTier::SuperUpgraded => self.super_upgraded.as_ref(),
        }
    }
}
