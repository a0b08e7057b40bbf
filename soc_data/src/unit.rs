//! Detailed unit data, one record per unit with all of its tiers.

use serde::*;

use crate::bacteria::Bacteria;
use crate::resource::PurchaseCost;
use crate::{Opaque, Sprite};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    /// The language key of the owning faction.
    pub faction: String,
    pub vanilla: UnitType,
    pub upgraded: Option<UnitType>,
    pub super_upgraded: Option<UnitType>,
}

/// A single unit tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitType {
    pub language_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite: Option<Sprite>,
    pub purchase_cost: PurchaseCost,
    pub obsolete_gold_cost: i32,
    pub stats: Opaque,
    /// [`None`] for units without an ability.
    pub troop_ability: Option<TroopAbility>,
    pub bacterias: Vec<Bacteria>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TroopAbility {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Sprite>,
    pub bacterias: Vec<Bacteria>,
}
