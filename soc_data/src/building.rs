//! Buildings constructible on build sites.

use serde::*;

use crate::faction::UpgradeTier;
use crate::resource::CostEntry;
use crate::{Id, Opaque, Sprite};

/// A building blueprint, listed once no matter how many sites offer it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub id: Id,
    pub faction_id: Id,
    /// Name key of the first build site found offering this building.
    pub build_site: String,
    pub name_key: String,
    pub description_key: String,
    pub portraits: Vec<Sprite>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_per_level: Option<Vec<IncomeLevel>>,
    pub base_view_radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_upgrades: Option<Vec<BuildRequirements>>,
    pub requirements: BuildRequirements,
    /// The whole max garrison component, as found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_garrison: Option<Opaque>,
}

/// Income of a building at one of its levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeLevel {
    pub level: i32,
    pub resources: Vec<CostEntry>,
    pub troop_incomes: Vec<TroopIncome>,
}

/// Recruits a building makes available, possibly from another faction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TroopIncome {
    pub faction_key: String,
    pub upgrade_type: UpgradeTier,
    /// [`None`] if the unit doesn't have the named tier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_key: Option<String>,
    pub size: i32,
    #[serde(default)]
    pub required_research: Opaque,
    #[serde(default)]
    pub initial_instant_income: Opaque,
}

/// What it takes to construct a building or to raise its level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildRequirements {
    pub cost_entries: Vec<CostEntry>,
    pub required_buildings: Vec<Opaque>,
}
