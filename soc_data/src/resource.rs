//! Resources, costs and income.

use serde::*;

use crate::define_data_enum;

define_data_enum! {
    /// A spendable resource. The game data refers to these by index.
    pub enum ResourceType for ResourceTypeData {
        pub friendly_name: &'static str;

        Gold("Gold"),
        Wood("Wood"),
        Stone("Stone"),
        AncientAmber("Ancient Amber"),
        Glimmerweave("Glimmerweave"),
        CelestialOre("Celestial Ore")
    }
}

/// An amount of a single resource, used for costs and flat income.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEntry {
    #[serde(rename = "type")]
    pub resource: ResourceType,
    pub amount: i32,
}

/// The price of recruiting a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseCost {
    pub cost_entries: Vec<CostEntry>,
}

/// Resource income granted by an effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceIncome {
    #[serde(rename = "type")]
    pub resource: ResourceType,
    pub amount: i32,
    pub all_time_amount: i32,
}
