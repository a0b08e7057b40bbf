//! Bacteria: the game's name for status effects and modifiers.
//!
//! Commanders, units, skills and artifacts all grant their bonuses through
//! bacteria. The records here are fully resolved and hold no references.

use serde::*;

use crate::resource::ResourceIncome;
use crate::{Id, Opaque};

/// A resolved effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bacteria {
    pub bacteria_type: Id,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restriction: Option<Opaque>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aura_settings: Option<Opaque>,
    /// For auras, the modifiers of the effect the aura grants.
    pub modifier_data: Vec<Modifier>,
    pub resources_income: Vec<ResourceIncome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<BacteriaSettings>,
}

/// A single stat modifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modifier {
    #[serde(rename = "type")]
    pub kind: Opaque,
    pub modifier: f64,
    pub amount_to_add: f64,
    pub application_type: Opaque,
}

/// Sub-effects of a composite effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacteriaSettings {
    pub bacterias: Vec<Bacteria>,
}
