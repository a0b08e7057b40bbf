//! Skills and skill pools.

use serde::*;

use crate::bacteria::Bacteria;
use crate::{Id, Opaque, Sprite};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(rename = "type")]
    pub kind: String,
    pub icon: Sprite,
    pub levels: Vec<SkillLevel>,
}

/// A skill level: the effect it grants and how long it lasts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillLevel {
    #[serde(flatten)]
    pub bacteria: Bacteria,
    pub duration: i32,
}

/// The skills a commander may learn while levelling up.
///
/// The pools are published exactly as the game data has them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillPool {
    pub id: Id,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub pools: Opaque,
}
