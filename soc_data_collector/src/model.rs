//! Data model used while reading the extracted game data.
//!
//! These types mirror the raw tables. Anything the pipeline does not
//! interpret is kept as an [`Opaque`] value and written back out verbatim.

use std::error::Error;
use std::fmt::{Debug, Display};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use soc_data::faction::UpgradeTier;
use soc_data::skill::SkillPool;
use soc_data::wielder::WielderStats;
use soc_data::{Id, Opaque, Sprite};

use crate::context;
use crate::lookup::{Keyed, Table};

mod map_entity;

pub use map_entity::*;

/// All source tables, loaded once before any transformation.
#[derive(Debug)]
pub struct SourceTables {
    pub bacterias: Table<RawBacteria>,
    pub skills: Table<RawSkill>,
    pub factions: Vec<RawFaction>,
    pub skill_pools: Table<SkillPool>,
    pub troop_abilities: Table<RawTroopAbility>,
    pub artifacts: Vec<RawArtifact>,
    pub term_map: Opaque,
    pub icons: Vec<Sprite>,
    pub map_entities: Vec<RawMapEntity>,
}

impl SourceTables {
    /// Reads every table from the extracted data directory.
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        let tables = SourceTables {
            bacterias: read_table(dir, "bacteria.json")?,
            skills: read_table(dir, "skill.json")?,
            factions: read_table(dir, "faction.json")?,
            skill_pools: read_table(dir, "skillPool.json")?,
            troop_abilities: read_table(dir, "troopAbility.json")?,
            artifacts: read_table(dir, "artifact.json")?,
            term_map: read_table(dir, "termMap.json")?,
            icons: read_table(dir, "icons.json")?,
            map_entities: read_table(dir, "adventureMapEntity.json")?,
        };

        log::info!(
            "Loaded {} bacteria, {} skills, {} factions, {} skill pools, {} troop abilities, {} artifacts, {} icons, {} map entities.",
            tables.bacterias.len(),
            tables.skills.len(),
            tables.factions.len(),
            tables.skill_pools.len(),
            tables.troop_abilities.len(),
            tables.artifacts.len(),
            tables.icons.len(),
            tables.map_entities.len(),
        );

        Ok(tables)
    }
}

fn read_table<T: DeserializeOwned>(dir: &Path, name: &str) -> anyhow::Result<T> {
    let path = dir.join(name);
    let file = context!(File::open(&path); "cannot open source table {}", path.display())?;
    let table = context!(serde_json::from_reader(BufReader::new(file)); "malformed source table {}", path.display())?;
    log::debug!("Read {}.", path.display());
    Ok(table)
}

/// A bacteria (effect) record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBacteria {
    pub id: Id,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub restriction: Option<Opaque>,
    #[serde(default)]
    pub aura_settings: Option<Opaque>,
    #[serde(default)]
    pub modifier_data: Option<Vec<RawModifier>>,
    #[serde(default)]
    pub income: Option<RawIncome>,
    #[serde(default)]
    pub settings: Option<RawBacteriaSettings>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawModifier {
    #[serde(rename = "type")]
    pub kind: Opaque,
    #[serde(default)]
    pub modifier: f64,
    #[serde(default)]
    pub amount_to_add: f64,
    #[serde(default)]
    pub application_type: Opaque,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawIncome {
    #[serde(default)]
    pub resources: Vec<RawResourceIncome>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawResourceIncome {
    /// Index into [`soc_data::resource::ResourceType`].
    #[serde(rename = "type")]
    pub kind: usize,
    pub amount: i32,
    #[serde(default)]
    pub all_time_amount: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawBacteriaSettings {
    #[serde(default)]
    pub bacterias: Option<Vec<RawBacteriaRef>>,
}

/// A reference to a bacteria by id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBacteriaRef {
    pub bacteria_type: Id,
}

/// A skill with one entry per level.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSkill {
    pub id: Id,
    #[serde(rename = "type")]
    pub kind: String,
    pub icon: Sprite,
    pub levels: Vec<RawSkillLevel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSkillLevel {
    #[serde(default)]
    pub bacterias: Vec<RawLevelBacteria>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLevelBacteria {
    #[serde(rename = "type")]
    pub bacteria_type: Id,
    #[serde(default)]
    pub duration: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFaction {
    pub id: Id,
    #[serde(rename = "type")]
    pub kind: String,
    pub language_key: String,
    #[serde(default)]
    pub banner_sprite: Option<Sprite>,
    #[serde(default)]
    pub symbol_sprite: Option<Sprite>,
    #[serde(default)]
    pub wielder_frames: Vec<Sprite>,
    #[serde(default)]
    pub commanders: Vec<RawCommander>,
    #[serde(default)]
    pub units: Vec<RawUnit>,
}

/// A commander entry of a faction. Only some of these are playable wielders.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCommander {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub usage_type: Option<i64>,
    #[serde(default)]
    pub portrait: Option<Sprite>,
    #[serde(default)]
    pub stats: Option<WielderStats>,
    #[serde(default)]
    pub skills: Vec<RawAssignedSkill>,
    #[serde(default)]
    pub skill_pool: Option<Id>,
    #[serde(default)]
    pub units: Vec<RawUnitReference>,
    #[serde(default)]
    pub specializations: Vec<RawBacteriaRef>,
}

/// A tier of a skill pool, read only to merge a wielder's skills.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPoolTier {
    #[serde(default)]
    pub level_range: Opaque,
    #[serde(default)]
    pub skills: Vec<RawPoolSkill>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPoolSkill {
    pub skill: Id,
    #[serde(default, deserialize_with = "truthy")]
    pub requires_skill: bool,
    #[serde(default)]
    pub requirement_type: Opaque,
    #[serde(default)]
    pub required_skills: Vec<RawRequiredSkill>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawRequiredSkill {
    pub skill: Id,
    pub level: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAssignedSkill {
    pub skill: Id,
    pub level: i32,
}

/// Points at a unit tier by faction, unit and tier index.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUnitReference {
    pub faction_index: usize,
    pub unit_index: usize,
    pub upgrade_type: usize,
    #[serde(default)]
    pub size: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUnit {
    pub vanilla: RawUnitTier,
    #[serde(default)]
    pub upgraded: RawUnitTier,
    #[serde(default)]
    pub super_upgraded: RawUnitTier,
}

/// One tier of a unit. Absent tiers still exist but have no language key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUnitTier {
    #[serde(default)]
    pub language_key: Option<String>,
    #[serde(default)]
    pub visuals: Option<RawVisuals>,
    #[serde(default)]
    pub purchase_cost: RawPurchaseCost,
    #[serde(default)]
    pub obsolete_gold_cost: i32,
    #[serde(default)]
    pub stats: Opaque,
    #[serde(default)]
    pub troop_ability: Option<Id>,
    #[serde(default)]
    pub bacterias: Vec<RawBacteriaRef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVisuals {
    #[serde(default)]
    pub prefab: Option<RawPrefab>,
    #[serde(default)]
    pub adventure_prefab: Option<RawPrefab>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPrefab {
    #[serde(default)]
    pub sprite: Option<Sprite>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPurchaseCost {
    #[serde(default)]
    pub cost_entries: Vec<RawCostEntry>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawCostEntry {
    /// Index into [`soc_data::resource::ResourceType`].
    #[serde(rename = "type")]
    pub kind: usize,
    pub amount: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTroopAbility {
    pub id: Id,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub icon: Option<Sprite>,
    #[serde(default)]
    pub bacterias: Vec<RawBacteriaRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawArtifact {
    pub id: Id,
    #[serde(rename = "type")]
    pub kind: String,
    pub icon: Sprite,
    #[serde(default)]
    pub bacterias: Vec<RawBacteriaRef>,
}

/// Reads any value as a flag. `null`, `false`, `0` and `""` are unset.
fn truthy<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Opaque::deserialize(deserializer)? {
        Opaque::Null => false,
        Opaque::Bool(flag) => flag,
        Opaque::Number(num) => num.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Opaque::String(text) => !text.is_empty(),
        Opaque::Array(_) | Opaque::Object(_) => true,
    })
}

impl RawBacteria {
    /// The bacteria this aura grants, if it is an aura that grants one.
    #[must_use]
    pub fn aura_target(&self) -> Option<Id> {
        let target = self.aura_settings.as_ref()?.pointer("/bacteriaToAdd/bacteriaType")?;
        Id::deserialize(target).ok().filter(Id::is_set)
    }
}

impl RawCommander {
    /// Whether this is the commander's playable entry.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.kind.as_deref().is_some_and(|k| !k.is_empty()) && self.usage_type == Some(0)
    }
}

impl RawUnitTier {
    /// The language key, or [`None`] if the tier does not exist.
    #[must_use]
    pub fn language_key(&self) -> Option<&str> {
        self.language_key.as_deref().filter(|k| !k.is_empty())
    }

    /// The world sprite. Missing visuals are tolerated.
    #[must_use]
    pub fn sprite(&self) -> Option<&Sprite> {
        self.visuals.as_ref()?.prefab.as_ref()?.sprite.as_ref()
    }

    /// The adventure map sprite. Missing visuals are tolerated.
    #[must_use]
    pub fn adventure_sprite(&self) -> Option<&Sprite> {
        self.visuals.as_ref()?.adventure_prefab.as_ref()?.sprite.as_ref()
    }
}

impl Keyed for RawBacteria {
    const KIND: &'static str = "bacteria";
    fn key(&self) -> &Id { &self.id }
}

impl Keyed for RawSkill {
    const KIND: &'static str = "skill";
    fn key(&self) -> &Id { &self.id }
}

impl Keyed for SkillPool {
    const KIND: &'static str = "skill pool";
    fn key(&self) -> &Id { &self.id }
}

impl Keyed for RawTroopAbility {
    const KIND: &'static str = "troop ability";
    fn key(&self) -> &Id { &self.id }
}

/// An error when the data does not have the expected shape.
#[derive(Debug, Clone)]
pub enum DataError {
    /// A referenced record does not exist.
    NotFound { kind: &'static str, id: Id },
    /// A resource type index outside of the known resources.
    UnknownResourceType(usize),
    /// An upgrade tier index outside of the three tiers.
    UnknownUpgradeTier(usize),
    /// A unit reference points past the faction list.
    NoSuchFaction(usize),
    /// A unit reference points past a faction's unit list.
    NoSuchUnit { faction: usize, unit: usize },
    /// A unit reference points at a tier the unit doesn't have.
    AbsentTier { faction: usize, unit: usize, tier: UpgradeTier },
    /// A skill level lists no bacteria.
    EmptySkillLevel,
    /// A required field is missing.
    MissingField(&'static str),
    /// A building blueprint lacks a required component.
    MissingComponent(&'static str),
}

impl Error for DataError {}
impl Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}
