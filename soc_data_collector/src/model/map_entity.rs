//! Adventure map entities, their build sites and building blueprints.
//!
//! Blueprint components carry no discriminator; the kind of a component is
//! given by which fields it has. They are sorted into [`BlueprintComponent`]s
//! as blueprints are read, so that nothing past this module tests shapes.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::{Map, Value};

use soc_data::{Id, Opaque, Sprite};

use super::{RawCostEntry, RawUnitReference};

/// An adventure map entity.
///
/// Components are kept as they are; only those of build sites are ever read,
/// and other entities may carry shapes this module knows nothing about.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMapEntity {
    #[serde(default)]
    pub name_key: String,
    #[serde(default)]
    pub components: Vec<Opaque>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawActionProvider {
    #[serde(default)]
    pub available_buildings: Option<Vec<RawAvailableBuilding>>,
}

/// The buildings a build site offers to one faction.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAvailableBuilding {
    pub faction_id: Id,
    #[serde(default)]
    pub available_map_entities: Vec<RawAvailableMapEntity>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAvailableMapEntity {
    pub map_entity_blueprint: RawBlueprint,
}

/// The template of a building.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBlueprint {
    pub id: Id,
    pub name_key: String,
    #[serde(default)]
    pub description_key: String,
    #[serde(default)]
    pub portrait_settings: Vec<RawPortraitSetting>,
    #[serde(default, deserialize_with = "blueprint_components")]
    pub components: Vec<BlueprintComponent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPortraitSetting {
    pub portrait: Sprite,
}

/// A component of a building blueprint.
///
/// A single raw component may carry several of these.
#[derive(Debug, Clone)]
pub enum BlueprintComponent {
    Income(Vec<RawIncomeLevel>),
    BaseViewRadius(f64),
    LevelUpgrades(Vec<RawLevelUpgrade>),
    Requirements(RawRequirements),
    /// The whole component, kept as is.
    MaxGarrison(Opaque),
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawIncomeLevel {
    pub level: i32,
    pub definition: RawIncomeDefinition,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIncomeDefinition {
    #[serde(default)]
    pub resources: Vec<RawCostEntry>,
    #[serde(default)]
    pub troop_incomes: Vec<RawTroopIncome>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTroopIncome {
    pub reference: RawUnitReference,
    #[serde(default)]
    pub required_research: Opaque,
    #[serde(default)]
    pub initial_instant_income: Opaque,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLevelUpgrade {
    pub requirements: RawRequirements,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRequirements {
    pub cost: RawCost,
    #[serde(default)]
    pub required_buildings: Vec<RawRequiredBuilding>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCost {
    #[serde(default)]
    pub cost_entries: Vec<RawCostEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawRequiredBuilding {
    pub entity: Opaque,
}

impl RawMapEntity {
    /// Reads the action providers across this entity's components.
    pub fn action_providers(&self) -> serde_json::Result<Vec<RawActionProvider>> {
        let mut providers = Vec::new();
        for component in &self.components {
            if let Some(list) = component.get("actionProviders").filter(|v| !v.is_null()) {
                providers.extend(Vec::<RawActionProvider>::deserialize(list)?);
            }
        }

        Ok(providers)
    }
}

impl RawBlueprint {
    pub fn income(&self) -> Option<&[RawIncomeLevel]> {
        self.components.iter().find_map(|c| match c {
            BlueprintComponent::Income(levels) => Some(levels.as_slice()),
            _ => None,
        })
    }

    pub fn base_view_radius(&self) -> Option<f64> {
        self.components.iter().find_map(|c| match c {
            BlueprintComponent::BaseViewRadius(radius) => Some(*radius),
            _ => None,
        })
    }

    pub fn level_upgrades(&self) -> Option<&[RawLevelUpgrade]> {
        self.components.iter().find_map(|c| match c {
            BlueprintComponent::LevelUpgrades(upgrades) => Some(upgrades.as_slice()),
            _ => None,
        })
    }

    pub fn requirements(&self) -> Option<&RawRequirements> {
        self.components.iter().find_map(|c| match c {
            BlueprintComponent::Requirements(requirements) => Some(requirements),
            _ => None,
        })
    }

    pub fn max_garrison(&self) -> Option<&Opaque> {
        self.components.iter().find_map(|c| match c {
            BlueprintComponent::MaxGarrison(component) => Some(component),
            _ => None,
        })
    }
}

/// Gets a field that is present and not `null`.
fn present<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    fields.get(name).filter(|v| !v.is_null())
}

fn parse<T: DeserializeOwned, E: de::Error>(value: &Value) -> Result<T, E> {
    T::deserialize(value).map_err(E::custom)
}

impl BlueprintComponent {
    /// Sorts a raw component into every kind it carries.
    fn classify<E: de::Error>(fields: Map<String, Value>) -> Result<Vec<Self>, E> {
        let mut kinds = Vec::new();

        let income = present(&fields, "incomeDefinition")
            .and_then(|d| d.get("incomePerLevel"))
            .filter(|v| !v.is_null());

        if let Some(levels) = income {
            kinds.push(BlueprintComponent::Income(parse(levels)?));
        }

        if let Some(radius) = present(&fields, "baseViewRadius") {
            kinds.push(BlueprintComponent::BaseViewRadius(parse(radius)?));
        }

        if let Some(upgrades) = present(&fields, "levelUpgrades") {
            kinds.push(BlueprintComponent::LevelUpgrades(parse(upgrades)?));
        }

        if let Some(requirements) = present(&fields, "requirements") {
            kinds.push(BlueprintComponent::Requirements(parse(requirements)?));
        }

        if present(&fields, "maxGarrison").is_some() {
            kinds.push(BlueprintComponent::MaxGarrison(Value::Object(fields)));
        }

        Ok(kinds)
    }
}

fn blueprint_components<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<BlueprintComponent>, D::Error> {
    let mut components = Vec::new();
    for fields in Vec::<Map<String, Value>>::deserialize(deserializer)? {
        components.extend(BlueprintComponent::classify(fields)?);
    }

    Ok(components)
}
