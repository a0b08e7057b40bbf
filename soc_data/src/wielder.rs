//! Wielders, the game's commanders.

use serde::*;

use crate::bacteria::Bacteria;
use crate::{Opaque, Sprite};

/// A commander with its merged skill list and starting army.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wielder {
    #[serde(rename = "type")]
    pub kind: String,
    /// The language key of the owning faction.
    pub faction: String,
    pub portrait: Sprite,
    pub stats: WielderStats,
    /// Assigned skills first, then skills from the pool, each type once.
    pub skills: Vec<WielderSkill>,
    pub units: Vec<StartingUnit>,
    pub specializations: Vec<Bacteria>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WielderStats {
    pub defense: f64,
    pub offense: f64,
    pub movement: f64,
    pub view_radius: f64,
    pub command: f64,
}

/// An entry of a commander's skill list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WielderSkill {
    /// A skill the commander starts with.
    Assigned(AssignedSkill),
    /// A skill the commander may learn from their skill pool.
    Pool(PoolSkill),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignedSkill {
    #[serde(rename = "type")]
    pub kind: String,
    pub level: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolSkill {
    #[serde(rename = "type")]
    pub kind: String,
    /// The level range of the pool the skill is in, as found.
    pub level_range: Opaque,
    pub requires_skill: bool,
    pub requirement_type: RequirementType,
    pub required_skills: Vec<RequiredSkill>,
}

/// How the required skills of a [`PoolSkill`] combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequirementType {
    RequireAny,
    RequireAll,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredSkill {
    #[serde(rename = "type")]
    pub kind: String,
    pub level: i32,
}

/// A unit stack a commander starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartingUnit {
    /// Language key of the referenced unit tier.
    pub language_key: String,
    pub size: i32,
}

impl WielderSkill {
    /// The skill type, regardless of where the entry came from.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            WielderSkill::Assigned(skill) => &skill.kind,
            WielderSkill::Pool(skill) => &skill.kind,
        }
    }
}

impl RequirementType {
    /// Maps the game's requirement code. Only `0` means "any".
    #[must_use]
    pub fn from_code(code: &Opaque) -> Self {
        match code.as_f64() {
            Some(0.0) => RequirementType::RequireAny,
            _ => RequirementType::RequireAll,
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn requirement_codes() {
        assert_eq!(RequirementType::from_code(&json!(0)), RequirementType::RequireAny);
        assert_eq!(RequirementType::from_code(&json!(0.0)), RequirementType::RequireAny);
        assert_eq!(RequirementType::from_code(&json!(1)), RequirementType::RequireAll);
        assert_eq!(RequirementType::from_code(&json!(7)), RequirementType::RequireAll);
        assert_eq!(RequirementType::from_code(&json!("0")), RequirementType::RequireAll);
        assert_eq!(RequirementType::from_code(&Opaque::Null), RequirementType::RequireAll);
    }

    #[test]
    fn skill_entries_keep_their_shape() {
        let skills = vec![
            WielderSkill::Assigned(AssignedSkill { kind: "Tactics".to_owned(), level: 2 }),
            WielderSkill::Pool(PoolSkill {
                kind: "Fireball".to_owned(),
                level_range: json!({ "min": 1, "max": 5 }),
                requires_skill: true,
                requirement_type: RequirementType::RequireAny,
                required_skills: vec![RequiredSkill { kind: "Arcana".to_owned(), level: 1 }],
            }),
        ];

        let value = serde_json::to_value(&skills).unwrap();
        assert_eq!(value, json!([
            { "type": "Tactics", "level": 2 },
            {
                "type": "Fireball",
                "levelRange": { "min": 1, "max": 5 },
                "requiresSkill": true,
                "requirementType": "RequireAny",
                "requiredSkills": [{ "type": "Arcana", "level": 1 }]
            }
        ]));

        let back: Vec<WielderSkill> = serde_json::from_value(value).unwrap();
        assert_eq!(back, skills);
        assert_eq!(back[1].kind(), "Fireball");
    }
}
