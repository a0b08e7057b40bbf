//! A small synthetic source data set for tests.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::model::SourceTables;

/// The raw JSON of each source table. Tests may edit these before building.
pub struct SourceJson {
    pub bacterias: Value,
    pub skills: Value,
    pub factions: Value,
    pub skill_pools: Value,
    pub troop_abilities: Value,
    pub artifacts: Value,
    pub term_map: Value,
    pub icons: Value,
    pub map_entities: Value,
}

pub fn sprite(name: &str) -> Value {
    json!({ "name": name, "spriteSheet": format!("{name}.png"), "x": 0, "y": 0, "width": 64, "height": 64 })
}

fn from_json<T: DeserializeOwned>(value: Value) -> T {
    serde_json::from_value(value).expect("test data must be well-formed")
}

impl SourceJson {
    pub fn build(self) -> SourceTables {
        SourceTables {
            bacterias: from_json(self.bacterias),
            skills: from_json(self.skills),
            factions: from_json(self.factions),
            skill_pools: from_json(self.skill_pools),
            troop_abilities: from_json(self.troop_abilities),
            artifacts: from_json(self.artifacts),
            term_map: self.term_map,
            icons: from_json(self.icons),
            map_entities: from_json(self.map_entities),
        }
    }

    /// Writes the tables under their source file names.
    pub fn write_to(&self, dir: &std::path::Path) {
        let files = [
            ("bacteria.json", &self.bacterias),
            ("skill.json", &self.skills),
            ("faction.json", &self.factions),
            ("skillPool.json", &self.skill_pools),
            ("troopAbility.json", &self.troop_abilities),
            ("artifact.json", &self.artifacts),
            ("termMap.json", &self.term_map),
            ("icons.json", &self.icons),
            ("adventureMapEntity.json", &self.map_entities),
        ];

        for (name, value) in files {
            std::fs::write(dir.join(name), value.to_string()).unwrap();
        }
    }
}

pub fn source() -> SourceJson {
    SourceJson {
        bacterias: json!([
            {
                "id": 1,
                "type": "GoldMine",
                "restriction": { "target": "Self" },
                "modifierData": [{ "type": "Offense", "modifier": 1.5, "amountToAdd": 2, "applicationType": 0 }],
                "income": { "resources": [{ "type": 0, "amount": 100, "allTimeAmount": 400 }] }
            },
            {
                "id": 2,
                "type": "Aura",
                "auraSettings": { "range": 2, "bacteriaToAdd": { "bacteriaType": 3 } },
                "modifierData": [{ "type": "Defense", "modifier": 0, "amountToAdd": 5, "applicationType": 0 }]
            },
            {
                "id": 3,
                "type": "Haste",
                "modifierData": [{ "type": "Movement", "modifier": 0.1, "amountToAdd": 0, "applicationType": 1 }]
            },
            {
                "id": 4,
                "type": "Composite",
                "settings": { "bacterias": [{ "bacteriaType": 1 }, { "bacteriaType": 2 }] }
            },
            {
                "id": 5,
                "type": "Blank"
            }
        ]),
        skills: json!([
            {
                "id": 10,
                "type": "Tactics",
                "icon": sprite("Tactics"),
                "levels": [
                    { "bacterias": [{ "type": 1, "duration": -1 }] },
                    { "bacterias": [{ "type": 5, "duration": 2 }, { "type": 3, "duration": 1 }] }
                ]
            },
            {
                "id": 11,
                "type": "Fireball",
                "icon": sprite("Fireball"),
                "levels": [{ "bacterias": [{ "type": 3, "duration": 0 }] }]
            },
            {
                "id": 12,
                "type": "Arcana",
                "icon": sprite("Arcana"),
                "levels": []
            }
        ]),
        factions: json!([
            {
                "id": 1,
                "type": "Arleon",
                "languageKey": "Arleon",
                "bannerSprite": sprite("ArleonBanner"),
                "symbolSprite": sprite("ArleonSymbol"),
                "wielderFrames": [sprite("ArleonFrame")],
                "commanders": [
                    {
                        "type": "Ingrid",
                        "usageType": 0,
                        "portrait": sprite("Ingrid"),
                        "stats": { "defense": 1, "offense": 2, "movement": 20, "viewRadius": 6, "command": 3 },
                        "skills": [{ "skill": 10, "level": 1 }],
                        "skillPool": 20,
                        "units": [{ "factionIndex": 0, "unitIndex": 0, "upgradeType": 1, "size": 10 }],
                        "specializations": [{ "bacteriaType": 2 }]
                    },
                    { "type": "Ingrid", "usageType": 1 },
                    { "type": "", "usageType": 0 },
                    { "type": "Nobody" }
                ],
                "units": [
                    {
                        "vanilla": {
                            "languageKey": "Swordsman",
                            "visuals": {
                                "prefab": { "sprite": sprite("Swordsman") },
                                "adventurePrefab": { "sprite": sprite("SwordsmanMap") }
                            },
                            "purchaseCost": { "costEntries": [{ "type": 0, "amount": 50 }] },
                            "obsoleteGoldCost": 25,
                            "stats": { "damage": 2 },
                            "troopAbility": 30,
                            "bacterias": []
                        },
                        "upgraded": {
                            "languageKey": "Knight",
                            "visuals": {
                                "prefab": { "sprite": sprite("Knight") },
                                "adventurePrefab": { "sprite": sprite("KnightMap") }
                            },
                            "purchaseCost": { "costEntries": [{ "type": 0, "amount": 80 }, { "type": 4, "amount": 1 }] },
                            "obsoleteGoldCost": 40,
                            "stats": { "damage": 3 },
                            "troopAbility": 31,
                            "bacterias": [{ "bacteriaType": 1 }]
                        },
                        "superUpgraded": { "languageKey": "" }
                    },
                    {
                        "vanilla": {
                            "languageKey": "Archer",
                            "purchaseCost": { "costEntries": [] },
                            "obsoleteGoldCost": 10,
                            "stats": {},
                            "troopAbility": 30
                        },
                        "upgraded": { "languageKey": null },
                        "superUpgraded": {
                            "languageKey": "Marksman",
                            "purchaseCost": { "costEntries": [] },
                            "troopAbility": 30
                        }
                    }
                ]
            },
            {
                "id": 2,
                "type": "Loth",
                "languageKey": "Loth",
                "bannerSprite": null,
                "symbolSprite": null,
                "wielderFrames": [],
                "commanders": [
                    {
                        "type": "Lich",
                        "usageType": 0,
                        "portrait": sprite("Lich"),
                        "stats": { "defense": 0, "offense": 3, "movement": 18, "viewRadius": 5, "command": 2 },
                        "skills": [],
                        "skillPool": 21,
                        "units": [{ "factionIndex": 1, "unitIndex": 0, "upgradeType": 0, "size": 30 }],
                        "specializations": []
                    }
                ],
                "units": [
                    {
                        "vanilla": {
                            "languageKey": "Skeleton",
                            "visuals": { "prefab": { "sprite": sprite("Skeleton") } },
                            "purchaseCost": { "costEntries": [{ "type": 0, "amount": 20 }] },
                            "obsoleteGoldCost": 5,
                            "stats": {},
                            "troopAbility": 30
                        },
                        "upgraded": { "languageKey": "" },
                        "superUpgraded": { "languageKey": "" }
                    }
                ]
            }
        ]),
        skill_pools: json!([
            {
                "id": 20,
                "type": "ArleonPool",
                "pools": [
                    {
                        "levelRange": { "min": 1, "max": 5 },
                        "skills": [
                            { "skill": 10, "requiresSkill": false, "requirementType": 0, "requiredSkills": [] },
                            { "skill": 11, "requiresSkill": true, "requirementType": 0, "requiredSkills": [{ "skill": 12, "level": 1 }] }
                        ]
                    },
                    {
                        "levelRange": { "min": 6, "max": 10 },
                        "skills": [
                            { "skill": 12, "requiresSkill": false, "requirementType": 1, "requiredSkills": [] },
                            { "skill": 11, "requiresSkill": false, "requirementType": 1, "requiredSkills": [] }
                        ]
                    }
                ]
            },
            { "id": 21, "type": "EmptyPool", "pools": [] }
        ]),
        troop_abilities: json!([
            { "id": 30, "type": "None", "bacterias": [] },
            { "id": 31, "type": "Charge", "icon": sprite("Charge"), "bacterias": [{ "bacteriaType": 3 }] }
        ]),
        artifacts: json!([
            { "id": 40, "type": "Crown", "icon": sprite("Crown"), "bacterias": [{ "bacteriaType": 4 }] }
        ]),
        term_map: json!({
            "Factions/Arleon/Name": { "en": "Arleon" },
            "Arleon/Ingrid/Name": { "en": "Ingrid" }
        }),
        icons: json!([sprite("Gold"), sprite("Wood")]),
        map_entities: json!([
            {
                "nameKey": "MapEntities/BuildSite/Large",
                "components": [
                    { "health": 10 },
                    {
                        "actionProviders": [
                            { "name": "NoBuildings" },
                            {
                                "availableBuildings": [
                                    {
                                        "factionId": 1,
                                        "availableMapEntities": [
                                            { "mapEntityBlueprint": barracks() },
                                            { "mapEntityBlueprint": tower() }
                                        ]
                                    }
                                ]
                            }
                        ]
                    }
                ]
            },
            {
                "nameKey": "MapEntities/Tree",
                "components": [
                    {
                        "actionProviders": [
                            { "availableBuildings": [{ "factionId": 1, "availableMapEntities": [{ "mapEntityBlueprint": shrine() }] }] }
                        ]
                    }
                ]
            },
            {
                "nameKey": "MapEntities/BuildSite/Small",
                "components": [
                    {
                        "actionProviders": [
                            { "availableBuildings": [{ "factionId": 2, "availableMapEntities": [{ "mapEntityBlueprint": barracks() }] }] }
                        ]
                    }
                ]
            }
        ]),
    }
}

fn barracks() -> Value {
    json!({
        "id": "B1",
        "nameKey": "Buildings/Barracks/Name",
        "descriptionKey": "Buildings/Barracks/Description",
        "portraitSettings": [{ "portrait": sprite("Barracks") }],
        "components": [
            {
                "incomeDefinition": {
                    "incomePerLevel": [
                        {
                            "level": 1,
                            "definition": {
                                "resources": [{ "type": 0, "amount": 250 }],
                                "troopIncomes": [
                                    {
                                        "reference": { "factionIndex": 1, "unitIndex": 0, "upgradeType": 0, "size": 5 },
                                        "requiredResearch": null,
                                        "initialInstantIncome": true
                                    }
                                ]
                            }
                        }
                    ]
                }
            },
            { "baseViewRadius": 4 },
            {
                "requirements": {
                    "cost": { "costEntries": [{ "type": 1, "amount": 10 }] },
                    "requiredBuildings": [{ "entity": "B2" }]
                }
            },
            { "maxGarrison": 3 }
        ]
    })
}

fn tower() -> Value {
    json!({
        "id": "B2",
        "nameKey": "Buildings/Tower/Name",
        "descriptionKey": "Buildings/Tower/Description",
        "portraitSettings": [{ "portrait": sprite("Tower") }],
        "components": [
            { "baseViewRadius": 2 },
            { "requirements": { "cost": { "costEntries": [] }, "requiredBuildings": [] } },
            {
                "levelUpgrades": [
                    { "requirements": { "cost": { "costEntries": [{ "type": 2, "amount": 5 }] }, "requiredBuildings": [] } }
                ]
            }
        ]
    })
}

fn shrine() -> Value {
    json!({
        "id": "B3",
        "nameKey": "Buildings/Shrine/Name",
        "components": [
            { "baseViewRadius": 1 },
            { "requirements": { "cost": { "costEntries": [] } } }
        ]
    })
}
