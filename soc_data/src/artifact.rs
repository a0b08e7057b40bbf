use serde::*;

use crate::bacteria::Bacteria;
use crate::{Id, Sprite};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    pub id: Id,
    #[serde(rename = "type")]
    pub kind: String,
    pub icon: Sprite,
    pub bacterias: Vec<Bacteria>,
}
