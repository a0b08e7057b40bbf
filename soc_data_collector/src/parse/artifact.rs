use anyhow::Result;

use soc_data::artifact::Artifact;

use crate::context;
use crate::model::*;
use crate::parse;

pub fn load_artifacts(tables: &SourceTables) -> Result<Vec<Artifact>> {
    tables.artifacts.iter().map(|a| load_artifact(tables, a)).collect()
}

pub fn load_artifact(tables: &SourceTables, raw: &RawArtifact) -> Result<Artifact> {
    Ok(Artifact {
        id: raw.id.clone(),
        kind: raw.kind.clone(),
        icon: raw.icon.clone(),
        bacterias: context!(
            parse::bacteria::load_bacterias(&tables.bacterias, &raw.bacterias);
            "bacterias of artifact {}", raw.kind
        )?,
    })
}
