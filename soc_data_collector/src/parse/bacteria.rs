use anyhow::Result;

use soc_data::bacteria::*;
use soc_data::Id;

use crate::context;
use crate::convert;
use crate::lookup::Table;
use crate::model::*;

/// Resolves a bacteria and everything it references.
///
/// An aura takes its modifiers from the bacteria it grants. That redirect is
/// followed for one hop only. Sub-effects of composite bacteria are resolved
/// recursively; the data is assumed to be free of cycles.
pub fn load_bacteria(bacterias: &Table<RawBacteria>, id: &Id) -> Result<Bacteria> {
    let bacteria = bacterias.get(id)?;

    let modifiers = match bacteria.aura_target() {
        Some(target) => {
            let granted = context!(bacterias.get(&target); "aura target of bacteria {id}")?;
            log::trace!("Bacteria {id} is an aura granting {target}.");
            &granted.modifier_data
        }
        None => &bacteria.modifier_data,
    };

    let modifier_data = modifiers.iter()
        .flatten()
        .map(|m| Modifier {
            kind: m.kind.clone(),
            modifier: m.modifier,
            amount_to_add: m.amount_to_add,
            application_type: m.application_type.clone(),
        })
        .collect();

    let resources_income = match &bacteria.income {
        Some(income) => context!(
            income.resources.iter().map(convert::to_resource_income).collect::<Result<Vec<_>, _>>();
            "income of bacteria {id}"
        )?,
        None => Vec::new(),
    };

    let settings = match bacteria.settings.as_ref().and_then(|s| s.bacterias.as_ref()) {
        Some(nested) => Some(BacteriaSettings {
            bacterias: context!(load_bacterias(bacterias, nested); "sub-effects of bacteria {id}")?,
        }),
        None => None,
    };

    Ok(Bacteria {
        bacteria_type: bacteria.id.clone(),
        kind: bacteria.kind.clone(),
        restriction: bacteria.restriction.clone(),
        aura_settings: bacteria.aura_settings.clone(),
        modifier_data,
        resources_income,
        settings,
    })
}

/// Resolves a list of bacteria references, keeping their order.
pub fn load_bacterias(bacterias: &Table<RawBacteria>, refs: &[RawBacteriaRef]) -> Result<Vec<Bacteria>> {
    refs.iter()
        .map(|r| load_bacteria(bacterias, &r.bacteria_type))
        .collect()
}
