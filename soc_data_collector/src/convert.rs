//! Provides functions to convert raw indices to model values.

use soc_data::faction::UpgradeTier;
use soc_data::resource::*;

use crate::model::*;

/// Converts a resource index.
pub fn to_resource_type(index: usize) -> Result<ResourceType, DataError> {
    ResourceType::from_index(index).ok_or(DataError::UnknownResourceType(index))
}

/// Converts an upgrade tier index.
pub fn to_upgrade_tier(index: usize) -> Result<UpgradeTier, DataError> {
    UpgradeTier::from_index(index).ok_or(DataError::UnknownUpgradeTier(index))
}

pub fn to_cost_entry(raw: &RawCostEntry) -> Result<CostEntry, DataError> {
    Ok(CostEntry {
        resource: to_resource_type(raw.kind)?,
        amount: raw.amount,
    })
}

pub fn to_cost_entries(raw: &[RawCostEntry]) -> Result<Vec<CostEntry>, DataError> {
    raw.iter().map(to_cost_entry).collect()
}

pub fn to_resource_income(raw: &RawResourceIncome) -> Result<ResourceIncome, DataError> {
    Ok(ResourceIncome {
        resource: to_resource_type(raw.kind)?,
        amount: raw.amount,
        all_time_amount: raw.all_time_amount,
    })
}
