//! Turns the raw source tables into the published collections.
//!
//! Factions are built first; wielders and buildings refer to unit tiers
//! through the finished faction list.

pub mod artifact;
pub mod bacteria;
pub mod building;
pub mod faction;
pub mod skill;
pub mod unit;
pub mod wielder;
