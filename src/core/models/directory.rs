use super::blood_type::BloodType;
use crate::constants::LOW_INVENTORY_UNITS;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BloodBank {
    pub id: u64,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub distance: String,
    pub hours: String,
    /// Units on hand per blood type; a missing type counts as zero.
    #[schema(value_type = Object)]
    pub inventory: BTreeMap<BloodType, u32>,
}

impl BloodBank {
    pub fn units_of(&self, blood_type: BloodType) -> u32 {
        self.inventory.get(&blood_type).copied().unwrap_or(0)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InventoryStatus {
    Out,
    Low,
    Available,
}

impl InventoryStatus {
    pub fn from_units(units: u32) -> Self {
        match units {
            0 => InventoryStatus::Out,
            u if u <= LOW_INVENTORY_UNITS => InventoryStatus::Low,
            _ => InventoryStatus::Available,
        }
    }
}

/// Public listing of a donor willing to be contacted; separate from user records.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DonorListing {
    pub id: u64,
    pub name: String,
    pub blood_type: BloodType,
    pub location: String,
    #[schema(value_type = String, example = "2023-03-15")]
    pub last_donation: NaiveDate,
    pub total_donations: u32,
    pub available: bool,
}
