//! Predicate filters over the blood-bank and donor directories.

use crate::core::errors::LifeFlowError;
use crate::core::models::{BloodBank, BloodType, DonorListing, InventoryStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Wildcard accepted wherever a blood type or availability filter is expected.
pub const ANY: &str = "all";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BloodBankFilter {
    pub blood_type: Option<BloodType>,
    pub location: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DonorFilter {
    pub blood_type: Option<BloodType>,
    pub location: Option<String>,
    pub available_only: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BloodBankResult {
    #[serde(flatten)]
    pub bank: BloodBank,
    #[schema(value_type = Object)]
    pub inventory_status: BTreeMap<BloodType, InventoryStatus>,
}

impl From<BloodBank> for BloodBankResult {
    fn from(bank: BloodBank) -> Self {
        let inventory_status = BloodType::ALL
            .into_iter()
            .map(|bt| (bt, InventoryStatus::from_units(bank.units_of(bt))))
            .collect();
        BloodBankResult { bank, inventory_status }
    }
}

/// `None`, empty and `"all"` mean no blood type filter.
pub fn parse_blood_type_filter(raw: Option<&str>) -> Result<Option<BloodType>, LifeFlowError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let value = raw.trim();
    if value.is_empty() || value == ANY {
        return Ok(None);
    }
    // An unencoded `+` in a query string is decoded as a space
    let value = if raw.trim_start().ends_with(' ') && !value.ends_with(['+', '-']) {
        format!("{}+", value)
    } else {
        value.to_string()
    };
    value
        .parse::<BloodType>()
        .map(Some)
        .map_err(|e| LifeFlowError::invalid("bloodType", e))
}

pub fn parse_availability_filter(raw: Option<&str>) -> Result<bool, LifeFlowError> {
    match raw.map(str::trim) {
        None | Some("") | Some(ANY) => Ok(false),
        Some("available") => Ok(true),
        Some(other) => Err(LifeFlowError::invalid(
            "availability",
            format!("Expected `all` or `available`, got `{}`", other),
        )),
    }
}

fn location_matches(field: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(n) if !n.is_empty() => field.to_lowercase().contains(&n.to_lowercase()),
        _ => true,
    }
}

pub fn filter_blood_banks(banks: &[BloodBank], filter: &BloodBankFilter) -> Vec<BloodBank> {
    banks
        .iter()
        .filter(|bank| filter.blood_type.is_none_or(|bt| bank.units_of(bt) > 0))
        .filter(|bank| location_matches(&bank.address, filter.location.as_deref()))
        .cloned()
        .collect()
}

pub fn filter_donors(donors: &[DonorListing], filter: &DonorFilter) -> Vec<DonorListing> {
    donors
        .iter()
        .filter(|donor| filter.blood_type.is_none_or(|bt| donor.blood_type == bt))
        .filter(|donor| location_matches(&donor.location, filter.location.as_deref()))
        .filter(|donor| !filter.available_only || donor.available)
        .cloned()
        .collect()
}
