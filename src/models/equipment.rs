//! Equipment model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::enums::EquipmentCondition;

/// Equipment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    /// Unique across all equipment when present
    pub serial_number: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub condition: EquipmentCondition,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    // Inspection validity window
    pub inspection_from: Option<NaiveDate>,
    pub inspection_to: Option<NaiveDate>,
    // Insurance
    pub insurance_company: Option<String>,
    pub insurance_policy_number: Option<String>,
    /// Third-party liability cover
    pub insurance_oc: Option<bool>,
    /// Own-damage cover
    pub insurance_ac: Option<bool>,
    pub insurance_assistance: Option<bool>,
    pub insurance_from: Option<NaiveDate>,
    pub insurance_to: Option<NaiveDate>,
    // Lease
    pub lease_company: Option<String>,
    pub lease_from: Option<NaiveDate>,
    pub lease_to: Option<NaiveDate>,
}

/// Create equipment request
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEquipment {
    pub name: String,
    pub category: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    /// Defaults to "good"
    pub condition: Option<EquipmentCondition>,
    pub notes: Option<String>,
    pub inspection_from: Option<NaiveDate>,
    pub inspection_to: Option<NaiveDate>,
    pub insurance_company: Option<String>,
    pub insurance_policy_number: Option<String>,
    pub insurance_oc: Option<bool>,
    pub insurance_ac: Option<bool>,
    pub insurance_assistance: Option<bool>,
    pub insurance_from: Option<NaiveDate>,
    pub insurance_to: Option<NaiveDate>,
    pub lease_company: Option<String>,
    pub lease_from: Option<NaiveDate>,
    pub lease_to: Option<NaiveDate>,
}

/// Update equipment request.
///
/// Absent fields are left untouched. For nullable columns an explicit `null`
/// clears the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEquipment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub brand: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub model: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub serial_number: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>, format = Date)]
    pub purchase_date: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<EquipmentCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub notes: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>, format = Date)]
    pub inspection_from: Option<Option<NaiveDate>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>, format = Date)]
    pub inspection_to: Option<Option<NaiveDate>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub insurance_company: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub insurance_policy_number: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_oc: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_ac: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_assistance: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>, format = Date)]
    pub insurance_from: Option<Option<NaiveDate>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>, format = Date)]
    pub insurance_to: Option<Option<NaiveDate>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub lease_company: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>, format = Date)]
    pub lease_from: Option<Option<NaiveDate>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>, format = Date)]
    pub lease_to: Option<Option<NaiveDate>>,
}
