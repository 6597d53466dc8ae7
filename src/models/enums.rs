//! Shared domain enums stored as text columns

use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, Postgres};
use utoipa::ToSchema;

/// Text-backed SQLx conversion for enums exposing `as_str` and `FromStr<Err = String>`
macro_rules! text_column {
    ($ty:ty) => {
        impl sqlx::Type<Postgres> for $ty {
            fn type_info() -> sqlx::postgres::PgTypeInfo {
                <&str as sqlx::Type<Postgres>>::type_info()
            }

            fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
                <&str as sqlx::Type<Postgres>>::compatible(ty)
            }
        }

        impl<'r> Decode<'r, Postgres> for $ty {
            fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
                let s = <&'r str as Decode<'r, Postgres>>::decode(value)?;
                s.parse().map_err(|e: String| e.into())
            }
        }

        impl Encode<'_, Postgres> for $ty {
            fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
                <&str as Encode<Postgres>>::encode(self.as_str(), buf)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// ---------------------------------------------------------------------------
// EquipmentCondition
// ---------------------------------------------------------------------------

/// Physical state of a piece of equipment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentCondition {
    #[default]
    Good,
    Fair,
    Poor,
    Maintenance,
}

impl EquipmentCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentCondition::Good => "good",
            EquipmentCondition::Fair => "fair",
            EquipmentCondition::Poor => "poor",
            EquipmentCondition::Maintenance => "maintenance",
        }
    }
}

impl std::str::FromStr for EquipmentCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "good" => Ok(EquipmentCondition::Good),
            "fair" => Ok(EquipmentCondition::Fair),
            "poor" => Ok(EquipmentCondition::Poor),
            "maintenance" => Ok(EquipmentCondition::Maintenance),
            _ => Err(format!("Invalid equipment condition: {}", s)),
        }
    }
}

text_column!(EquipmentCondition);

// ---------------------------------------------------------------------------
// AbsenceType
// ---------------------------------------------------------------------------

/// Classification of a time tracking entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceType {
    #[default]
    Work,
    Vacation,
    #[serde(alias = "sick")]
    SickLeave,
    UnpaidLeave,
    Absence,
}

impl AbsenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AbsenceType::Work => "work",
            AbsenceType::Vacation => "vacation",
            AbsenceType::SickLeave => "sick_leave",
            AbsenceType::UnpaidLeave => "unpaid_leave",
            AbsenceType::Absence => "absence",
        }
    }
}

impl std::str::FromStr for AbsenceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "work" => Ok(AbsenceType::Work),
            "vacation" => Ok(AbsenceType::Vacation),
            "sick_leave" | "sick" => Ok(AbsenceType::SickLeave),
            "unpaid_leave" => Ok(AbsenceType::UnpaidLeave),
            "absence" => Ok(AbsenceType::Absence),
            _ => Err(format!("Invalid absence type: {}", s)),
        }
    }
}

text_column!(AbsenceType);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_round_trips_through_text() {
        for condition in [
            EquipmentCondition::Good,
            EquipmentCondition::Fair,
            EquipmentCondition::Poor,
            EquipmentCondition::Maintenance,
        ] {
            assert_eq!(condition.as_str().parse::<EquipmentCondition>(), Ok(condition));
        }
        assert!("broken".parse::<EquipmentCondition>().is_err());
        assert_eq!(EquipmentCondition::default(), EquipmentCondition::Good);
    }

    #[test]
    fn test_absence_type_accepts_legacy_sick() {
        assert_eq!("sick".parse::<AbsenceType>(), Ok(AbsenceType::SickLeave));
        let parsed: AbsenceType = serde_json::from_str("\"sick\"").unwrap();
        assert_eq!(parsed, AbsenceType::SickLeave);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"sick_leave\"");
    }

    #[test]
    fn test_condition_json_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&EquipmentCondition::Maintenance).unwrap(),
            "\"maintenance\""
        );
    }
}
