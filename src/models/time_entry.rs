//! Time tracking entry model

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::enums::AbsenceType;
use crate::error::{AppError, AppResult};

/// One employee's day on a project
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: Uuid,
    pub employee_id: String,
    pub employee_name: String,
    pub project_id: String,
    pub work_date: NaiveDate,
    #[schema(value_type = Option<String>, example = "08:00:00")]
    pub start_time: Option<NaiveTime>,
    #[schema(value_type = Option<String>, example = "16:00:00")]
    pub end_time: Option<NaiveTime>,
    /// Unpaid break in minutes
    pub break_minutes: i32,
    pub notes: Option<String>,
    pub absence_type: AbsenceType,
    pub is_present: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TimeEntry {
    /// Hours actually worked: end minus start minus break, never negative.
    /// Only `work` entries with both times set count.
    pub fn worked_hours(&self) -> f64 {
        if self.absence_type != AbsenceType::Work {
            return 0.0;
        }
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => {
                let minutes = (end - start).num_minutes() - i64::from(self.break_minutes);
                (minutes.max(0) as f64) / 60.0
            }
            _ => 0.0,
        }
    }
}

/// Create time entry request
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimeEntry {
    pub employee_id: String,
    pub employee_name: String,
    pub project_id: String,
    /// Work date (YYYY-MM-DD)
    pub work_date: NaiveDate,
    /// Start time (HH:MM)
    pub start_time: Option<String>,
    /// End time (HH:MM)
    pub end_time: Option<String>,
    /// Defaults to 0
    #[validate(range(min = 0, message = "Break minutes cannot be negative"))]
    pub break_minutes: Option<i32>,
    pub notes: Option<String>,
    /// Defaults to "work"
    pub absence_type: Option<AbsenceType>,
    /// Defaults to true
    pub is_present: Option<bool>,
}

/// Update time entry request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTimeEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub start_time: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub end_time: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, message = "Break minutes cannot be negative"))]
    pub break_minutes: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub notes: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absence_type: Option<AbsenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_present: Option<bool>,
}

/// Query parameters for listing time entries
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TimeEntryQuery {
    /// Restrict to one project
    pub project_id: Option<String>,
}

/// Query parameters for the monthly report
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TimeReportQuery {
    /// Month (YYYY-MM)
    pub month: String,
    pub project_id: Option<String>,
}

/// Monthly totals for one employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeMonthlySummary {
    pub employee_id: String,
    pub employee_name: String,
    pub worked_hours: f64,
    pub work_days: u32,
    pub vacation_days: u32,
    pub sick_leave_days: u32,
    pub unpaid_leave_days: u32,
    pub absence_days: u32,
}

/// Parse a time of day given as HH:MM or HH:MM:SS
pub fn parse_time_of_day(value: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| AppError::Validation(format!("Invalid time of day: {}", value)))
}

/// Parse an optional time of day, treating an empty string as absent
pub fn parse_optional_time(value: Option<&str>) -> AppResult<Option<NaiveTime>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => parse_time_of_day(v).map(Some),
        None => Ok(None),
    }
}

/// First day of the month and first day of the following month for "YYYY-MM"
pub fn month_bounds(month: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::Validation(format!("Invalid month (expected YYYY-MM): {}", month));

    let (year, month_num) = month.split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month_num: u32 = month_num.parse().map_err(|_| invalid())?;

    let start = NaiveDate::from_ymd_opt(year, month_num, 1).ok_or_else(invalid)?;
    let end = if month_num == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month_num + 1, 1)
    }
    .ok_or_else(invalid)?;

    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(start: Option<&str>, end: Option<&str>, break_minutes: i32, kind: AbsenceType) -> TimeEntry {
        TimeEntry {
            id: Uuid::new_v4(),
            employee_id: "e-1".to_string(),
            employee_name: "Jan Kowalski".to_string(),
            project_id: "p-1".to_string(),
            work_date: NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
            start_time: start.map(|s| parse_time_of_day(s).unwrap()),
            end_time: end.map(|s| parse_time_of_day(s).unwrap()),
            break_minutes,
            notes: None,
            absence_type: kind,
            is_present: kind == AbsenceType::Work,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_parse_time_of_day() {
        assert_eq!(parse_time_of_day("08:00").unwrap(), NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert_eq!(parse_time_of_day("16:30:15").unwrap(), NaiveTime::from_hms_opt(16, 30, 15).unwrap());
        assert!(parse_time_of_day("8 o'clock").is_err());
        assert_eq!(parse_optional_time(Some("")).unwrap(), None);
        assert_eq!(parse_optional_time(None).unwrap(), None);
    }

    #[test]
    fn test_worked_hours() {
        assert_eq!(entry(Some("08:00"), Some("16:00"), 30, AbsenceType::Work).worked_hours(), 7.5);
        assert_eq!(entry(Some("08:00"), Some("16:00"), 0, AbsenceType::Vacation).worked_hours(), 0.0);
        assert_eq!(entry(Some("08:00"), None, 0, AbsenceType::Work).worked_hours(), 0.0);
        // Break longer than the shift
        assert_eq!(entry(Some("08:00"), Some("08:20"), 30, AbsenceType::Work).worked_hours(), 0.0);
        // End before start
        assert_eq!(entry(Some("16:00"), Some("08:00"), 0, AbsenceType::Work).worked_hours(), 0.0);
    }

    #[test]
    fn test_month_bounds() {
        let (start, end) = month_bounds("2024-12").unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());

        let (start, end) = month_bounds("2024-02").unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

        assert!(month_bounds("2024-13").is_err());
        assert!(month_bounds("May 2024").is_err());
    }

    #[test]
    fn test_negative_break_is_rejected() {
        let create = CreateTimeEntry {
            employee_id: "e-1".to_string(),
            employee_name: "Jan Kowalski".to_string(),
            project_id: "P-1".to_string(),
            work_date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            start_time: Some("08:00".to_string()),
            end_time: Some("16:00".to_string()),
            break_minutes: Some(-600),
            notes: None,
            absence_type: None,
            is_present: None,
        };
        assert!(create.validate().is_err());

        let zero = CreateTimeEntry { break_minutes: Some(0), ..create.clone() };
        assert!(zero.validate().is_ok());

        let update = UpdateTimeEntry {
            break_minutes: Some(-1),
            ..Default::default()
        };
        assert!(update.validate().is_err());
        assert!(UpdateTimeEntry::default().validate().is_ok());
    }
}
