//! Time tracking service

use std::collections::HashMap;

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::AbsenceType,
        time_entry::{
            month_bounds, CreateTimeEntry, EmployeeMonthlySummary, TimeEntry, TimeReportQuery,
            UpdateTimeEntry,
        },
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct TimeEntriesService {
    repository: Repository,
}

impl TimeEntriesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, project_id: Option<&str>) -> AppResult<Vec<TimeEntry>> {
        self.repository.time_entries.list(project_id).await
    }

    pub async fn create(&self, data: &CreateTimeEntry) -> AppResult<TimeEntry> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.time_entries.create(data).await
    }

    pub async fn update(&self, id: Uuid, data: &UpdateTimeEntry) -> AppResult<TimeEntry> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.time_entries.update(id, data).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.time_entries.delete(id).await
    }

    /// Per-employee totals for one month
    pub async fn monthly_report(&self, query: &TimeReportQuery) -> AppResult<Vec<EmployeeMonthlySummary>> {
        let (from, until) = month_bounds(&query.month)?;
        let entries = self
            .repository
            .time_entries
            .list_between(from, until, query.project_id.as_deref())
            .await?;
        Ok(summarize(&entries))
    }
}

/// Aggregate entries by employee, ordered by employee name
pub fn summarize(entries: &[TimeEntry]) -> Vec<EmployeeMonthlySummary> {
    let mut by_employee: HashMap<&str, EmployeeMonthlySummary> = HashMap::new();

    for entry in entries {
        let summary = by_employee
            .entry(entry.employee_id.as_str())
            .or_insert_with(|| EmployeeMonthlySummary {
                employee_id: entry.employee_id.clone(),
                employee_name: entry.employee_name.clone(),
                worked_hours: 0.0,
                work_days: 0,
                vacation_days: 0,
                sick_leave_days: 0,
                unpaid_leave_days: 0,
                absence_days: 0,
            });

        summary.worked_hours += entry.worked_hours();
        match entry.absence_type {
            AbsenceType::Work => summary.work_days += 1,
            AbsenceType::Vacation => summary.vacation_days += 1,
            AbsenceType::SickLeave => summary.sick_leave_days += 1,
            AbsenceType::UnpaidLeave => summary.unpaid_leave_days += 1,
            AbsenceType::Absence => summary.absence_days += 1,
        }
    }

    let mut summaries: Vec<EmployeeMonthlySummary> = by_employee
        .into_values()
        .map(|mut s| {
            s.worked_hours = (s.worked_hours * 100.0).round() / 100.0;
            s
        })
        .collect();
    summaries.sort_by(|a, b| {
        a.employee_name
            .cmp(&b.employee_name)
            .then_with(|| a.employee_id.cmp(&b.employee_id))
    });
    summaries
}
