//! Time tracking entries repository

use chrono::NaiveDate;
use sqlx::{Pool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::time_entry::{parse_optional_time, CreateTimeEntry, TimeEntry, UpdateTimeEntry},
};

#[derive(Clone)]
pub struct TimeEntriesRepository {
    pool: Pool<Postgres>,
}

impl TimeEntriesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List entries ordered by work date then employee name, optionally for one project
    pub async fn list(&self, project_id: Option<&str>) -> AppResult<Vec<TimeEntry>> {
        let rows = sqlx::query_as::<_, TimeEntry>(
            r#"
            SELECT * FROM time_tracking_entries
            WHERE ($1::text IS NULL OR project_id = $1)
            ORDER BY work_date, employee_name
            "#,
        )
        .bind(project_filter(project_id))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Entries with `from <= work_date < until`
    pub async fn list_between(
        &self,
        from: NaiveDate,
        until: NaiveDate,
        project_id: Option<&str>,
    ) -> AppResult<Vec<TimeEntry>> {
        let rows = sqlx::query_as::<_, TimeEntry>(
            r#"
            SELECT * FROM time_tracking_entries
            WHERE work_date >= $1 AND work_date < $2
              AND ($3::text IS NULL OR project_id = $3)
            ORDER BY work_date, employee_name
            "#,
        )
        .bind(from)
        .bind(until)
        .bind(project_filter(project_id))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn create(&self, data: &CreateTimeEntry) -> AppResult<TimeEntry> {
        let start_time = parse_optional_time(data.start_time.as_deref())?;
        let end_time = parse_optional_time(data.end_time.as_deref())?;

        let row = sqlx::query_as::<_, TimeEntry>(
            r#"
            INSERT INTO time_tracking_entries (
                employee_id, employee_name, project_id, work_date,
                start_time, end_time, break_minutes, notes,
                absence_type, is_present
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&data.employee_id)
        .bind(&data.employee_name)
        .bind(&data.project_id)
        .bind(data.work_date)
        .bind(start_time)
        .bind(end_time)
        .bind(data.break_minutes.unwrap_or(0))
        .bind(&data.notes)
        .bind(data.absence_type.unwrap_or_default())
        .bind(data.is_present.unwrap_or(true))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(&self, id: Uuid, data: &UpdateTimeEntry) -> AppResult<TimeEntry> {
        let mut query = update_query(id, data)?;
        query
            .build_query_as::<TimeEntry>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Time entry not found".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM time_tracking_entries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Time entry not found".to_string()));
        }
        Ok(())
    }
}

/// A blank project id means no filter
fn project_filter(project_id: Option<&str>) -> Option<&str> {
    project_id.map(str::trim).filter(|p| !p.is_empty())
}

fn update_query(id: Uuid, data: &UpdateTimeEntry) -> AppResult<QueryBuilder<'static, Postgres>> {
    let start_time = data
        .start_time
        .as_ref()
        .map(|t| parse_optional_time(t.as_deref()))
        .transpose()?;
    let end_time = data
        .end_time
        .as_ref()
        .map(|t| parse_optional_time(t.as_deref()))
        .transpose()?;

    let mut qb = QueryBuilder::new("UPDATE time_tracking_entries SET updated_at = NOW()");

    macro_rules! set_field {
        ($field:expr, $column:literal) => {
            if let Some(value) = &$field {
                qb.push(concat!(", ", $column, " = ")).push_bind(value.clone());
            }
        };
    }

    set_field!(data.employee_id, "employee_id");
    set_field!(data.employee_name, "employee_name");
    set_field!(data.project_id, "project_id");
    set_field!(data.work_date, "work_date");
    set_field!(start_time, "start_time");
    set_field!(end_time, "end_time");
    set_field!(data.break_minutes, "break_minutes");
    set_field!(data.notes, "notes");
    set_field!(data.absence_type, "absence_type");
    set_field!(data.is_present, "is_present");

    qb.push(" WHERE id = ").push_bind(id).push(" RETURNING *");
    Ok(qb)
}
