//! PostgreSQL implementation of TimesheetEntryRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tally_errors::{AppError, AppResult};

use crate::domain::entities::TimesheetEntry;
use crate::domain::repositories::TimesheetEntryRepository;
use crate::domain::value_objects::EntryId;

pub struct PostgresTimesheetEntryRepository {
    pool: PgPool,
}

impl PostgresTimesheetEntryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// timesheet_entries 表的行映射
///
/// 实体与行表示之间的显式映射只定义在这里
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
struct EntryRow {
    id: i64,
    employee_name: String,
    project: String,
    work_date: NaiveDate,
    hours: i32,
    notes: Option<String>,
}

impl EntryRow {
    /// 由已持久化的实体构建行；尚未分配 ID 时返回 None
    fn from_entry(entry: &TimesheetEntry) -> Option<Self> {
        let id = entry.id?;
        Some(Self {
            id: id.as_i64(),
            employee_name: entry.employee_name.clone(),
            project: entry.project.clone(),
            work_date: entry.work_date,
            hours: entry.hours,
            notes: entry.notes.clone(),
        })
    }

    fn into_entry(self) -> TimesheetEntry {
        TimesheetEntry {
            id: Some(EntryId::from(self.id)),
            employee_name: self.employee_name,
            project: self.project,
            work_date: self.work_date,
            hours: self.hours,
            notes: self.notes,
        }
    }
}

#[async_trait]
impl TimesheetEntryRepository for PostgresTimesheetEntryRepository {
    async fn find_all(&self) -> AppResult<Vec<TimesheetEntry>> {
        let rows = sqlx::query_as::<_, EntryRow>(
            r#"
            SELECT id, employee_name, project, work_date, hours, notes
            FROM timesheet_entries
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list timesheet entries: {}", e)))?;

        Ok(rows.into_iter().map(EntryRow::into_entry).collect())
    }

    async fn find_by_id(&self, id: EntryId) -> AppResult<Option<TimesheetEntry>> {
        let row = sqlx::query_as::<_, EntryRow>(
            r#"
            SELECT id, employee_name, project, work_date, hours, notes
            FROM timesheet_entries
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to find timesheet entry: {}", e)))?;

        Ok(row.map(EntryRow::into_entry))
    }

    async fn exists_by_id(&self, id: EntryId) -> AppResult<bool> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM timesheet_entries WHERE id = $1)")
                .bind(id.as_i64())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::database(format!("Failed to check timesheet entry: {}", e))
                })?;

        Ok(exists.0)
    }

    async fn save(&self, entry: TimesheetEntry) -> AppResult<TimesheetEntry> {
        match EntryRow::from_entry(&entry) {
            // 已有 ID：整体覆盖除 ID 外的全部列
            Some(row) => {
                sqlx::query(
                    r#"
                    UPDATE timesheet_entries SET
                        employee_name = $2, project = $3, work_date = $4, hours = $5, notes = $6
                    WHERE id = $1
                    "#,
                )
                .bind(row.id)
                .bind(&row.employee_name)
                .bind(&row.project)
                .bind(row.work_date)
                .bind(row.hours)
                .bind(&row.notes)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::database(format!("Failed to update timesheet entry: {}", e))
                })?;

                Ok(entry)
            }
            // 无 ID：插入并取回存储层分配的 ID
            None => {
                let row = sqlx::query_as::<_, EntryRow>(
                    r#"
                    INSERT INTO timesheet_entries (employee_name, project, work_date, hours, notes)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING id, employee_name, project, work_date, hours, notes
                    "#,
                )
                .bind(&entry.employee_name)
                .bind(&entry.project)
                .bind(entry.work_date)
                .bind(entry.hours)
                .bind(&entry.notes)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::database(format!("Failed to save timesheet entry: {}", e))
                })?;

                Ok(row.into_entry())
            }
        }
    }

    async fn delete_by_id(&self, id: EntryId) -> AppResult<()> {
        sqlx::query("DELETE FROM timesheet_entries WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete timesheet entry: {}", e)))?;

        Ok(())
    }
}
