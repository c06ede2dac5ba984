//! Business logic handler

use std::sync::Arc;

use tally_errors::{AppError, AppResult};
use tracing::{info, warn};

use crate::application::commands::SaveEntryCommand;
use crate::domain::entities::TimesheetEntry;
use crate::domain::repositories::TimesheetEntryRepository;
use crate::domain::value_objects::EntryId;

pub struct ServiceHandler {
    entry_repo: Arc<dyn TimesheetEntryRepository>,
}

impl ServiceHandler {
    pub fn new(entry_repo: Arc<dyn TimesheetEntryRepository>) -> Self {
        Self { entry_repo }
    }

    /// 查询全部工时记录
    pub async fn list_entries(&self) -> AppResult<Vec<TimesheetEntry>> {
        self.entry_repo.find_all().await
    }

    /// 创建工时记录
    ///
    /// 校验在任何存储调用之前完成，无效记录不会落库。
    pub async fn create_entry(&self, cmd: SaveEntryCommand) -> AppResult<TimesheetEntry> {
        let entry = cmd.into_entry().map_err(|e| {
            warn!(error = %e, "Rejected timesheet entry");
            AppError::from(e)
        })?;

        let saved = self.entry_repo.save(entry).await?;

        info!(
            entry_id = ?saved.id,
            employee = %saved.employee_name,
            project = %saved.project,
            "Timesheet entry created"
        );

        Ok(saved)
    }

    /// 整体替换工时记录
    ///
    /// 先按 ID 查找：不存在返回 NotFound；存在则校验载荷，
    /// 覆盖除 ID 外的全部字段后持久化。
    pub async fn update_entry(
        &self,
        id: EntryId,
        cmd: SaveEntryCommand,
    ) -> AppResult<TimesheetEntry> {
        let existing = match self.entry_repo.find_by_id(id).await? {
            Some(entry) => entry,
            None => {
                return Err(AppError::not_found(format!(
                    "Timesheet entry {} not found",
                    id
                )));
            }
        };

        let replacement = cmd.into_entry().map_err(|e| {
            warn!(entry_id = %id, error = %e, "Rejected timesheet entry update");
            AppError::from(e)
        })?;

        let updated = TimesheetEntry {
            id: existing.id,
            ..replacement
        };

        let saved = self.entry_repo.save(updated).await?;

        info!(entry_id = %id, "Timesheet entry updated");

        Ok(saved)
    }

    /// 删除工时记录
    ///
    /// 删除前检查存在性：未知 ID 返回 NotFound，不产生副作用。
    pub async fn delete_entry(&self, id: EntryId) -> AppResult<()> {
        if !self.entry_repo.exists_by_id(id).await? {
            return Err(AppError::not_found(format!(
                "Timesheet entry {} not found",
                id
            )));
        }

        self.entry_repo.delete_by_id(id).await?;

        info!(entry_id = %id, "Timesheet entry deleted");

        Ok(())
    }
}
