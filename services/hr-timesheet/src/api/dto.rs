//! 请求/响应 DTO 与转换

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::commands::SaveEntryCommand;
use crate::domain::entities::TimesheetEntry;

/// 工时记录请求体
///
/// 创建与整体替换共用。`id` 由服务端分配，请求中出现时被忽略。
/// 缺失字段取空值/默认值，再经字段校验。
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRequest {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub employee_name: String,
    #[serde(default)]
    pub project: String,
    #[serde(default)]
    pub work_date: Option<NaiveDate>,
    #[serde(default)]
    pub hours: i32,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<EntryRequest> for SaveEntryCommand {
    fn from(req: EntryRequest) -> Self {
        // 请求中携带的 id 被丢弃，标识符始终由存储层分配
        Self {
            employee_name: req.employee_name,
            project: req.project,
            work_date: req.work_date,
            hours: req.hours,
            notes: req.notes,
        }
    }
}

/// 工时记录响应体
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryResponse {
    pub id: Option<i64>,
    pub employee_name: String,
    pub project: String,
    pub work_date: NaiveDate,
    pub hours: i32,
    pub notes: Option<String>,
}

impl From<TimesheetEntry> for EntryResponse {
    fn from(entry: TimesheetEntry) -> Self {
        Self {
            id: entry.id.map(|id| id.as_i64()),
            employee_name: entry.employee_name,
            project: entry.project,
            work_date: entry.work_date,
            hours: entry.hours,
            notes: entry.notes,
        }
    }
}
