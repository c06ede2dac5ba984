//! 工时记录实体

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::EntryId;

/// 单日最大工时（含）
pub const HOURS_MAX: i32 = 24;

/// notes 字段最大长度（字符数）
pub const NOTES_MAX_CHARS: usize = 500;

/// 工时记录实体
///
/// 每条记录对应一名员工在某个项目、某个日期上的工时。
/// `id` 在首次持久化前为空，由存储层分配后不再变化。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetEntry {
    pub id: Option<EntryId>,
    pub employee_name: String,
    pub project: String,
    pub work_date: NaiveDate,
    pub hours: i32,
    pub notes: Option<String>,
}

impl TimesheetEntry {
    /// 创建未持久化的工时记录
    pub fn new(
        employee_name: impl Into<String>,
        project: impl Into<String>,
        work_date: NaiveDate,
        hours: i32,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: None,
            employee_name: employee_name.into(),
            project: project.into(),
            work_date,
            hours,
            notes,
        }
    }

    /// 是否已由存储层分配 ID
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn work_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
    }

    #[test]
    fn test_new_entry_has_no_id() {
        let entry = TimesheetEntry::new("Alice", "Apollo", work_date(), 8, None);

        assert!(entry.id.is_none());
        assert!(!entry.is_persisted());
        assert_eq!(entry.employee_name, "Alice");
        assert_eq!(entry.project, "Apollo");
        assert_eq!(entry.hours, 8);
        assert!(entry.notes.is_none());
    }

    #[test]
    fn test_persisted_entry() {
        let mut entry = TimesheetEntry::new("Alice", "Apollo", work_date(), 8, None);
        entry.id = Some(EntryId::from(42));

        assert!(entry.is_persisted());
        assert_eq!(entry.id, Some(EntryId(42)));
    }
}
