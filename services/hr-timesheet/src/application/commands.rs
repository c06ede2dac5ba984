//! 命令定义

use chrono::NaiveDate;

use crate::domain::entities::{TimesheetEntry, HOURS_MAX, NOTES_MAX_CHARS};
use crate::error::{EntryValidationError, FieldViolation};

/// 保存工时记录的载荷
///
/// 创建与整体替换共用。载荷不携带 ID：创建时由存储层分配，
/// 替换时以路径参数为准。缺失字段按空值/默认值处理，不做部分更新。
#[derive(Debug, Clone)]
pub struct SaveEntryCommand {
    pub employee_name: String,
    pub project: String,
    pub work_date: Option<NaiveDate>,
    pub hours: i32,
    pub notes: Option<String>,
}

impl SaveEntryCommand {
    /// 校验全部字段约束并构建未持久化的领域实体
    ///
    /// 一次性收集所有违规字段，任何一项违规都不会产出实体。
    pub fn into_entry(self) -> Result<TimesheetEntry, EntryValidationError> {
        let mut violations = Vec::new();

        if self.employee_name.trim().is_empty() {
            violations.push(FieldViolation::new("employeeName", "must not be blank"));
        }

        if self.project.trim().is_empty() {
            violations.push(FieldViolation::new("project", "must not be blank"));
        }

        if self.work_date.is_none() {
            violations.push(FieldViolation::new("workDate", "is required"));
        }

        if self.hours < 0 || self.hours > HOURS_MAX {
            violations.push(FieldViolation::new("hours", "must be between 0 and 24"));
        }

        if let Some(notes) = &self.notes {
            if notes.chars().count() > NOTES_MAX_CHARS {
                violations.push(FieldViolation::new(
                    "notes",
                    "must not exceed 500 characters",
                ));
            }
        }

        match self.work_date {
            Some(work_date) if violations.is_empty() => Ok(TimesheetEntry::new(
                self.employee_name,
                self.project,
                work_date,
                self.hours,
                self.notes,
            )),
            _ => Err(EntryValidationError::new(violations)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_command() -> SaveEntryCommand {
        SaveEntryCommand {
            employee_name: "Alice".to_string(),
            project: "Apollo".to_string(),
            work_date: NaiveDate::from_ymd_opt(2024, 1, 5),
            hours: 8,
            notes: None,
        }
    }

    #[test]
    fn test_valid_command() {
        let entry = valid_command().into_entry().unwrap();

        assert!(entry.id.is_none());
        assert_eq!(entry.employee_name, "Alice");
        assert_eq!(entry.project, "Apollo");
        assert_eq!(entry.hours, 8);
    }

    #[test]
    fn test_blank_employee_name() {
        let mut cmd = valid_command();
        cmd.employee_name = "".to_string();

        let err = cmd.into_entry().unwrap_err();
        assert!(err.violates("employeeName"));
    }

    #[test]
    fn test_whitespace_employee_name() {
        let mut cmd = valid_command();
        cmd.employee_name = "   ".to_string();

        let err = cmd.into_entry().unwrap_err();
        assert!(err.violates("employeeName"));
    }

    #[test]
    fn test_blank_project() {
        let mut cmd = valid_command();
        cmd.project = " ".to_string();

        let err = cmd.into_entry().unwrap_err();
        assert!(err.violates("project"));
    }

    #[test]
    fn test_missing_work_date() {
        let mut cmd = valid_command();
        cmd.work_date = None;

        let err = cmd.into_entry().unwrap_err();
        assert!(err.violates("workDate"));
    }

    #[test]
    fn test_hours_below_range() {
        let mut cmd = valid_command();
        cmd.hours = -1;

        let err = cmd.into_entry().unwrap_err();
        assert!(err.violates("hours"));
    }

    #[test]
    fn test_hours_above_range() {
        let mut cmd = valid_command();
        cmd.hours = 25;

        let err = cmd.into_entry().unwrap_err();
        assert!(err.violates("hours"));
    }

    #[test]
    fn test_hours_bounds_inclusive() {
        let mut cmd = valid_command();
        cmd.hours = 0;
        assert!(cmd.clone().into_entry().is_ok());

        // 恰好一整天也有效
        cmd.hours = 24;
        assert!(cmd.into_entry().is_ok());
    }

    #[test]
    fn test_notes_too_long() {
        let mut cmd = valid_command();
        cmd.notes = Some("x".repeat(501));

        let err = cmd.into_entry().unwrap_err();
        assert!(err.violates("notes"));
    }

    #[test]
    fn test_notes_at_limit() {
        let mut cmd = valid_command();
        cmd.notes = Some("x".repeat(500));

        assert!(cmd.into_entry().is_ok());
    }

    #[test]
    fn test_notes_length_counts_characters() {
        // 多字节字符按字符数计，不按字节数
        let mut cmd = valid_command();
        cmd.notes = Some("班".repeat(500));

        assert!(cmd.into_entry().is_ok());
    }

    #[test]
    fn test_empty_notes_are_valid() {
        // 缺失与空串有别：两者都有效，但含义不同
        let mut cmd = valid_command();
        cmd.notes = Some("".to_string());

        let entry = cmd.into_entry().unwrap();
        assert_eq!(entry.notes, Some("".to_string()));
    }

    #[test]
    fn test_all_violations_reported() {
        let cmd = SaveEntryCommand {
            employee_name: "".to_string(),
            project: "".to_string(),
            work_date: None,
            hours: 30,
            notes: Some("x".repeat(501)),
        };

        let err = cmd.into_entry().unwrap_err();
        assert_eq!(err.violations().len(), 5);
    }
}
