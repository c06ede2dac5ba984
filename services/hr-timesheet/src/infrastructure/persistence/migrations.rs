//! 数据库迁移定义

use tally_adapter_postgres::Migration;

// (employee_name, work_date) 上不设唯一约束：
// 同一员工同一天允许多条记录
const CREATE_TIMESHEET_ENTRIES: &str = r#"
CREATE TABLE IF NOT EXISTS timesheet_entries (
    id            BIGSERIAL PRIMARY KEY,
    employee_name TEXT    NOT NULL,
    project       TEXT    NOT NULL,
    work_date     DATE    NOT NULL,
    hours         INTEGER NOT NULL,
    notes         TEXT
)
"#;

/// 服务的全部迁移，按版本升序
pub fn migrations() -> Vec<Migration> {
    vec![Migration::new(
        1,
        "create_timesheet_entries",
        CREATE_TIMESHEET_ENTRIES,
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migration_versions_are_unique_and_sorted() {
        let migrations = migrations();
        let versions: Vec<i64> = migrations.iter().map(|m| m.version).collect();

        let mut sorted = versions.clone();
        sorted.sort();
        sorted.dedup();

        assert_eq!(versions, sorted);
    }

    #[test]
    fn test_initial_migration_creates_entries_table() {
        let migrations = migrations();

        assert_eq!(migrations[0].version, 1);
        assert!(migrations[0].up_sql.contains("timesheet_entries"));
    }
}
