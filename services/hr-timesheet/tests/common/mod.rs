//! 测试共用设施

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use hr_timesheet::application::SaveEntryCommand;
use hr_timesheet::domain::entities::TimesheetEntry;
use hr_timesheet::domain::repositories::TimesheetEntryRepository;
use hr_timesheet::domain::value_objects::EntryId;
use tally_errors::AppResult;

/// 内存版仓储，替代 PostgreSQL 存储协作方
///
/// 行为与真实仓储一致：save 在 ID 缺失时分配自增 ID
pub struct InMemoryTimesheetEntryRepository {
    entries: Mutex<BTreeMap<i64, TimesheetEntry>>,
    next_id: AtomicI64,
}

impl InMemoryTimesheetEntryRepository {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl TimesheetEntryRepository for InMemoryTimesheetEntryRepository {
    async fn find_all(&self) -> AppResult<Vec<TimesheetEntry>> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.values().cloned().collect())
    }

    async fn find_by_id(&self, id: EntryId) -> AppResult<Option<TimesheetEntry>> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.get(&id.as_i64()).cloned())
    }

    async fn exists_by_id(&self, id: EntryId) -> AppResult<bool> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.contains_key(&id.as_i64()))
    }

    async fn save(&self, mut entry: TimesheetEntry) -> AppResult<TimesheetEntry> {
        let mut entries = self.entries.lock().unwrap();
        let id = match entry.id {
            Some(id) => id.as_i64(),
            None => self.next_id.fetch_add(1, Ordering::SeqCst),
        };
        entry.id = Some(EntryId::from(id));
        entries.insert(id, entry.clone());
        Ok(entry)
    }

    async fn delete_by_id(&self, id: EntryId) -> AppResult<()> {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(&id.as_i64());
        Ok(())
    }
}

/// 构造合法的保存载荷
#[allow(dead_code)]
pub fn save_command(employee_name: &str, project: &str, work_date: &str, hours: i32) -> SaveEntryCommand {
    SaveEntryCommand {
        employee_name: employee_name.to_string(),
        project: project.to_string(),
        work_date: work_date.parse().ok(),
        hours,
        notes: None,
    }
}
