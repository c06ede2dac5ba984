//! 工时记录仓储接口

use async_trait::async_trait;
use tally_errors::AppResult;

use crate::domain::entities::TimesheetEntry;
use crate::domain::value_objects::EntryId;

/// 工时记录仓储接口
///
/// 存储协作方抽象：按 ID 检索的 CRUD 原语，新记录的 ID 由存储层分配
#[async_trait]
pub trait TimesheetEntryRepository: Send + Sync {
    /// 返回全部工时记录（无排序保证）
    async fn find_all(&self) -> AppResult<Vec<TimesheetEntry>>;

    /// 根据 ID 查找
    async fn find_by_id(&self, id: EntryId) -> AppResult<Option<TimesheetEntry>>;

    /// 检查 ID 是否存在
    async fn exists_by_id(&self, id: EntryId) -> AppResult<bool>;

    /// 保存记录并返回持久化结果；id 为空时由存储层分配
    async fn save(&self, entry: TimesheetEntry) -> AppResult<TimesheetEntry>;

    /// 根据 ID 删除
    async fn delete_by_id(&self, id: EntryId) -> AppResult<()>;
}
