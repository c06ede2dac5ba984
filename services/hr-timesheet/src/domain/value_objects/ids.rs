//! 工时记录 ID

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// 工时记录 ID
///
/// 由存储层在首次保存时分配（自增），之后不可变
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, From,
)]
#[display("{_0}")]
pub struct EntryId(pub i64);

impl EntryId {
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}
