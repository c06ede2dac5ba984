//! 值对象

mod ids;

pub use ids::EntryId;
