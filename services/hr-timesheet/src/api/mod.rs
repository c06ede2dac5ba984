//! API layer - REST 路由与处理器

mod dto;
mod routes;

pub use dto::{EntryRequest, EntryResponse};
pub use routes::{ops_routes, timesheet_routes};
