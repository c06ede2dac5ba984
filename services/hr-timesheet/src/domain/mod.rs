//! 领域层

pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::TimesheetEntry;
pub use repositories::TimesheetEntryRepository;
pub use value_objects::EntryId;
