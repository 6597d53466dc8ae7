//! Data models for Worksite

pub mod assignment;
pub mod enums;
pub mod equipment;
pub mod system_user;
pub mod time_entry;

// Re-export commonly used types
pub use assignment::{EquipmentAssignment, ManagerAssignment};
pub use enums::{AbsenceType, EquipmentCondition};
pub use equipment::Equipment;
pub use system_user::SystemUser;
pub use time_entry::TimeEntry;
