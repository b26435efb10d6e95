//! Standard HR policy templates shipped with the binary.
//!
//! Bodies live in `policies/` at the crate root and are embedded verbatim,
//! so the written files match the checked-in text byte for byte.

use super::{CatalogError, PolicySet};

pub const CODE_OF_CONDUCT: &str = include_str!("../../policies/Code_of_Conduct.txt");
pub const LEAVE: &str = include_str!("../../policies/Leave_Policy.txt");
pub const REMOTE_WORK: &str = include_str!("../../policies/Remote_Work_Policy.txt");
pub const DATA_SECURITY: &str = include_str!("../../policies/Data_Security_Policy.txt");
pub const TRAVEL_EXPENSE: &str = include_str!("../../policies/Travel_Expense_Policy.txt");
pub const PERFORMANCE_REVIEW: &str = include_str!("../../policies/Performance_Review_Policy.txt");
pub const ANTI_HARASSMENT: &str = include_str!("../../policies/Anti_Harassment_Policy.txt");
pub const EQUIPMENT_USAGE: &str = include_str!("../../policies/Equipment_Usage_Policy.txt");
pub const OVERTIME: &str = include_str!("../../policies/Overtime_Policy.txt");
pub const SOCIAL_MEDIA: &str = include_str!("../../policies/Social_Media_Policy.txt");

pub const ENTRIES: &[(&str, &str)] = &[
    ("Code_of_Conduct.txt", CODE_OF_CONDUCT),
    ("Leave_Policy.txt", LEAVE),
    ("Remote_Work_Policy.txt", REMOTE_WORK),
    ("Data_Security_Policy.txt", DATA_SECURITY),
    ("Travel_Expense_Policy.txt", TRAVEL_EXPENSE),
    ("Performance_Review_Policy.txt", PERFORMANCE_REVIEW),
    ("Anti_Harassment_Policy.txt", ANTI_HARASSMENT),
    ("Equipment_Usage_Policy.txt", EQUIPMENT_USAGE),
    ("Overtime_Policy.txt", OVERTIME),
    ("Social_Media_Policy.txt", SOCIAL_MEDIA),
];

pub fn builtin() -> Result<PolicySet, CatalogError> {
    PolicySet::from_entries(ENTRIES.iter().copied())
}
