//! Dashboard overview counts.

use serde::Serialize;

/// Number of entries in each collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub projects: usize,
    pub skills: usize,
    pub experience: usize,
}
