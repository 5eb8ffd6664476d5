//! Dashboard statistics.

use serde::{Deserialize, Serialize};

/// `GET /stats/overview`. The backend keys have no external aliases.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OverviewStats {
    pub total_tasks: u64,
    #[serde(rename = "pendentes")]
    pub pending: u64,
    #[serde(rename = "em_progresso")]
    pub in_progress: u64,
    #[serde(rename = "concluidas")]
    pub completed: u64,
    /// Percentage of completed tasks, one decimal place
    #[serde(rename = "taxa_conclusao")]
    pub completion_rate: f64,
}

/// One row of `GET /stats/by-empresa`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompanyStats {
    #[serde(default)]
    pub company: Option<String>,
    pub total: u64,
}
