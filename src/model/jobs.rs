use hv_status::JobState;
use serde::{Deserialize, Serialize};

/// Job row as reported by the scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    pub job_id: String,
    pub name: String,
    pub state: JobState,
    #[serde(default)]
    pub partition: Option<String>,
}
