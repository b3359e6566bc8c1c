//! Domain records managed by the dashboard.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employment category of a posting. Serialized with the human-readable
/// labels the job API expects (`"Full Time"`, `"Part Time"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JobType {
    #[default]
    #[serde(rename = "Full Time")]
    FullTime,
    #[serde(rename = "Part Time")]
    PartTime,
    Contract,
    Internship,
}

impl JobType {
    /// All variants in menu order.
    pub const ALL: [JobType; 4] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Internship,
    ];
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobType::FullTime => write!(f, "Full Time"),
            JobType::PartTime => write!(f, "Part Time"),
            JobType::Contract => write!(f, "Contract"),
            JobType::Internship => write!(f, "Internship"),
        }
    }
}

impl std::str::FromStr for JobType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', " ").as_str() {
            "full time" | "fulltime" => Ok(JobType::FullTime),
            "part time" | "parttime" => Ok(JobType::PartTime),
            "contract" => Ok(JobType::Contract),
            "internship" => Ok(JobType::Internship),
            _ => anyhow::bail!(
                "Invalid job type '{}'. Valid values: full-time, part-time, contract, internship",
                s
            ),
        }
    }
}

/// A job posting as exchanged with the job resource endpoint.
///
/// `id` is server-assigned and absent before creation; it is skipped on
/// serialization so a create payload carries no id field. Every other field
/// is expected to be non-empty at submission time, but enforcement happens
/// only at the input prompt, never against a schema before transmission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub job_title: String,
    pub company_name: String,
    pub address: String,
    pub job_type: JobType,
    pub salary: String,
    pub deadline: NaiveDate,
    pub job_link: String,
}
