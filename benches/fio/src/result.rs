use serde::{Deserialize, Serialize};

/// The subset of fio's `--output-format=json` report that latency plots need.
///
/// Everything here is optional so that validation can name the job and field
/// that is missing instead of failing with a generic serde error.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FioResult {
    #[serde(rename = "fio version")]
    pub fio_version: Option<String>,
    pub time: Option<String>,
    pub jobs: Vec<Job>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub jobname: Option<String>,
    #[serde(rename = "job options", alias = "job_options")]
    pub job_options: Option<JobOptions>,
    pub read: Option<IoStats>,
    pub write: Option<IoStats>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobOptions {
    pub filename: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IoStats {
    pub lat_ns: Option<LatNs>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatNs {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub stddev: f64,
}
