use std::path::PathBuf;

use thiserror::Error;

use crate::stats::{Direction, GroupKind};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Report not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Could not parse report {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Job {job} is missing `{field}`")]
    MissingField { job: usize, field: &'static str },

    #[error("No {direction} samples to plot for the {group} group")]
    EmptyData {
        group: GroupKind,
        direction: Direction,
    },

    #[error("Failed to render plot: {0}")]
    Render(String),

    #[error("Could not read config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
