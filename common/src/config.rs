use std::{fs, path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    stats::GroupKind,
};

pub const DEFAULT_TARGET: &str = "/dev/scull";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Jobs run against this filename form the baseline group
    pub target: String,
    pub labels: Labels,
    pub plot: PlotConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_owned(),
            labels: Labels::default(),
            plot: PlotConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let contents = fs::read_to_string(&path)?;
        serde_yml::from_str(&contents).map_err(|source| Error::Config { path, source })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub baseline: String,
    pub candidate: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            baseline: "C".to_owned(),
            candidate: "Rust".to_owned(),
        }
    }
}

impl Labels {
    pub fn get(&self, kind: GroupKind) -> &str {
        match kind {
            GroupKind::Baseline => &self.baseline,
            GroupKind::Candidate => &self.candidate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub output_dir: PathBuf,
    pub prefix: String,
    pub scale_mode: ScaleMode,
    pub width: u32,
    pub height: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            prefix: "graph-latency-".to_owned(),
            scale_mode: ScaleMode::default(),
            width: 1200,
            height: 800,
        }
    }
}

/// How the shared y axis ceiling is derived
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    /// Largest candidate read mean
    Fixed,
    /// Largest write mean plus smallest read mean, across both groups
    #[default]
    Shared,
}

impl FromStr for ScaleMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fixed" => Ok(ScaleMode::Fixed),
            "shared" => Ok(ScaleMode::Shared),
            _ => Err(format!("Unsupported scale mode {s}, expected fixed or shared")),
        }
    }
}
