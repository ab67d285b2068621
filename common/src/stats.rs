use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    /// Jobs whose filename matches the configured target
    Baseline,
    /// Everything else
    Candidate,
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKind::Baseline => write!(f, "baseline"),
            GroupKind::Candidate => write!(f, "candidate"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Read,
    Write,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Read => write!(f, "read"),
            Direction::Write => write!(f, "write"),
        }
    }
}

/// min/max/mean/stddev of one latency block, in microseconds once scaled
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatencySample {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub stddev: f64,
}

impl LatencySample {
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            min: self.min * factor,
            max: self.max * factor,
            mean: self.mean * factor,
            stddev: self.stddev * factor,
        }
    }
}

/// Parallel sequences of per-job latency statistics for one direction.
///
/// The four vectors are only ever pushed together, so they always have the
/// same length.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LatencySeries {
    mins: Vec<f64>,
    maxes: Vec<f64>,
    means: Vec<f64>,
    stddevs: Vec<f64>,
}

impl LatencySeries {
    pub fn push(&mut self, min: f64, max: f64, mean: f64, stddev: f64) {
        self.mins.push(min);
        self.maxes.push(max);
        self.means.push(mean);
        self.stddevs.push(stddev);
    }

    pub fn len(&self) -> usize {
        self.means.len()
    }

    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }

    pub fn mins(&self) -> &[f64] {
        &self.mins
    }

    pub fn maxes(&self) -> &[f64] {
        &self.maxes
    }

    pub fn means(&self) -> &[f64] {
        &self.means
    }

    pub fn stddevs(&self) -> &[f64] {
        &self.stddevs
    }

    pub fn sample(&self, idx: usize) -> Option<LatencySample> {
        Some(LatencySample {
            min: *self.mins.get(idx)?,
            max: *self.maxes.get(idx)?,
            mean: *self.means.get(idx)?,
            stddev: *self.stddevs.get(idx)?,
        })
    }

    /// Summary of the per-job means, `None` if nothing was recorded
    pub fn summary(&self) -> Option<SeriesSummary> {
        if self.means.is_empty() {
            return None;
        }
        let sorted = self
            .means
            .iter()
            .copied()
            .sorted_by(f64::total_cmp)
            .collect::<Vec<_>>();
        let count = sorted.len();
        let median = if count % 2 == 0 {
            (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
        } else {
            sorted[count / 2]
        };
        Some(SeriesSummary {
            count,
            min: sorted[0],
            max: sorted[count - 1],
            median,
            mean: sorted.iter().sum::<f64>() / count as f64,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub mean: f64,
}

impl fmt::Display for SeriesSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} min={:.3}us median={:.3}us mean={:.3}us max={:.3}us",
            self.count, self.min, self.median, self.mean, self.max
        )
    }
}

/// Read and write latencies collected for one comparison group
#[derive(Debug, Clone, PartialEq)]
pub struct StatGroup {
    kind: GroupKind,
    reads: LatencySeries,
    writes: LatencySeries,
}

impl StatGroup {
    pub fn new(kind: GroupKind) -> Self {
        Self {
            kind,
            reads: LatencySeries::default(),
            writes: LatencySeries::default(),
        }
    }

    pub fn add_read(&mut self, min: f64, max: f64, mean: f64, stddev: f64) {
        self.reads.push(min, max, mean, stddev);
    }

    pub fn add_write(&mut self, min: f64, max: f64, mean: f64, stddev: f64) {
        self.writes.push(min, max, mean, stddev);
    }

    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    pub fn reads(&self) -> &LatencySeries {
        &self.reads
    }

    pub fn writes(&self) -> &LatencySeries {
        &self.writes
    }

    pub fn series(&self, direction: Direction) -> &LatencySeries {
        match direction {
            Direction::Read => &self.reads,
            Direction::Write => &self.writes,
        }
    }
}
