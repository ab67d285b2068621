use std::{fs, path::Path};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Reads a JSON document from `path`.
///
/// fio prints `note:` lines ahead of its JSON output, so leading blank and
/// `note:` lines are skipped. Anything else must be the document itself.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(Error::NotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = fs::read_to_string(path)?;
    let start = preamble_len(&contents);
    if start > 0 {
        warn!(
            "Skipping {start} bytes of fio notes in {}",
            path.display()
        );
    }
    debug!("Parsing {} bytes from {}", contents.len() - start, path.display());
    serde_json::from_str(&contents[start..]).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Byte length of the leading blank and `note:` lines
fn preamble_len(contents: &str) -> usize {
    contents
        .split_inclusive('\n')
        .take_while(|line| {
            let line = line.trim();
            line.is_empty() || line.starts_with("note:")
        })
        .map(str::len)
        .sum()
}

/// Largest value, `None` for an empty slice
pub fn max_of(data: &[f64]) -> Option<f64> {
    data.iter().copied().reduce(f64::max)
}

/// Smallest value, `None` for an empty slice
pub fn min_of(data: &[f64]) -> Option<f64> {
    data.iter().copied().reduce(f64::min)
}
