use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Ring size used when nothing else is configured.
pub const DEFAULT_CAPACITY: usize = 100;

/// How many snapshots a history may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capacity {
    /// Growable storage, never evicts.
    Unbounded,
    /// Ring of exactly this many slots; the oldest snapshot is evicted when full.
    Fixed(NonZeroUsize),
}

impl Capacity {
    /// Number of slots, `0` for unbounded.
    pub fn get(self) -> usize {
        match self {
            Capacity::Unbounded => 0,
            Capacity::Fixed(n) => n.get(),
        }
    }

    pub fn is_unbounded(self) -> bool {
        matches!(self, Capacity::Unbounded)
    }
}

impl From<usize> for Capacity {
    /// `0` selects unbounded growth, anything else a ring of that size.
    fn from(value: usize) -> Self {
        match NonZeroUsize::new(value) {
            Some(n) => Capacity::Fixed(n),
            None => Capacity::Unbounded,
        }
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Capacity::from(DEFAULT_CAPACITY)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Capacity::Unbounded => write!(f, "unbounded"),
            Capacity::Fixed(n) => write!(f, "{}", n),
        }
    }
}

/// Deserializable history settings.
///
/// ```json
/// { "capacity": 50 }
/// ```
///
/// A `capacity` of `0` selects unbounded growth. A missing field falls back to
/// [`DEFAULT_CAPACITY`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct HistoryConfig {
    pub capacity: usize,
}

impl HistoryConfig {
    pub fn new(capacity: usize) -> Self {
        HistoryConfig { capacity }
    }

    /// Parse settings from a json string.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read settings from a json file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    pub fn capacity(&self) -> Capacity {
        Capacity::from(self.capacity)
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig { capacity: DEFAULT_CAPACITY }
    }
}
