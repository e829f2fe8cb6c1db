//! Port-to-port distance table.
//!
//! Distances are keyed by the ordered pair `"{from}-{to}"` (case-sensitive,
//! hyphen-joined). Lookups are direction-sensitive: `A-B` and `B-A` are
//! independent entries and a missing direction falls back to the table's
//! default distance rather than mirroring the other one.
//!
//! The built-in table is process-wide immutable data. Alternate tables can be
//! loaded from JSON or CSV and injected into an [`EtaEngine`](crate::EtaEngine).

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use csv::{ReaderBuilder, Trim};
use once_cell::sync::Lazy;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Distance (nautical miles) applied to any port pair missing from a table.
pub const DEFAULT_DISTANCE_NM: f64 = 1000.0;

/// Reserved key that carries the fallback distance in serialized tables.
pub const DEFAULT_KEY: &str = "_default";

const BUILTIN_DISTANCES: &[(&str, &str, f64)] = &[
    ("Mumbai", "Singapore", 1800.0),
    ("Singapore", "Colombo", 1200.0),
    ("Colombo", "Dubai", 1600.0),
    ("Dubai", "Rotterdam", 4200.0),
    ("Rotterdam", "Hamburg", 300.0),
    ("Hamburg", "Antwerp", 250.0),
    ("Singapore", "HongKong", 1300.0),
    ("HongKong", "Shanghai", 800.0),
    ("Shanghai", "Tokyo", 1100.0),
    ("Tokyo", "Yokohama", 20.0),
    ("Yokohama", "Busan", 600.0),
    ("Busan", "Shanghai", 500.0),
    ("LosAngeles", "LongBeach", 20.0),
    ("LongBeach", "Sydney", 6500.0),
    ("Sydney", "Melbourne", 500.0),
    ("Mumbai", "Colombo", 700.0),
    ("Colombo", "Singapore", 1200.0),
    ("NewYork", "Rotterdam", 3400.0),
    ("Santos", "Durban", 3800.0),
    ("Durban", "Mumbai", 4200.0),
];

static BUILTIN: Lazy<Arc<DistanceTable>> = Lazy::new(|| {
    let entries = BUILTIN_DISTANCES
        .iter()
        .map(|(from, to, nm)| (distance_key(from, to), *nm))
        .collect();
    Arc::new(DistanceTable {
        entries,
        default_nm: DEFAULT_DISTANCE_NM,
        source: None,
    })
});

/// Build the lookup key for an ordered port pair.
pub fn distance_key(from: &str, to: &str) -> String {
    format!("{from}-{to}")
}

/// Immutable mapping from ordered port pair to distance in nautical miles.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable {
    entries: HashMap<String, f64>,
    default_nm: f64,
    source: Option<PathBuf>,
}

impl Default for DistanceTable {
    fn default() -> Self {
        BUILTIN.as_ref().clone()
    }
}

impl DistanceTable {
    /// Shared handle to the built-in port distance dataset.
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// Create an empty table that answers every lookup with `default_nm`.
    pub fn empty(default_nm: f64) -> Result<Self> {
        validate_distance(DEFAULT_KEY, default_nm)?;
        Ok(Self {
            entries: HashMap::new(),
            default_nm,
            source: None,
        })
    }

    /// Builder-style insert of a single directed entry.
    pub fn with_entry(mut self, from: &str, to: &str, distance_nm: f64) -> Result<Self> {
        self.insert(from, to, distance_nm)?;
        Ok(self)
    }

    /// Insert or replace the distance for the ordered pair `from -> to`.
    pub fn insert(&mut self, from: &str, to: &str, distance_nm: f64) -> Result<()> {
        let key = distance_key(from, to);
        validate_distance(&key, distance_nm)?;
        self.entries.insert(key, distance_nm);
        Ok(())
    }

    /// Distance for `from -> to`, falling back to the default distance.
    pub fn lookup(&self, from: &str, to: &str) -> f64 {
        match self.get(from, to) {
            Some(distance) => distance,
            None => {
                debug!(from, to, default_nm = self.default_nm, "no distance entry; using default");
                self.default_nm
            }
        }
    }

    /// Exact-match distance for `from -> to` without the default fallback.
    pub fn get(&self, from: &str, to: &str) -> Option<f64> {
        self.entries.get(&distance_key(from, to)).copied()
    }

    /// Whether the ordered pair has an explicit entry.
    pub fn contains(&self, from: &str, to: &str) -> bool {
        self.get(from, to).is_some()
    }

    /// Distance used for pairs absent from the table.
    pub fn default_distance(&self) -> f64 {
        self.default_nm
    }

    /// Number of explicit entries (the default is not counted).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// File the table was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Entries sorted by key, for stable presentation.
    pub fn entries(&self) -> BTreeMap<&str, f64> {
        self.entries
            .iter()
            .map(|(key, nm)| (key.as_str(), *nm))
            .collect()
    }

    /// Load a table from disk, choosing the parser from the file extension.
    ///
    /// `.csv` files are read as `from,to,distance_nm` rows; everything else is
    /// parsed as a JSON object keyed by `"{from}-{to}"` with an optional
    /// `_default` entry.
    pub fn from_path(path: &Path) -> Result<Self> {
        let is_csv = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        let file = fs::File::open(path)?;
        let mut table = if is_csv {
            Self::from_csv_reader(file)?
        } else {
            Self::from_json_reader(file)?
        };
        table.source = Some(path.to_path_buf());

        info!(
            path = %path.display(),
            entries = table.len(),
            default_nm = table.default_nm,
            "loaded distance table"
        );
        Ok(table)
    }

    /// Parse a JSON object of `"{from}-{to}": nm` pairs.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: HashMap<String, f64> = serde_json::from_reader(reader)?;

        let mut default_nm = DEFAULT_DISTANCE_NM;
        let mut entries = HashMap::with_capacity(raw.len());
        for (key, distance_nm) in raw {
            validate_distance(&key, distance_nm)?;
            if key == DEFAULT_KEY {
                default_nm = distance_nm;
                continue;
            }
            if key.trim() != key || !key.contains('-') {
                return Err(Error::DistanceTableFormat {
                    message: format!("malformed port pair key {key:?}; expected \"From-To\""),
                });
            }
            entries.insert(key, distance_nm);
        }

        Ok(Self {
            entries,
            default_nm,
            source: None,
        })
    }

    /// Parse CSV rows with `from`, `to` and `distance_nm` columns.
    ///
    /// A row whose `from` column is `_default` sets the fallback distance.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);
        let headers = csv_reader.headers()?.clone();

        let normalize = |s: &str| {
            s.to_ascii_lowercase()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect::<String>()
        };
        let normalized: Vec<String> = headers.iter().map(normalize).collect();

        let synonyms: &[(&str, &[&str])] = &[
            ("from", &["from", "origin", "source", "port_a"]),
            ("to", &["to", "destination", "target", "port_b"]),
            (
                "distance_nm",
                &["distance_nm", "distance", "nm", "nautical_miles"],
            ),
        ];

        let mut index_map: BTreeMap<&str, usize> = BTreeMap::new();
        for (canon, alts) in synonyms {
            if let Some(idx) = alts
                .iter()
                .find_map(|alt| normalized.iter().position(|h| h == alt))
            {
                index_map.insert(*canon, idx);
            }
        }

        let missing: Vec<&str> = ["from", "to", "distance_nm"]
            .into_iter()
            .filter(|c| !index_map.contains_key(c))
            .collect();
        if !missing.is_empty() {
            return Err(Error::DistanceTableFormat {
                message: format!(
                    "missing required columns: {}. Available: {}",
                    missing.join(", "),
                    headers.iter().collect::<Vec<_>>().join(", ")
                ),
            });
        }

        let from_idx = index_map["from"];
        let to_idx = index_map["to"];
        let distance_idx = index_map["distance_nm"];

        let mut table = Self {
            entries: HashMap::new(),
            default_nm: DEFAULT_DISTANCE_NM,
            source: None,
        };

        for (line, record) in csv_reader.records().enumerate() {
            let record = record?;
            let field = |idx: usize| record.get(idx).unwrap_or_default();
            let from = field(from_idx);
            let to = field(to_idx);
            let raw_distance = field(distance_idx);

            let distance_nm: f64 = raw_distance.parse().map_err(|_| Error::DistanceTableFormat {
                message: format!("row {}: distance {raw_distance:?} is not a number", line + 2),
            })?;

            if from == DEFAULT_KEY {
                validate_distance(DEFAULT_KEY, distance_nm)?;
                table.default_nm = distance_nm;
                continue;
            }
            if from.is_empty() || to.is_empty() {
                return Err(Error::DistanceTableFormat {
                    message: format!("row {}: port names must not be empty", line + 2),
                });
            }
            table.insert(from, to, distance_nm)?;
        }

        Ok(table)
    }
}

fn validate_distance(key: &str, distance_nm: f64) -> Result<()> {
    if !distance_nm.is_finite() || distance_nm <= 0.0 {
        return Err(Error::InvalidDistance {
            key: key.to_string(),
            value: distance_nm,
        });
    }
    Ok(())
}
