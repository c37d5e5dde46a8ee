//! Test fixture loader for consolidation golden scenarios.
//!
//! Provides the `TaxAmount` fixture element and typed deserialization of the
//! JSON files under `golden/`.

use consolidate_core::Consolidatable;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// A tax line. Lines with the same `tax` consolidate by summing amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxAmount {
    pub tax: String,
    pub amount_cents: i64,
}

impl TaxAmount {
    pub fn new(tax: &str, amount_cents: i64) -> Self {
        Self {
            tax: tax.to_string(),
            amount_cents,
        }
    }
}

impl Consolidatable for TaxAmount {
    type Key = String;

    fn group_key(&self) -> String {
        self.tax.clone()
    }

    fn merged_with(self, other: Self) -> Self {
        Self {
            tax: self.tax,
            amount_cents: self.amount_cents + other.amount_cents,
        }
    }
}

/// Expected outcome of the single-result form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SingleOutcome {
    Ok(TaxAmount),
    NotSingleGroup { groups: usize },
}

/// One golden consolidation scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenScenario {
    pub description: String,
    pub input: Vec<TaxAmount>,
    pub expected: Vec<TaxAmount>,
    pub single: SingleOutcome,
}

/// Load `golden/consolidation/<name>.json`.
pub fn load_scenario(name: &str) -> GoldenScenario {
    load_fixture(&format!("golden/consolidation/{name}.json"))
}

/// Every golden consolidation scenario, sorted by file name.
pub fn all_scenarios() -> Vec<(String, GoldenScenario)> {
    list_fixtures("golden/consolidation")
        .into_iter()
        .map(|path| {
            let name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            let scenario = load_scenario(&name);
            (name, scenario)
        })
        .collect()
}
